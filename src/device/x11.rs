//! XInput access over an X11 connection.

use x11rb::connection::RequestConnection;
use x11rb::protocol::xinput::{self, ConnectionExt as _};
use x11rb::protocol::xproto::{AtomEnum, ConnectionExt as _};
use x11rb::rust_connection::RustConnection;

use crate::axis::AxisRange;
use crate::error::{Error, Result};

use super::{DeviceId, DeviceSource, DeviceUse, InputClass, InputDevice, PropertySource, ValuatorMode};

/// Longest property value read, in 32-bit units.
const MAX_PROPERTY_ITEMS: u32 = 64;

/// Devices and properties of an X display.
///
/// Every query opens its own connection and drops it before returning.
#[derive(Debug, Clone, Default)]
pub struct X11Source {
    display: Option<String>,
}

impl X11Source {
    /// `None` uses `$DISPLAY`.
    pub fn new(display: Option<String>) -> Self {
        Self { display }
    }

    fn connect(&self) -> Result<RustConnection> {
        let (conn, _screen) = x11rb::connect(self.display.as_deref())?;

        if conn.extension_information(xinput::X11_EXTENSION_NAME)?.is_none() {
            return Err(Error::NoInputExtension);
        }

        if log::log_enabled!(log::Level::Trace) {
            let version = conn
                .xinput_get_extension_version(xinput::X11_EXTENSION_NAME.as_bytes())?
                .reply()?;
            if version.present {
                log::trace!(
                    "{} version is {}.{}",
                    xinput::X11_EXTENSION_NAME,
                    version.server_major,
                    version.server_minor
                );
            }
        }

        Ok(conn)
    }
}

impl DeviceSource for X11Source {
    fn devices(&self) -> Result<Vec<InputDevice>> {
        let conn = self.connect()?;
        let reply = conn.xinput_list_input_devices()?.reply()?;

        // Class infos of all devices are concatenated; each device owns the
        // next `num_class_info` entries.
        let mut infos = reply.infos.into_iter();
        let devices = reply
            .devices
            .iter()
            .zip(reply.names.iter())
            .map(|(info, name)| InputDevice {
                id: DeviceId(info.device_id.into()),
                name: String::from_utf8_lossy(&name.name).into_owned(),
                usage: device_use(info.device_use),
                classes: infos
                    .by_ref()
                    .take(info.num_class_info.into())
                    .map(|class| input_class(&class.info))
                    .collect(),
            })
            .collect();

        Ok(devices)
    }
}

impl PropertySource for X11Source {
    fn read_properties(&self, device: DeviceId, names: &[&str]) -> Result<Vec<Option<Vec<i32>>>> {
        let Ok(deviceid) = u16::try_from(device.0) else {
            return Ok(vec![None; names.len()]);
        };

        let conn = self.connect()?;
        conn.xinput_xi_query_version(2, 0)?.reply()?;

        let mut values = Vec::with_capacity(names.len());
        for name in names {
            let atom = conn.intern_atom(true, name.as_bytes())?.reply()?.atom;
            if atom == x11rb::NONE {
                values.push(None);
                continue;
            }

            let reply = conn
                .xinput_xi_get_property(deviceid, false, atom, u32::from(AtomEnum::ANY), 0, MAX_PROPERTY_ITEMS)?
                .reply()?;
            if reply.type_ == x11rb::NONE {
                values.push(None);
                continue;
            }

            let items = match reply.items {
                xinput::XIGetPropertyItems::Data8(data) => data.into_iter().map(i32::from).collect(),
                xinput::XIGetPropertyItems::Data16(data) => data.into_iter().map(i32::from).collect(),
                // INTEGER properties carry signed values in 32-bit slots.
                xinput::XIGetPropertyItems::Data32(data) => data.into_iter().map(|v| v as i32).collect(),
                #[allow(unreachable_patterns)]
                _ => Vec::new(),
            };
            log::trace!("Device {} property '{}' = {:?}", device, name, items);
            values.push(Some(items));
        }

        Ok(values)
    }
}

fn device_use(usage: xinput::DeviceUse) -> DeviceUse {
    if usage == xinput::DeviceUse::IS_X_POINTER {
        DeviceUse::VirtualPointer
    } else if usage == xinput::DeviceUse::IS_X_KEYBOARD {
        DeviceUse::VirtualKeyboard
    } else {
        DeviceUse::Extension
    }
}

fn input_class(info: &xinput::InputInfoInfo) -> InputClass {
    match info {
        xinput::InputInfoInfo::Valuator(valuator) => InputClass::Valuator {
            mode: if valuator.mode == xinput::ValuatorMode::ABSOLUTE {
                ValuatorMode::Absolute
            } else {
                ValuatorMode::Relative
            },
            axes: valuator
                .axes
                .iter()
                .map(|axis| AxisRange::new(axis.minimum, axis.maximum))
                .collect(),
        },
        _ => InputClass::Other,
    }
}
