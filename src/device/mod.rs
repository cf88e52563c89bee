mod scan;
#[cfg(test)]
pub mod testing;
mod x11;

pub use scan::{scan, ScanResult};
pub use x11::X11Source;

use std::fmt;
use std::str::FromStr;

use crate::axis::{AxisRange, DeviceAxes};
use crate::error::Result;

/// XInput device identifier (XID).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeviceId(pub u32);

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How the server uses a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceUse {
    /// The core (master) pointer: an aggregate of all physical pointers.
    VirtualPointer,
    /// The core (master) keyboard.
    VirtualKeyboard,
    /// A physical or extension device.
    Extension,
}

impl DeviceUse {
    pub fn is_virtual(&self) -> bool {
        matches!(self, DeviceUse::VirtualPointer | DeviceUse::VirtualKeyboard)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValuatorMode {
    Relative,
    Absolute,
}

/// One class descriptor of a device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputClass {
    Valuator {
        mode: ValuatorMode,
        axes: Vec<AxisRange>,
    },
    /// Key, button and any other class; never makes a device calibratable.
    Other,
}

/// A device as reported by the input subsystem, before filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputDevice {
    pub id: DeviceId,
    pub name: String,
    pub usage: DeviceUse,
    pub classes: Vec<InputClass>,
}

/// A calibratable device chosen by the scanner (or the fake device).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceDescriptor {
    /// `None` for the fake device.
    pub id: Option<DeviceId>,
    pub name: String,
    pub axes: DeviceAxes,
}

impl DeviceDescriptor {
    pub const FAKE_NAME: &'static str = "Fake_device";

    /// Device used by `--fake` to run without hardware.
    pub fn fake() -> Self {
        Self {
            id: None,
            name: Self::FAKE_NAME.into(),
            axes: DeviceAxes::new(0, 1000, 0, 1000),
        }
    }
}

/// Which device `--device` refers to.
///
/// A selector made only of digits is always an id, so a device whose name is
/// purely numeric cannot be selected by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Id(u32),
    Name(String),
}

impl Selector {
    pub fn matches(&self, device: &InputDevice) -> bool {
        match self {
            Selector::Id(id) => device.id.0 == *id,
            Selector::Name(name) => device.name == *name,
        }
    }
}

impl FromStr for Selector {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
            // Out-of-range ids match nothing.
            Ok(Selector::Id(s.parse().unwrap_or(u32::MAX)))
        } else {
            Ok(Selector::Name(s.to_string()))
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Id(id) => write!(f, "{}", id),
            Selector::Name(name) => write!(f, "{}", name),
        }
    }
}

/// Enumerates the registered input devices.
///
/// Implementations open their connection inside `devices` and release it
/// before returning.
pub trait DeviceSource {
    fn devices(&self) -> Result<Vec<InputDevice>>;
}

/// Reads integer-valued device properties by name.
pub trait PropertySource {
    /// Values of each named property of `device`, in the order of `names`.
    /// A property the device does not carry is `None`.
    fn read_properties(&self, device: DeviceId, names: &[&str]) -> Result<Vec<Option<Vec<i32>>>>;
}
