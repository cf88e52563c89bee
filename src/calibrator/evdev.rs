//! Calibration through the evdev driver's device properties.

use crate::axis::DeviceAxes;
use crate::device::{DeviceDescriptor, DeviceId, PropertySource};

use super::{Calibrator, Driver, Probe, Settings, Strategy};

pub const CALIBRATION_PROPERTY: &str = "Evdev Axis Calibration";
pub const INVERSION_PROPERTY: &str = "Evdev Axis Inversion";
pub const SWAP_PROPERTY: &str = "Evdev Axes Swap";

pub struct EvdevStrategy<'a> {
    properties: &'a dyn PropertySource,
    /// Keep the resolved axes even if the driver reports an active calibration.
    keep_axes: bool,
}

impl<'a> EvdevStrategy<'a> {
    pub fn new(properties: &'a dyn PropertySource, keep_axes: bool) -> Self {
        Self { properties, keep_axes }
    }
}

impl Strategy for EvdevStrategy<'_> {
    fn name(&self) -> &'static str {
        "evdev"
    }

    fn probe(&self, device: &DeviceDescriptor, settings: &Settings) -> Probe {
        let Some(id) = device.id else {
            return Probe::NotApplicable("device has no XInput id".into());
        };

        let values = match self
            .properties
            .read_properties(id, &[CALIBRATION_PROPERTY, INVERSION_PROPERTY, SWAP_PROPERTY])
        {
            Ok(values) => values,
            Err(e) => return Probe::NotApplicable(format!("cannot read properties of device {}: {}", id, e)),
        };
        let mut values = values.into_iter();

        let Some(calibration) = values.next().flatten() else {
            return Probe::NotApplicable(format!(
                "\"{}\" property missing, not a (valid) evdev device",
                CALIBRATION_PROPERTY
            ));
        };
        let inversion = values.next().flatten().unwrap_or_default();
        let swap = values.next().flatten().unwrap_or_default();

        let current = match calibration.as_slice() {
            &[min_x, max_x, min_y, max_y] => {
                let axes = DeviceAxes::new(min_x, max_x, min_y, max_y);
                log::trace!("Read current calibration values from Evdev: {}", axes);
                Some(axes)
            }
            [] => {
                log::trace!("Evdev calibration not set, using the device axis ranges");
                None
            }
            other => {
                log::trace!("Ignoring Evdev calibration with {} values", other.len());
                None
            }
        };

        let mut settings = settings.clone();
        if let Some(axes) = current.filter(|_| !self.keep_axes) {
            settings.axes = axes;
        }

        log::info!("Calibrating EVDEV driver for \"{}\" id={}", settings.device_name, id);

        Probe::Applicable(Box::new(Evdev {
            settings,
            device: id,
            current,
            invert_x: flag(&inversion, 0),
            invert_y: flag(&inversion, 1),
            swap_xy: flag(&swap, 0),
        }))
    }
}

fn flag(values: &[i32], index: usize) -> bool {
    values.get(index).is_some_and(|&v| v != 0)
}

#[derive(Debug)]
pub struct Evdev {
    settings: Settings,
    device: DeviceId,
    current: Option<DeviceAxes>,
    invert_x: bool,
    invert_y: bool,
    swap_xy: bool,
}

impl Calibrator for Evdev {
    fn driver(&self) -> Driver {
        Driver::Evdev
    }

    fn settings(&self) -> &Settings {
        &self.settings
    }

    fn describe(&self) -> String {
        let current = match self.current {
            Some(axes) => axes.to_string(),
            None => "none".into(),
        };
        format!(
            "evdev device id={} (current calibration: {}; invert_x={}, invert_y={}, swap_xy={})",
            self.device, current, self.invert_x, self.invert_y, self.swap_xy
        )
    }
}
