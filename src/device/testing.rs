//! In-memory device and property sources for tests.

use std::cell::Cell;
use std::collections::HashMap;

use crate::axis::AxisRange;
use crate::error::Result;

use super::{
    DeviceId, DeviceSource, DeviceUse, InputClass, InputDevice, PropertySource, ValuatorMode,
};

pub struct StaticSource {
    devices: Vec<InputDevice>,
    opened: Cell<usize>,
}

impl StaticSource {
    pub fn new(devices: Vec<InputDevice>) -> Self {
        Self {
            devices,
            opened: Cell::new(0),
        }
    }

    /// Number of times the device list was requested.
    pub fn opened(&self) -> usize {
        self.opened.get()
    }
}

impl DeviceSource for StaticSource {
    fn devices(&self) -> Result<Vec<InputDevice>> {
        self.opened.set(self.opened.get() + 1);
        Ok(self.devices.clone())
    }
}

#[derive(Default)]
pub struct StaticProperties {
    values: HashMap<(u32, String), Vec<i32>>,
}

impl StaticProperties {
    pub fn with(mut self, device: u32, name: &str, values: &[i32]) -> Self {
        self.values.insert((device, name.to_string()), values.to_vec());
        self
    }
}

impl PropertySource for StaticProperties {
    fn read_properties(&self, device: DeviceId, names: &[&str]) -> Result<Vec<Option<Vec<i32>>>> {
        Ok(names
            .iter()
            .map(|name| self.values.get(&(device.0, name.to_string())).cloned())
            .collect())
    }
}

pub fn absolute(axes: &[(i32, i32)]) -> InputClass {
    InputClass::Valuator {
        mode: ValuatorMode::Absolute,
        axes: axes.iter().map(|&(min, max)| AxisRange::new(min, max)).collect(),
    }
}

pub fn device(id: u32, name: &str, classes: Vec<InputClass>) -> InputDevice {
    InputDevice {
        id: DeviceId(id),
        name: name.into(),
        usage: DeviceUse::Extension,
        classes,
    }
}

pub fn virtual_pointer(id: u32, name: &str, classes: Vec<InputClass>) -> InputDevice {
    InputDevice {
        usage: DeviceUse::VirtualPointer,
        ..device(id, name, classes)
    }
}
