//! Calibration through the usbtouchscreen kernel module parameters.

use std::fs;
use std::path::{Path, PathBuf};

use crate::device::DeviceDescriptor;

use super::{Calibrator, Driver, Probe, Settings, Strategy};

/// Name the usbtouchscreen driver registers its device under.
pub const DEVICE_NAME: &str = "Usbtouchscreen";

const MODULE_PARAMETERS: &str = "/sys/module/usbtouchscreen/parameters";

const P_TRANSFORM_XY: &str = "transform_xy";
const P_FLIP_X: &str = "flip_x";
const P_FLIP_Y: &str = "flip_y";
const P_SWAP_XY: &str = "swap_xy";

/// Boolean parameters of the running kernel module.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KernelFlags {
    pub transform_xy: bool,
    pub flip_x: bool,
    pub flip_y: bool,
    pub swap_xy: bool,
}

#[derive(Debug)]
pub struct UsbtouchscreenStrategy {
    parameters: PathBuf,
}

impl Default for UsbtouchscreenStrategy {
    fn default() -> Self {
        Self::with_parameters(MODULE_PARAMETERS)
    }
}

impl UsbtouchscreenStrategy {
    /// Read module parameters from `dir` instead of sysfs.
    pub fn with_parameters(dir: impl Into<PathBuf>) -> Self {
        Self { parameters: dir.into() }
    }

    fn read_kernel_flags(&self) -> KernelFlags {
        KernelFlags {
            transform_xy: read_bool_parameter(&self.parameters, P_TRANSFORM_XY),
            flip_x: read_bool_parameter(&self.parameters, P_FLIP_X),
            flip_y: read_bool_parameter(&self.parameters, P_FLIP_Y),
            swap_xy: read_bool_parameter(&self.parameters, P_SWAP_XY),
        }
    }
}

impl Strategy for UsbtouchscreenStrategy {
    fn name(&self) -> &'static str {
        "usbtouchscreen"
    }

    fn probe(&self, device: &DeviceDescriptor, settings: &Settings) -> Probe {
        if device.name != DEVICE_NAME {
            return Probe::NotApplicable("Not a usbtouchscreen device".into());
        }

        let kernel = self.read_kernel_flags();
        log::debug!("usbtouchscreen parameters: {:?}", kernel);
        log::info!("Calibrating Usbtouchscreen, through the kernel module");

        Probe::Applicable(Box::new(Usbtouchscreen {
            settings: settings.clone(),
            kernel,
        }))
    }
}

#[derive(Debug)]
pub struct Usbtouchscreen {
    settings: Settings,
    kernel: KernelFlags,
}

impl Calibrator for Usbtouchscreen {
    fn driver(&self) -> Driver {
        Driver::Usbtouchscreen
    }

    fn settings(&self) -> &Settings {
        &self.settings
    }

    fn describe(&self) -> String {
        format!(
            "usbtouchscreen kernel module (transform_xy={}, flip_x={}, flip_y={}, swap_xy={})",
            self.kernel.transform_xy, self.kernel.flip_x, self.kernel.flip_y, self.kernel.swap_xy
        )
    }
}

/// `Y` means true. An unreadable parameter is reported and read as false.
fn read_bool_parameter(dir: &Path, name: &str) -> bool {
    match fs::read_to_string(dir.join(name)) {
        Ok(value) => value.starts_with('Y'),
        Err(e) => {
            log::error!("Could not read parameter '{}': {}", name, e);
            false
        }
    }
}
