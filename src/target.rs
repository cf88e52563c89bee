//! Choose the device to calibrate.

use crate::config::Config;
use crate::device::{self, DeviceDescriptor, DeviceSource};
use crate::error::{Error, Result};

/// What the device lookup produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// `--list` was given; devices were printed and nothing is calibrated.
    Listed { count: usize },
    Device(DeviceDescriptor),
}

/// Resolve the calibration target from `config`, scanning `source` unless the
/// fake device is requested. Precalibration values are applied to the result.
pub fn resolve<S: DeviceSource + ?Sized>(source: &S, config: &Config) -> Result<Target> {
    let mut descriptor = if config.fake {
        let fake = DeviceDescriptor::fake();
        log::trace!("Faking device: {}", fake.name);
        fake
    } else {
        let found = device::scan(source, config.selector.as_ref(), config.list_only)?;

        if config.list_only {
            if found.count == 0 {
                log::error!("No calibratable devices found.");
            }
            return Ok(Target::Listed { count: found.count });
        }

        let Some(last) = found.last else {
            return Err(match &config.selector {
                None => Error::NoDevices,
                Some(selector) => Error::DeviceNotFound(selector.to_string()),
            });
        };

        if found.count > 1 {
            log::warn!(
                "Multiple calibratable devices found, calibrating last one ({})\n\tuse --device to select another one.",
                last.name
            );
        }
        log::trace!("Selected device: {}", last.name);
        last
    };

    if let Some(overrides) = &config.precalibration {
        descriptor.axes = descriptor.axes.with_overrides(overrides);
        log::trace!(
            "Setting precalibration: {}, {}, {}, {}",
            descriptor.axes.x.min,
            descriptor.axes.x.max,
            descriptor.axes.y.min,
            descriptor.axes.y.max
        );
    }

    Ok(Target::Device(descriptor))
}
