//! Pick the calibrator that matches the driver of the target device.
//!
//! Drivers expose calibration through different mechanisms (kernel module
//! parameters, evdev device properties, plain xorg.conf options) and the
//! device descriptor alone does not tell which one is present. Each strategy
//! is therefore probed in priority order and the first one that accepts the
//! device is used. A refusal is an ordinary [`Probe::NotApplicable`] answer.

mod evdev;
mod usbtouchscreen;
mod xorg_print;

use evdev::EvdevStrategy;
use usbtouchscreen::UsbtouchscreenStrategy;
use xorg_print::XorgPrintStrategy;

use std::fmt;

use crate::axis::DeviceAxes;
use crate::config::{Config, Thresholds};
use crate::device::{DeviceDescriptor, PropertySource};
use crate::geometry::Geometry;
use crate::output::OutputType;

/// Everything a calibrator is constructed with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub device_name: String,
    pub axes: DeviceAxes,
    pub thresholds: Thresholds,
    pub output_type: OutputType,
    pub geometry: Option<Geometry>,
}

impl Settings {
    pub fn new(device: &DeviceDescriptor, config: &Config) -> Self {
        Self {
            device_name: device.name.clone(),
            axes: device.axes,
            thresholds: config.thresholds,
            output_type: config.output_type,
            geometry: config.geometry,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Driver {
    Usbtouchscreen,
    Evdev,
    XorgPrint,
}

impl fmt::Display for Driver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Driver::Usbtouchscreen => write!(f, "usbtouchscreen"),
            Driver::Evdev => write!(f, "evdev"),
            Driver::XorgPrint => write!(f, "xorg"),
        }
    }
}

/// A committed calibrator, ready for the interactive session.
pub trait Calibrator: fmt::Debug {
    fn driver(&self) -> Driver;

    fn settings(&self) -> &Settings;

    /// Driver-specific state read while probing, for diagnostics.
    fn describe(&self) -> String;
}

/// Answer of a strategy asked whether it can handle a device.
#[derive(Debug)]
pub enum Probe {
    Applicable(Box<dyn Calibrator>),
    NotApplicable(String),
}

/// A calibrator that may or may not apply to a device.
pub trait Strategy {
    fn name(&self) -> &'static str;

    fn probe(&self, device: &DeviceDescriptor, settings: &Settings) -> Probe;
}

/// The last resort: a calibrator that applies to every device.
pub trait Fallback {
    fn build(&self, settings: Settings) -> Box<dyn Calibrator>;
}

/// A strategy that declined the device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub strategy: &'static str,
    pub reason: String,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.strategy, self.reason)
    }
}

#[derive(Debug)]
pub struct Selection {
    pub calibrator: Box<dyn Calibrator>,
    /// Strategies tried before the committed one, in order.
    pub rejections: Vec<Rejection>,
}

/// Select the calibrator for `device` from the built-in strategies:
/// usbtouchscreen, then evdev, then the generic Xorg fallback.
pub fn select(device: &DeviceDescriptor, config: &Config, properties: &dyn PropertySource) -> Selection {
    let usbtouchscreen = UsbtouchscreenStrategy::default();
    let evdev = EvdevStrategy::new(properties, config.precalibration.is_some());

    select_with(
        &[&usbtouchscreen, &evdev],
        &XorgPrintStrategy,
        device,
        Settings::new(device, config),
    )
}

/// Probe `strategies` in order and commit to the first applicable one, or to
/// `fallback` if all decline.
pub fn select_with(
    strategies: &[&dyn Strategy],
    fallback: &dyn Fallback,
    device: &DeviceDescriptor,
    settings: Settings,
) -> Selection {
    let mut rejections = Vec::new();

    for strategy in strategies {
        match strategy.probe(device, &settings) {
            Probe::Applicable(calibrator) => {
                return Selection {
                    calibrator,
                    rejections,
                }
            }
            Probe::NotApplicable(reason) => {
                log::trace!("Not {} calibrator: {}", strategy.name(), reason);
                rejections.push(Rejection {
                    strategy: strategy.name(),
                    reason,
                });
            }
        }
    }

    Selection {
        calibrator: fallback.build(settings),
        rejections,
    }
}
