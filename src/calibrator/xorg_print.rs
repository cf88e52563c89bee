//! Generic calibrator for standard Xorg drivers (evtouch, mutouch, ...).
//!
//! The calibration is only printed as driver options, so this applies to any
//! device and is used when no driver-specific calibrator accepts it.

use super::{Calibrator, Driver, Fallback, Settings};

#[derive(Debug, Clone, Copy, Default)]
pub struct XorgPrintStrategy;

impl Fallback for XorgPrintStrategy {
    fn build(&self, settings: Settings) -> Box<dyn Calibrator> {
        log::info!("Calibrating standard Xorg driver \"{}\"", settings.device_name);
        log::trace!("\tcurrent calibration values: {}", settings.axes);
        Box::new(XorgPrint::new(settings))
    }
}

#[derive(Debug)]
pub struct XorgPrint {
    settings: Settings,
}

impl XorgPrint {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }
}

impl Calibrator for XorgPrint {
    fn driver(&self) -> Driver {
        Driver::XorgPrint
    }

    fn settings(&self) -> &Settings {
        &self.settings
    }

    fn describe(&self) -> String {
        format!("standard Xorg driver (current calibration: {})", self.settings.axes)
    }
}
