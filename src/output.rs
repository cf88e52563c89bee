//! Format in which a finished calibration is written out.

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum OutputType {
    /// Let the calibrator pick the format matching its driver.
    #[default]
    #[serde(rename = "auto")]
    Auto,
    /// A snippet for /etc/X11/xorg.conf.d.
    #[serde(rename = "xorg.conf.d")]
    XorgConfD,
    /// A HAL .fdi policy file.
    #[serde(rename = "hal")]
    Hal,
    /// `xinput set-prop` commands.
    #[serde(rename = "xinput")]
    XInput,
}

impl fmt::Display for OutputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputType::Auto => write!(f, "auto"),
            OutputType::XorgConfD => write!(f, "xorg.conf.d"),
            OutputType::Hal => write!(f, "hal"),
            OutputType::XInput => write!(f, "xinput"),
        }
    }
}

impl FromStr for OutputType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(OutputType::Auto),
            "xorg.conf.d" => Ok(OutputType::XorgConfD),
            "hal" => Ok(OutputType::Hal),
            "xinput" => Ok(OutputType::XInput),
            _ => Err(format!(
                "Invalid output type '{}'. Valid values: auto, xorg.conf.d, hal, xinput",
                s
            )),
        }
    }
}
