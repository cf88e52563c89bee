use clap::Parser;
use std::path::PathBuf;

use crate::device::Selector;
use crate::geometry::Geometry;
use crate::output::OutputType;

#[derive(Parser, Debug)]
#[command(name = "xinput-calibrator")]
#[command(about = "Find a touchscreen through XInput and pick the calibrator for its driver")]
#[command(version)]
pub struct Cli {
    /// Print debug messages during the process
    #[arg(short, long)]
    pub verbose: bool,

    /// List calibratable input devices and quit
    #[arg(long)]
    pub list: bool,

    /// Select a specific device to calibrate (name, or id if only digits)
    #[arg(long, value_name = "DEVICE NAME OR ID")]
    pub device: Option<Selector>,

    /// Manually provide the current calibration setting (eg. the values in xorg.conf)
    #[arg(
        long,
        num_args = 1..=4,
        allow_negative_numbers = true,
        value_names = ["MINX", "MAXX", "MINY", "MAXY"]
    )]
    pub precalib: Option<Vec<i32>>,

    /// Misclick threshold in pixels (0=off) [default: 15]
    #[arg(long, value_name = "NR OF PIXELS")]
    pub misclick: Option<u32>,

    /// Double-click threshold in pixels [default: 7]
    #[arg(long, value_name = "NR OF PIXELS")]
    pub doubleclick: Option<u32>,

    /// Type of config to output (auto, xorg.conf.d, hal, xinput) [default: auto]
    #[arg(long, value_parser = clap::value_parser!(OutputType))]
    pub output_type: Option<OutputType>,

    /// Manually provide the geometry for the calibration window
    #[arg(long, value_name = "WxH+X+Y", value_parser = clap::value_parser!(Geometry))]
    pub geometry: Option<Geometry>,

    /// Emulate a fake device (for testing purposes)
    #[arg(long)]
    pub fake: bool,

    /// X display to connect to
    #[arg(long, env = "DISPLAY")]
    pub display: Option<String>,

    /// Path to config file
    #[arg(long, env = "XINPUT_CALIBRATOR_CONFIG")]
    pub config: Option<PathBuf>,
}
