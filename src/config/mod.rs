mod cli;
mod file;

pub use cli::Cli;

use crate::axis::DeviceAxes;
use crate::device::Selector;
use crate::geometry::Geometry;
use crate::output::OutputType;

pub const DEFAULT_MISCLICK: u32 = 15;
pub const DEFAULT_DOUBLECLICK: u32 = 7;

/// Pixel distances used by the click-collecting session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    /// 0 disables mis-click detection.
    pub misclick: u32,
    pub doubleclick: u32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            misclick: DEFAULT_MISCLICK,
            doubleclick: DEFAULT_DOUBLECLICK,
        }
    }
}

/// Merged configuration from CLI args and TOML file.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub list_only: bool,
    pub fake: bool,
    pub selector: Option<Selector>,
    /// Bounds left at -1 keep the value reported by the device.
    pub precalibration: Option<DeviceAxes>,
    pub thresholds: Thresholds,
    pub output_type: OutputType,
    pub geometry: Option<Geometry>,
    pub display: Option<String>,
}

impl Config {
    /// Load configuration by merging TOML file with CLI overrides.
    pub fn load(cli: &Cli) -> Self {
        let file_config = cli
            .config
            .as_ref()
            .and_then(|p| file::load_from_path(p))
            .or_else(file::load_from_default_paths)
            .unwrap_or_default();

        Self::merge(cli, file_config)
    }

    fn merge(cli: &Cli, file_config: file::FileConfig) -> Self {
        let defaults = Thresholds::default();

        Self {
            list_only: cli.list,
            fake: cli.fake,
            selector: cli.device.clone().or_else(|| {
                file_config
                    .device
                    .as_deref()
                    .map(|d| d.parse().unwrap_or_else(|never| match never {}))
            }),
            precalibration: cli.precalib.as_deref().map(DeviceAxes::from_precalib),
            thresholds: Thresholds {
                misclick: cli.misclick.or(file_config.misclick).unwrap_or(defaults.misclick),
                doubleclick: cli
                    .doubleclick
                    .or(file_config.doubleclick)
                    .unwrap_or(defaults.doubleclick),
            },
            output_type: cli.output_type.or(file_config.output_type).unwrap_or_default(),
            geometry: cli.geometry.or(file_config.geometry),
            display: cli.display.clone(),
        }
    }
}
