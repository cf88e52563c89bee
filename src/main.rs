mod axis;
mod calibrator;
mod config;
mod device;
mod error;
mod geometry;
mod output;
mod target;

use clap::Parser;

use config::{Cli, Config};
use device::X11Source;
use target::Target;

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "trace" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();

    let config = Config::load(&cli);

    if let Err(e) = run(&config) {
        log::error!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(config: &Config) -> error::Result<()> {
    let source = X11Source::new(config.display.clone());

    let device = match target::resolve(&source, config)? {
        Target::Listed { count } => {
            log::debug!("Listed {} calibratable device(s)", count);
            return Ok(());
        }
        Target::Device(device) => device,
    };

    let selection = calibrator::select(&device, config, &source);
    for rejection in &selection.rejections {
        log::debug!("Skipped {}", rejection);
    }

    let calibrator = selection.calibrator;
    let settings = calibrator.settings();
    log::info!(
        "Using {} calibrator for \"{}\": {}, misclick={}, doubleclick={}, output-type={}, geometry={}",
        calibrator.driver(),
        settings.device_name,
        settings.axes,
        settings.thresholds.misclick,
        settings.thresholds.doubleclick,
        settings.output_type,
        settings
            .geometry
            .map(|g| g.to_string())
            .unwrap_or_else(|| "fullscreen".into())
    );
    log::debug!("{}", calibrator.describe());

    Ok(())
}
