use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::geometry::Geometry;
use crate::output::OutputType;

const FILE_NAME: &str = "xinput-calibrator.toml";

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub device: Option<String>,
    pub misclick: Option<u32>,
    pub doubleclick: Option<u32>,
    pub output_type: Option<OutputType>,
    pub geometry: Option<Geometry>,
}

pub fn parse(content: &str) -> Result<FileConfig, toml::de::Error> {
    toml::from_str(content)
}

pub fn load_from_path(path: &Path) -> Option<FileConfig> {
    let content = std::fs::read_to_string(path).ok()?;
    match parse(&content) {
        Ok(config) => {
            log::debug!("Loaded config from {}", path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("Failed to parse {}: {}", path.display(), e);
            None
        }
    }
}

pub fn load_from_default_paths() -> Option<FileConfig> {
    for path in default_config_paths() {
        if path.exists() {
            if let Some(config) = load_from_path(&path) {
                return Some(config);
            }
        }
    }
    None
}

fn default_config_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(FILE_NAME)];

    if let Ok(home) = std::env::var("HOME") {
        paths.push(PathBuf::from(home).join(".config").join(FILE_NAME));
    }

    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full() {
        let config = parse(
            r#"
            device = "eGalax Inc. USB TouchController"
            misclick = 20
            doubleclick = 5
            output_type = "xorg.conf.d"
            geometry = "1024x768+0+0"
            "#,
        )
        .unwrap();

        assert_eq!(config.device.as_deref(), Some("eGalax Inc. USB TouchController"));
        assert_eq!(config.misclick, Some(20));
        assert_eq!(config.doubleclick, Some(5));
        assert_eq!(config.output_type, Some(OutputType::XorgConfD));
        assert_eq!(config.geometry.unwrap().width, 1024);
    }

    #[test]
    fn test_parse_empty() {
        let config = parse("").unwrap();
        assert!(config.device.is_none());
        assert!(config.output_type.is_none());
    }

    #[test]
    fn test_rejects_unknown_and_invalid() {
        assert!(parse("fake = true").is_err());
        assert!(parse(r#"output_type = "xorg.conf""#).is_err());
        assert!(parse(r#"geometry = "big""#).is_err());
    }

    #[test]
    fn test_missing_file() {
        assert!(load_from_path(Path::new("/nonexistent/xinput-calibrator.toml")).is_none());
    }
}
