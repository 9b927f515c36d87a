//! Configuration loading and parsing
//!
//! The config file is optional; everything it holds can also be given as a
//! CLI flag, and flags win. Shape:
//!
//! ```toml
//! [port]
//! path = "/dev/ttyACM1"
//! baud = 115200
//!
//! [channels]
//! labels = ["A7", "A6", "A4", "B3", "B2", "C3", "C1", "C0"]
//!
//! [output]
//! hex = false
//! stats = false
//! max_samples = 1000
//! ```

use anyhow::{Context, Result};
use pin_monitor_decoder::ChannelSet;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Device path the probe enumerates as by default
pub const DEFAULT_PORT: &str = "/dev/ttyACM1";

/// Baud rate named by the probe firmware; nominal over USB CDC
pub const DEFAULT_BAUD: u32 = 115_200;

/// Main application configuration (loaded from config.toml)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub port: PortConfig,
    #[serde(default)]
    pub channels: ChannelsConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PortConfig {
    pub path: Option<String>,
    pub baud: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChannelsConfig {
    /// Exactly eight labels, MSB first; rejected at parse time otherwise
    pub labels: Option<ChannelSet>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub hex: bool,
    #[serde(default)]
    pub stats: bool,
    pub max_samples: Option<u64>,
}

/// Final settings after merging CLI flags, config file, and defaults
#[derive(Debug, Clone)]
pub struct MonitorSettings {
    pub port: String,
    pub baud: u32,
    pub channels: ChannelSet,
    pub hex: bool,
    pub stats: bool,
    pub max_samples: Option<u64>,
}

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: AppConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_deserialization() {
        let toml_content = r#"
            [port]
            path = "/dev/ttyUSB0"
            baud = 9600

            [channels]
            labels = ["A7", "A6", "A4", "B3", "B2", "C3", "C1", "C0"]

            [output]
            hex = true
            max_samples = 500
        "#;

        let config: AppConfig = toml::from_str(toml_content).unwrap();
        assert_eq!(config.port.path.as_deref(), Some("/dev/ttyUSB0"));
        assert_eq!(config.port.baud, Some(9600));
        assert_eq!(
            config.channels.labels.unwrap().header(),
            "A7,A6,A4,B3,B2,C3,C1,C0"
        );
        assert!(config.output.hex);
        assert!(!config.output.stats);
        assert_eq!(config.output.max_samples, Some(500));
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert!(config.port.path.is_none());
        assert!(config.port.baud.is_none());
        assert!(config.channels.labels.is_none());
        assert!(!config.output.hex);
    }

    #[test]
    fn test_bad_channel_count_rejected() {
        let toml_content = r#"
            [channels]
            labels = ["A7", "A6"]
        "#;
        assert!(toml::from_str::<AppConfig>(toml_content).is_err());
    }
}
