//! Configuration loading using Figment.
//!
//! Configuration is loaded from:
//! 1. `config/scan.toml` (base configuration)
//! 2. Environment variables (prefixed with `GALVO_SCAN_`, nested keys split on `__`)
//!
//! # Example
//! ```no_run
//! use galvo_scan::config::ScanConfig;
//!
//! let config = ScanConfig::load()?;
//! println!("Scanning {}x{}", config.scan.width, config.scan.height);
//! # Ok::<(), galvo_scan::error::ScanError>(())
//! ```

use crate::error::{ScanError, ScanResult};
use crate::waveform::WaveformParams;
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default configuration file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config/scan.toml";

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Application settings
    pub application: ApplicationConfig,
    /// Frame geometry
    pub scan: WaveformParams,
    /// Export settings
    #[serde(default)]
    pub output: OutputConfig,
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Application name
    #[serde(default = "default_name")]
    pub name: String,
    /// Logging level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Where and what to export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output directory for generated waveforms
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
    /// Also export the digital clocks
    #[serde(default = "default_write_clocks")]
    pub write_clocks: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            write_clocks: default_write_clocks(),
        }
    }
}

// Default value functions
fn default_name() -> String {
    "galvo-scan".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("waveforms")
}

fn default_write_clocks() -> bool {
    true
}

impl ScanConfig {
    /// Load configuration from `config/scan.toml` and environment variables
    ///
    /// Environment variables override the file with prefix `GALVO_SCAN_`.
    /// Example: `GALVO_SCAN_SCAN__ZOOM=2.0`
    pub fn load() -> ScanResult<Self> {
        Self::load_from(DEFAULT_CONFIG_PATH)
    }

    /// Load configuration from a specific file path
    pub fn load_from<P: AsRef<Path>>(path: P) -> ScanResult<Self> {
        let config = Figment::new()
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed("GALVO_SCAN_").split("__"))
            .extract()?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(&self) -> ScanResult<()> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.application.log_level.to_lowercase().as_str()) {
            return Err(ScanError::Configuration(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.application.log_level,
                valid_levels.join(", ")
            )));
        }

        self.scan.validate()
    }
}
