//! Runtime configuration.
//!
//! [`Config`] is loaded from TOML. Every key is optional; missing keys take the defaults
//! shown below.
//!
//! ```toml
//! device = "/dev/input/js0"
//! poll_interval_us = 100
//! refresh_ms = 10
//! output = "text"   # or "json"
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::handler::POLL_INTERVAL;
use crate::Result;

/// Default joystick device node.
pub const DEFAULT_DEVICE: &str = "/dev/input/js0";

/// How snapshots are rendered by front ends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Joystick device node to open.
    pub device: PathBuf,
    /// Handler sleep when the device is idle, in microseconds.
    pub poll_interval_us: u64,
    /// Redraw period of front ends, in milliseconds.
    pub refresh_ms: u64,
    pub output: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            device: PathBuf::from(DEFAULT_DEVICE),
            poll_interval_us: POLL_INTERVAL.as_micros() as u64,
            refresh_ms: 10,
            output: OutputFormat::Text,
        }
    }
}

impl Config {
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_micros(self.poll_interval_us)
    }

    pub fn refresh(&self) -> Duration {
        Duration::from_millis(self.refresh_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn empty_document_is_default() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
        assert_eq!(Config::default().poll_interval(), POLL_INTERVAL);
    }

    #[test]
    fn partial_document_keeps_other_defaults() {
        let cfg = Config::from_toml("device = \"/dev/input/js1\"\noutput = \"json\"\n").unwrap();
        assert_eq!(cfg.device, PathBuf::from("/dev/input/js1"));
        assert_eq!(cfg.output, OutputFormat::Json);
        assert_eq!(cfg.refresh(), Duration::from_millis(10));
    }

    #[test]
    fn bad_value_is_config_error() {
        let err = Config::from_toml("refresh_ms = \"soon\"").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
