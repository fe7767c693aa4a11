//! Engine configuration, loadable from TOML.
//!
//! Every field has a default, so an empty document is a valid config:
//!
//! ```toml
//! cycle_epoch_date = "2024-01-01"
//! cycle_epoch_year = 4
//! utc_offset_seconds = 32400
//! delta_t_seconds = 69.0
//! shanichi_search_days = 15
//! new_moon_lookback_days = 60
//!
//! [solver]
//! time_tolerance_days = 0.001
//! angle_tolerance_deg = 0.001
//! max_iterations = 64
//! verify_bracket = true
//! ```

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

use chrono::NaiveDate;
use koyomi_time::JST_OFFSET_SECONDS;
use serde::{Deserialize, Serialize};

use crate::cycle::{DEFAULT_EPOCH_YEAR, default_epoch_date};
use crate::solver::SolverConfig;

/// Failure to load or validate an [`EngineConfig`].
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ConfigError {
    /// Reading the file failed.
    Io(String),
    /// The document is not valid TOML for this schema.
    Parse(String),
    /// Values parsed but are out of range.
    Invalid(&'static str),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "I/O error: {msg}"),
            Self::Parse(msg) => write!(f, "parse error: {msg}"),
            Self::Invalid(msg) => write!(f, "invalid value: {msg}"),
        }
    }
}

impl Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Parse(e.to_string())
    }
}

/// Constants the calendar engine is built with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// A date with cycle ordinal 1 (甲子).
    pub cycle_epoch_date: NaiveDate,
    /// A year with cycle ordinal 1 (甲子).
    pub cycle_epoch_year: i32,
    /// Fixed zone offset in seconds east of UTC (default UTC+9).
    pub utc_offset_seconds: i32,
    /// TT − UT in seconds, held constant.
    pub delta_t_seconds: f64,
    /// Half-width in days of the 戊-day search around each equinox.
    pub shanichi_search_days: u32,
    /// How far before 処暑 to look for the new moon that starts the month.
    pub new_moon_lookback_days: u32,
    /// Bisection tolerances.
    pub solver: SolverConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            cycle_epoch_date: default_epoch_date(),
            cycle_epoch_year: DEFAULT_EPOCH_YEAR,
            utc_offset_seconds: JST_OFFSET_SECONDS,
            delta_t_seconds: 69.0,
            shanichi_search_days: 15,
            new_moon_lookback_days: 60,
            solver: SolverConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Parse from a TOML document and validate.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate().map_err(ConfigError::Invalid)?;
        Ok(config)
    }

    /// Read a TOML file and validate.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        log::debug!("loaded engine config from {}", path.display());
        Self::from_toml_str(&text)
    }

    /// Serialize to a TOML document.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), &'static str> {
        self.solver.validate()?;
        if self.utc_offset_seconds.abs() > 18 * 3600 {
            return Err("utc_offset_seconds must be within ±18 h");
        }
        if !self.delta_t_seconds.is_finite() {
            return Err("delta_t_seconds must be finite");
        }
        if self.shanichi_search_days == 0 || self.shanichi_search_days > 60 {
            return Err("shanichi_search_days must be 1..=60");
        }
        if self.new_moon_lookback_days < 30 {
            return Err("new_moon_lookback_days must cover a lunation (>= 30)");
        }
        Ok(())
    }
}
