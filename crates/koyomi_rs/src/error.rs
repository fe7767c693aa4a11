//! Error type for the convenience wrapper.

use std::error::Error;
use std::fmt::{Display, Formatter};

use koyomi_search::{ConfigError, EphemerisError, SearchError};

/// Errors from the convenience wrapper.
#[derive(Debug)]
#[non_exhaustive]
pub enum KoyomiError {
    /// The global engine has not been initialized. Call [`crate::init`] first.
    NotInitialized,
    /// [`crate::init`] was called more than once.
    AlreadyInitialized,
    /// Configuration could not be loaded.
    Config(ConfigError),
    /// The ephemeris could not be constructed.
    Ephemeris(EphemerisError),
    /// Error from the calendar engine.
    Search(SearchError),
}

impl Display for KoyomiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotInitialized => write!(f, "engine not initialized; call koyomi_rs::init() first"),
            Self::AlreadyInitialized => write!(f, "engine already initialized"),
            Self::Config(e) => write!(f, "config error: {e}"),
            Self::Ephemeris(e) => write!(f, "ephemeris error: {e}"),
            Self::Search(e) => write!(f, "search error: {e}"),
        }
    }
}

impl Error for KoyomiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Ephemeris(e) => Some(e),
            Self::Search(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for KoyomiError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<EphemerisError> for KoyomiError {
    fn from(e: EphemerisError) -> Self {
        Self::Ephemeris(e)
    }
}

impl From<SearchError> for KoyomiError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}
