use crate::config::ConfigError;
use crate::domain::route_validation::RouteConfigError;
use crate::services::navigation::Location;
use thiserror::Error;

/// Navigation-time failures. Surfaced to the caller as-is; no fallback route
/// is substituted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    #[error("No route matches {location}")]
    NoMatch { location: Location },

    #[error("No history entry to go {direction}")]
    HistoryExhausted { direction: &'static str },
}

/// Top-level error for router initialization and use
#[derive(Error, Debug)]
pub enum RouterError {
    #[error("Route table misconfigured: {0}")]
    Routes(#[from] RouteConfigError),

    #[error("Router configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Navigation(#[from] NavigationError),
}

impl RouterError {
    /// Whether the error must abort application startup
    pub fn is_fatal(&self) -> bool {
        !matches!(self, RouterError::Navigation(_))
    }
}
