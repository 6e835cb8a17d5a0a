use super::route::{RouteTable, ViewId};
use super::view_registry::ViewRegistry;
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;
use tracing::{debug, warn};

/// Which descriptor attribute collided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteKey {
    Path,
    Name,
}

impl fmt::Display for RouteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteKey::Path => write!(f, "path"),
            RouteKey::Name => write!(f, "name"),
        }
    }
}

/// Configuration errors in a route table. All of them are fatal at startup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteConfigError {
    #[error("Duplicate route {key}: {value:?}")]
    DuplicateRoute { key: RouteKey, value: String },

    #[error("Route {name:?} is bound to view {view} which is not registered")]
    UnresolvedView { name: String, view: ViewId },

    #[error("Invalid route path {path:?}: {reason}")]
    InvalidPath { path: String, reason: String },

    #[error("Route at {path:?} has an empty name")]
    EmptyName { path: String },
}

pub struct RouteValidator;

impl RouteValidator {
    /// Check descriptor shape and the path/name uniqueness invariants.
    pub fn validate(table: &RouteTable) -> Result<(), RouteConfigError> {
        for route in table {
            Self::validate_path(&route.path)?;
            if route.name.trim().is_empty() {
                return Err(RouteConfigError::EmptyName {
                    path: route.path.clone(),
                });
            }
        }

        Self::validate_unique(table.iter().map(|r| r.path.to_ascii_lowercase()), RouteKey::Path)?;
        Self::validate_unique(table.iter().map(|r| r.name.clone()), RouteKey::Name)?;

        debug!(routes = table.len(), "route table validated");
        Ok(())
    }

    /// Check that every descriptor's view is present in `registry`.
    pub fn validate_views<V>(
        table: &RouteTable,
        registry: &ViewRegistry<V>,
    ) -> Result<(), RouteConfigError> {
        for route in table {
            if !registry.contains(&route.view) {
                warn!(route = %route.name, view = %route.view, "unresolved view");
                return Err(RouteConfigError::UnresolvedView {
                    name: route.name.clone(),
                    view: route.view.clone(),
                });
            }
        }
        Ok(())
    }

    fn validate_path(path: &str) -> Result<(), RouteConfigError> {
        let reason = if !path.starts_with('/') {
            Some("must start with '/'")
        } else if path.contains(['?', '#']) {
            Some("must not contain a query or fragment")
        } else if path.len() > 1 && path.ends_with('/') {
            Some("must not end with '/'")
        } else if path.contains("//") {
            Some("must not contain empty segments")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(RouteConfigError::InvalidPath {
                path: path.to_string(),
                reason: reason.to_string(),
            }),
            None => Ok(()),
        }
    }

    fn validate_unique(
        values: impl Iterator<Item = String>,
        key: RouteKey,
    ) -> Result<(), RouteConfigError> {
        let mut seen: HashMap<String, usize> = HashMap::new();
        for (index, value) in values.enumerate() {
            if let Some(first) = seen.insert(value.clone(), index) {
                warn!(%key, %value, first, second = index, "duplicate route");
                return Err(RouteConfigError::DuplicateRoute { key, value });
            }
        }
        Ok(())
    }
}

/// Validate uniqueness and descriptor shape of `table`.
pub fn validate(table: &RouteTable) -> Result<(), RouteConfigError> {
    RouteValidator::validate(table)
}
