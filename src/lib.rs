pub mod config;
pub mod domain;
pub mod services;

#[cfg(feature = "ui")]
pub mod ui_dioxus;

use std::sync::Arc;
use tracing::info;

use config::RouterConfig;
use domain::route_table;
use domain::route_validation::RouteValidator;
use domain::view_registry::ViewRegistry;
use services::{Navigator, RouterError};

/// Build and validate the application route table and return a navigator
/// over it.
///
/// Every view is checked against `views`; any misconfiguration is returned
/// before a navigator exists, so a caller never starts half-configured.
pub fn create_router<V>(
    config: RouterConfig,
    views: &ViewRegistry<V>,
) -> Result<Navigator, RouterError> {
    let table = route_table::build();
    RouteValidator::validate(&table)?;
    RouteValidator::validate_views(&table, views)?;

    info!(routes = table.len(), base_url = %config.base_url, "router initialized");
    Ok(Navigator::new(Arc::new(table), config))
}
