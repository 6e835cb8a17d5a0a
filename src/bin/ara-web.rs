use std::any::Any;

use anyhow::{Context, Result};
use ara_web::config::RouterConfig;
use ara_web::ui_dioxus::{view_registry, App};
use dioxus_desktop::Config;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = RouterConfig::from_env().context("Failed to load router configuration")?;

    // Misconfigured routes stop the app here, before any window opens
    let navigator =
        ara_web::create_router(config, &view_registry()).context("Failed to initialize router")?;
    let table = navigator.table().clone();
    let contexts: Vec<Box<dyn Fn() -> Box<dyn Any> + Send + Sync>> =
        vec![Box::new(move || Box::new(table.clone()) as Box<dyn Any>)];

    dioxus_desktop::launch::launch(App, contexts, Config::default());

    Ok(())
}
