// Dioxus UI module - application shell and the routed views
pub mod app;
pub mod router;
pub mod views;

pub use app::App;
pub use router::{view_registry, Route};
