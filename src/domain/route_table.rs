use super::route::{RouteDescriptor, RouteTable};
use tracing::debug;

/// View identifiers bound by the application route table.
pub mod views {
    pub const LOGIN: &str = "Login";
    pub const DASHBOARD: &str = "Dashboard";
    pub const ISSUES: &str = "Issues";
    pub const FEATURES: &str = "Features";
    pub const SETTINGS: &str = "Settings";
    pub const PROJECTS: &str = "Projects";
    pub const FAQ: &str = "FAQ";

    pub const ALL: [&str; 7] = [LOGIN, DASHBOARD, ISSUES, FEATURES, SETTINGS, PROJECTS, FAQ];
}

/// Build the application route table.
///
/// Always yields the same ordered table. `/` is the login form; there is no
/// catch-all route, unknown paths are left to the navigation engine.
pub fn build() -> RouteTable {
    let table = RouteTable::from_routes(vec![
        RouteDescriptor::new("/", "login", views::LOGIN),
        RouteDescriptor::new("/dashboard", "dashboard", views::DASHBOARD),
        RouteDescriptor::new("/issues", "issues", views::ISSUES),
        RouteDescriptor::new("/features", "features", views::FEATURES),
        RouteDescriptor::new("/settings", "settings", views::SETTINGS),
        RouteDescriptor::new("/projects", "projects", views::PROJECTS),
        RouteDescriptor::new("/faq", "faq", views::FAQ),
    ]);

    debug!(routes = table.len(), "built route table");
    table
}
