use dioxus::prelude::*;

use crate::domain::route::ViewId;
use crate::domain::route_table::views;
use crate::domain::view_registry::ViewRegistry;
use crate::ui_dioxus::app::Shell;
use crate::ui_dioxus::views::*;

/// A view the router can mount.
pub type ViewComponent = fn() -> Element;

/// Dioxus mirror of the application route table. No catch-all variant:
/// unknown paths get the router's own error page.
#[derive(Clone, Routable, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        Login {},

        #[route("/dashboard")]
        Dashboard {},

        #[route("/issues")]
        Issues {},

        #[route("/features")]
        Features {},

        #[route("/settings")]
        Settings {},

        #[route("/projects")]
        Projects {},

        #[route("/faq")]
        Faq {},
}

impl Route {
    pub fn view(&self) -> ViewId {
        let id = match self {
            Route::Login {} => views::LOGIN,
            Route::Dashboard {} => views::DASHBOARD,
            Route::Issues {} => views::ISSUES,
            Route::Features {} => views::FEATURES,
            Route::Settings {} => views::SETTINGS,
            Route::Projects {} => views::PROJECTS,
            Route::Faq {} => views::FAQ,
        };
        ViewId::new(id)
    }
}

/// Registry of the components bound to each view id.
pub fn view_registry() -> ViewRegistry<ViewComponent> {
    ViewRegistry::new()
        .with(views::LOGIN, LoginForm as ViewComponent)
        .with(views::DASHBOARD, DashboardHome as ViewComponent)
        .with(views::ISSUES, IssuesView as ViewComponent)
        .with(views::FEATURES, FeaturesView as ViewComponent)
        .with(views::SETTINGS, SettingsView as ViewComponent)
        .with(views::PROJECTS, ProjectsView as ViewComponent)
        .with(views::FAQ, FaqView as ViewComponent)
}

#[component]
fn Login() -> Element {
    rsx! { LoginForm {} }
}

#[component]
fn Dashboard() -> Element {
    rsx! { DashboardHome {} }
}

#[component]
fn Issues() -> Element {
    rsx! { IssuesView {} }
}

#[component]
fn Features() -> Element {
    rsx! { FeaturesView {} }
}

#[component]
fn Settings() -> Element {
    rsx! { SettingsView {} }
}

#[component]
fn Projects() -> Element {
    rsx! { ProjectsView {} }
}

#[component]
fn Faq() -> Element {
    rsx! { FaqView {} }
}
