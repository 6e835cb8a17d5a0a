// Shells for the routed views. Their content (forms, tables, data fetching)
// lives with the views themselves, outside the router.
pub mod dashboard_home;
pub mod faq;
pub mod features;
pub mod issues;
pub mod login_form;
pub mod projects;
pub mod settings_view;

pub use dashboard_home::DashboardHome;
pub use faq::FaqView;
pub use features::FeaturesView;
pub use issues::IssuesView;
pub use login_form::LoginForm;
pub use projects::ProjectsView;
pub use settings_view::SettingsView;

use dioxus::prelude::*;

/// Common page frame: title plus subtitle.
#[component]
pub fn PageHeader(title: &'static str, subtitle: &'static str) -> Element {
    rsx! {
        div {
            class: "page-header",
            h1 { "{title}" }
            p { class: "page-subtitle", "{subtitle}" }
        }
    }
}
