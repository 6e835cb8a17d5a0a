use dioxus::prelude::*;
use super::PageHeader;

#[component]
pub fn DashboardHome() -> Element {
    rsx! {
        div {
            class: "dashboard_home",
            PageHeader { title: "Dashboard", subtitle: "Execution overview of your projects" }
        }
    }
}
