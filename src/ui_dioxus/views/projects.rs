use dioxus::prelude::*;
use super::PageHeader;

#[component]
pub fn ProjectsView() -> Element {
    rsx! {
        div {
            class: "projects",
            PageHeader { title: "Projects", subtitle: "Projects tracked by ARA" }
        }
    }
}
