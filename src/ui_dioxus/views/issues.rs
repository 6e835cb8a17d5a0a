use dioxus::prelude::*;
use super::PageHeader;

#[component]
pub fn IssuesView() -> Element {
    rsx! {
        div {
            class: "issues",
            PageHeader { title: "Issues", subtitle: "Problems raised by failed scenarios" }
        }
    }
}
