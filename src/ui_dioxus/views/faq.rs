use dioxus::prelude::*;
use super::PageHeader;

#[component]
pub fn FaqView() -> Element {
    rsx! {
        div {
            class: "faq",
            PageHeader { title: "FAQ", subtitle: "Frequently asked questions" }
        }
    }
}
