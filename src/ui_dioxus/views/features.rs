use dioxus::prelude::*;
use super::PageHeader;

#[component]
pub fn FeaturesView() -> Element {
    rsx! {
        div {
            class: "features",
            PageHeader { title: "Features", subtitle: "Functionalities and their coverage" }
        }
    }
}
