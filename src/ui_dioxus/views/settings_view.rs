use dioxus::prelude::*;
use super::PageHeader;

#[component]
pub fn SettingsView() -> Element {
    let mut active_tab = use_signal(|| "general".to_string());

    rsx! {
        div { class: "settings-container",
            PageHeader { title: "Settings", subtitle: "Configure your ARA project" }

            div { class: "settings-tabs",
                TabButton {
                    label: "General",
                    active: active_tab() == "general",
                    onclick: move |_| active_tab.set("general".to_string())
                }
                TabButton {
                    label: "Sources",
                    active: active_tab() == "sources",
                    onclick: move |_| active_tab.set("sources".to_string())
                }
            }
        }
    }
}

#[component]
fn TabButton(label: &'static str, active: bool, onclick: EventHandler<MouseEvent>) -> Element {
    rsx! {
        button {
            class: if active { "tab-button active" } else { "tab-button" },
            onclick: move |evt| onclick.call(evt),
            "{label}"
        }
    }
}
