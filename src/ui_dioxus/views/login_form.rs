use dioxus::prelude::*;
use crate::ui_dioxus::router::Route;

#[component]
pub fn LoginForm() -> Element {
    let mut username = use_signal(String::new);
    let navigator = use_navigator();

    rsx! {
        div {
            class: "login-form",
            h1 { "ARA" }
            input {
                r#type: "text",
                placeholder: "Username",
                value: "{username}",
                oninput: move |evt| username.set(evt.value()),
            }
            button {
                class: "btn-primary",
                disabled: username().trim().is_empty(),
                onclick: move |_| {
                    navigator.push(Route::Dashboard {});
                },
                "Log in"
            }
        }
    }
}
