use dioxus::prelude::*;
use std::str::FromStr;
use std::sync::Arc;

use crate::domain::route::RouteTable;
use crate::domain::route_table;
use crate::ui_dioxus::router::Route;

/// Route table shared with every component through the root context.
pub type SharedRouteTable = Arc<RouteTable>;

#[component]
pub fn App() -> Element {
    // A table handed in by the launcher wins over a freshly built one.
    let injected = try_use_context::<SharedRouteTable>();
    use_context_provider(move || injected.unwrap_or_else(|| Arc::new(route_table::build())));

    rsx! {
        Router::<Route> {}
    }
}

/// Layout wrapping every routed view.
#[component]
pub fn Shell() -> Element {
    rsx! {
        div {
            class: "app-shell",
            NavBar {}
            main {
                class: "app-content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn NavBar() -> Element {
    let table = use_context::<SharedRouteTable>();
    let items: Vec<(Route, String)> = table
        .iter()
        .filter_map(|descriptor| {
            Route::from_str(&descriptor.path)
                .ok()
                .map(|route| (route, descriptor.view.to_string()))
        })
        .collect();

    rsx! {
        nav {
            class: "navbar",

            div {
                class: "nav-brand",
                "ARA"
            }

            div {
                class: "nav-menu",
                for (route, label) in items {
                    NavItem { key: "{label}", route: route.clone(), label: label.clone() }
                }
            }
        }
    }
}

#[component]
fn NavItem(route: Route, label: String) -> Element {
    rsx! {
        Link {
            class: "nav-item",
            active_class: "active",
            to: route,
            span { class: "nav-label", "{label}" }
        }
    }
}
