use dioxus::prelude::*;
use matcher_core::present::LOADING_CAPTION;

/// Spinner shown while a search is in flight.
#[component]
pub fn Loader() -> Element {
    rsx! {
        div {
            class: "loader-container",
            div { class: "loader" }
            p { "{LOADING_CAPTION}" }
        }
    }
}
