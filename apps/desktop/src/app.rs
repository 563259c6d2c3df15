//! Root application component.

use dioxus::prelude::*;
use matcher_core::present::loading_visible;
use matcher_core::{SearchApi, SelectedFile};
use tracing::warn;

use crate::loader::Loader;
use crate::results::ResultsGrid;
use crate::state::*;
use crate::uploader::ImageUploader;

static VARIABLES_CSS: Asset = asset!("/assets/styles/variables.css");
static APP_CSS: Asset = asset!("/assets/styles/app.css");

#[component]
pub fn App() -> Element {
    let search = SEARCH.read();
    let state = search.state();

    rsx! {
        document::Stylesheet { href: VARIABLES_CSS }
        document::Stylesheet { href: APP_CSS }

        div {
            class: "app",
            h1 { "Visual Product Matcher \u{2728}" }

            ImageUploader { on_search: move |file| start_search(file) }

            if loading_visible(state) {
                Loader {}
            }
            if let Some(message) = state.error_message() {
                p { class: "error-message", "{message}" }
            }
            if !state.results().is_empty() {
                ResultsGrid { results: state.results().to_vec() }
            }

            StatusBar {}
        }
    }
}

/// Enter loading now, then resolve whenever the response lands.
fn start_search(file: SelectedFile) {
    let api = match CORE.read().as_ref() {
        Some(core) => core.api.clone(),
        None => {
            warn!("Search submitted before the app finished starting");
            return;
        }
    };

    let ticket = SEARCH.write().begin();
    spawn(async move {
        let outcome = api.find_similar(file).await;
        SEARCH.write().resolve(ticket, outcome);
    });
}

/// Status bar at the bottom of the app
#[component]
fn StatusBar() -> Element {
    let core = CORE.read();
    let search = SEARCH.read();

    let endpoint = core
        .as_ref()
        .map(|c| c.config.endpoint.clone())
        .unwrap_or_else(|| "not connected".to_string());
    let result_count = search.state().results().len();
    let in_flight = search.in_flight();

    rsx! {
        div {
            class: "statusbar",
            span { class: "statusbar-endpoint", "{endpoint}" }
            if result_count > 0 {
                span { class: "statusbar-sep", "|" }
                span { class: "statusbar-results", "{result_count} matches" }
            }
            if in_flight > 1 {
                span { class: "statusbar-sep", "|" }
                span { class: "statusbar-pending", "{in_flight} searches pending" }
            }
        }
    }
}
