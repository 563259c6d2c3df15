//! Visual Product Matcher desktop — Dioxus front end over `matcher-core`.

use std::sync::Mutex;

use dioxus::prelude::*;

mod app;
mod loader;
mod results;
mod state;
mod uploader;

use app::App;
use state::AppState;

/// Pre-runtime storage — built before Dioxus launches, consumed on first render.
pub static INITIAL_STATE: Mutex<Option<AppState>> = Mutex::new(None);

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("matcher=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let initial_state = match AppState::from_cwd() {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(error = %e, "Could not create HTTP client");
            std::process::exit(1);
        }
    };
    *INITIAL_STATE.lock().unwrap() = Some(initial_state);

    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

        LaunchBuilder::new()
            .with_cfg(
                Config::default()
                    .with_menu(None)
                    .with_disable_context_menu(true)
                    .with_window(
                        WindowBuilder::new()
                            .with_title("Visual Product Matcher")
                            .with_inner_size(LogicalSize::new(1100.0, 800.0))
                            .with_min_inner_size(LogicalSize::new(480.0, 400.0))
                            .with_resizable(true),
                    ),
            )
            .launch(App);
    }

    #[cfg(not(feature = "desktop"))]
    {
        dioxus::launch(App);
    }
}
