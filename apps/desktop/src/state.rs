//! Global application state using Dioxus signals.

use dioxus::prelude::*;
use matcher_core::{
    load_matcher_config, ApiConfig, HttpSearchApi, SearchError, SearchOrchestrator, UploadControl,
};

use crate::INITIAL_STATE;

/// Backend wiring — created once at startup.
pub struct AppState {
    pub config: ApiConfig,
    pub api: HttpSearchApi,
}

impl AppState {
    /// Read `.matcher.toml` from the current directory, if any.
    pub fn from_cwd() -> Result<Self, SearchError> {
        let config = match std::env::current_dir() {
            Ok(cwd) => load_matcher_config(&cwd),
            Err(_) => ApiConfig::default(),
        };
        let api = HttpSearchApi::new(&config)?;
        Ok(AppState { config, api })
    }
}

// ---------------------------------------------------------------------------
// Global signals
// ---------------------------------------------------------------------------

/// Backend wiring — moved out of `INITIAL_STATE` on first read
pub static CORE: GlobalSignal<Option<AppState>> =
    Signal::global(|| INITIAL_STATE.lock().ok().and_then(|mut slot| slot.take()));

/// Search lifecycle and its current state
pub static SEARCH: GlobalSignal<SearchOrchestrator> = Signal::global(SearchOrchestrator::new);

/// Image chosen in the uploader, not yet submitted
pub static UPLOAD: GlobalSignal<UploadControl> = Signal::global(UploadControl::new);
