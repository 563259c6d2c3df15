//! Visual Product Matcher core: pick an image, send it to the similarity API,
//! and present the ranked products that come back.
//!
//! The front ends (desktop app and CLI) are thin shells over these types.
//!
//! # Modules
//!
//! - [`model`] — Matches, the selected image, and the search state machine
//! - [`upload`] — Upload control: selection and hand-off on submit
//! - [`orchestrator`] — Request lifecycle and state transitions
//! - [`api`] — `SearchApi` trait and its `reqwest` implementation
//! - [`present`] — Loading indicator and result card view models
//! - [`config`] — Endpoint defaults and `.matcher.toml` loading
//! - [`error`] — Upload and search error types

pub mod api;
pub mod config;
pub mod error;
pub mod model;
pub mod orchestrator;
pub mod present;
pub mod upload;

pub use api::{HttpSearchApi, SearchApi};
pub use config::{load_matcher_config, ApiConfig};
pub use error::{SearchError, UploadError};
pub use model::{ImageKind, Match, Phase, SearchState, SelectedFile};
pub use orchestrator::{SearchOrchestrator, SearchTicket};
pub use upload::UploadControl;
