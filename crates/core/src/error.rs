//! Error types: user-input errors raised by the upload control, and search
//! failures raised by the HTTP exchange.

use std::path::PathBuf;

/// Message shown to the user for any failed search. The underlying
/// [`SearchError`] is logged, never displayed.
pub const GENERIC_SEARCH_ERROR: &str = "Something went wrong. Please try again.";

/// Message shown when the user submits with nothing selected.
pub const NO_FILE_SELECTED: &str = "Please select an image file first.";

/// Everything that can go wrong between sending the image and holding a list
/// of matches.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("similarity API returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("could not decode similarity API response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl SearchError {
    /// The text a front end shows for this failure.
    pub fn user_message(&self) -> &'static str {
        GENERIC_SEARCH_ERROR
    }
}

/// Problems with the user's selection, reported synchronously before any
/// request is made.
#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("{}", NO_FILE_SELECTED)]
    NoFileSelected,

    #[error("{name} is not a PNG or JPEG image")]
    UnsupportedType { name: String },

    #[error("could not read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl UploadError {
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}
