//! Data model shared by the upload control, orchestrator and presenters:
//! matches returned by the similarity API, the user's selected image, and
//! the search state machine.

use serde::{Deserialize, Serialize};
use std::path::Path;

// ---------------------------------------------------------------------------
// Match
// ---------------------------------------------------------------------------

/// One candidate product returned by the similarity API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: String,
    pub image_url: String,
    pub name: String,
    pub category: String,
    /// Cosine similarity in `[0, 1]`, higher is closer.
    pub similarity_score: f64,
}

// ---------------------------------------------------------------------------
// Selected file
// ---------------------------------------------------------------------------

/// Image formats the upload control accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Png,
    Jpeg,
}

impl ImageKind {
    /// Classify by file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "png" => Some(ImageKind::Png),
            "jpg" | "jpeg" => Some(ImageKind::Jpeg),
            _ => None,
        }
    }

    /// Classify by MIME type, as reported by a browser-style file picker.
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime.trim().to_ascii_lowercase().as_str() {
            "image/png" => Some(ImageKind::Png),
            "image/jpeg" | "image/jpg" => Some(ImageKind::Jpeg),
            _ => None,
        }
    }

    pub fn mime(self) -> &'static str {
        match self {
            ImageKind::Png => "image/png",
            ImageKind::Jpeg => "image/jpeg",
        }
    }
}

/// A user-chosen image, held by the upload control until it is handed off.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile {
    pub file_name: String,
    pub kind: ImageKind,
    pub bytes: Vec<u8>,
}

// ---------------------------------------------------------------------------
// Search state
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Success,
    Error,
}

/// UI state of the current search attempt.
///
/// Results only exist in `Success` and a message only in `Error`, so the
/// two can never be observed together.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SearchState {
    #[default]
    Idle,
    Loading,
    Success(Vec<Match>),
    Error(String),
}

impl SearchState {
    pub fn phase(&self) -> Phase {
        match self {
            SearchState::Idle => Phase::Idle,
            SearchState::Loading => Phase::Loading,
            SearchState::Success(_) => Phase::Success,
            SearchState::Error(_) => Phase::Error,
        }
    }

    /// Matches in server order; empty outside `Success`.
    pub fn results(&self) -> &[Match] {
        match self {
            SearchState::Success(matches) => matches,
            _ => &[],
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            SearchState::Error(msg) => Some(msg),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, SearchState::Loading)
    }
}
