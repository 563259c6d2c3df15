//! Presentation helpers for the loading indicator and results grid.
//! Front ends render these view models; nothing here has side effects.

use serde::Serialize;

use crate::model::{Match, SearchState};

pub const LOADING_CAPTION: &str = "Finding similar products...";
pub const RESULTS_HEADING: &str = "Top Matches";

/// The loader is shown exactly while a search is in flight.
pub fn loading_visible(state: &SearchState) -> bool {
    state.is_loading()
}

/// `round(score * 100)`, clamped to `0..=100`.
pub fn similarity_percent(score: f64) -> u8 {
    if !score.is_finite() {
        return 0;
    }
    (score * 100.0).round().clamp(0.0, 100.0) as u8
}

pub fn similarity_label(score: f64) -> String {
    format!("{}%", similarity_percent(score))
}

/// One product card in the results grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchCard {
    pub id: String,
    pub image_url: String,
    pub name: String,
    pub category: String,
    pub similarity: String,
}

impl From<&Match> for MatchCard {
    fn from(m: &Match) -> Self {
        Self {
            id: m.id.clone(),
            image_url: m.image_url.clone(),
            name: m.name.clone(),
            category: m.category.clone(),
            similarity: similarity_label(m.similarity_score),
        }
    }
}

/// Cards in the order the server ranked them.
pub fn render_cards(matches: &[Match]) -> Vec<MatchCard> {
    matches.iter().map(MatchCard::from).collect()
}
