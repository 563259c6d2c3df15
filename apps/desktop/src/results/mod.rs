//! Results grid — one card per match, in the order the API ranked them.

mod product_card;

use dioxus::prelude::*;
use matcher_core::present::{render_cards, MatchCard, RESULTS_HEADING};
use matcher_core::Match;
use product_card::ProductCard;

/// The API may repeat an id, so position is part of the key.
fn card_key(index: usize, card: &MatchCard) -> String {
    format!("{index}-{}", card.id)
}

#[component]
pub fn ResultsGrid(results: Vec<Match>) -> Element {
    let cards: Vec<(String, MatchCard)> = render_cards(&results)
        .into_iter()
        .enumerate()
        .map(|(i, card)| (card_key(i, &card), card))
        .collect();

    rsx! {
        div {
            h2 { "{RESULTS_HEADING}" }
            div {
                class: "results-grid",
                for (key, card) in cards {
                    ProductCard { key: "{key}", card: card.clone() }
                }
            }
        }
    }
}
