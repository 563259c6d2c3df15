use dioxus::prelude::*;
use matcher_core::present::MatchCard;

#[component]
pub fn ProductCard(card: MatchCard) -> Element {
    rsx! {
        div {
            class: "product-card",
            img { src: "{card.image_url}", alt: "{card.name}" }
            div {
                class: "product-info",
                h4 { class: "product-name", "{card.name}" }
                p { class: "product-category", "{card.category}" }
                p { class: "similarity-score", "Similarity: {card.similarity}" }
            }
        }
    }
}
