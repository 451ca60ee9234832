//! Deck generation.
//!
//! One card per combination of the four features over three values
//! (3⁴ = 81). Ids are allocated in generation order, before any shuffle.

use super::card::Card;
use super::feature::FeatureValue;
use crate::core::{CardId, GameRng};

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 81;

/// Generate the 81 cards in canonical (unshuffled) order.
#[must_use]
pub fn generate_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    let mut next_id = 0u32;

    for number in FeatureValue::ALL {
        for color in FeatureValue::ALL {
            for shape in FeatureValue::ALL {
                for fill in FeatureValue::ALL {
                    cards.push(Card::new(CardId(next_id), number, color, shape, fill));
                    next_id += 1;
                }
            }
        }
    }

    cards
}

/// Generate the deck and shuffle it.
#[must_use]
pub fn shuffled_deck(rng: &mut GameRng) -> Vec<Card> {
    let mut cards = generate_deck();
    rng.shuffle(&mut cards);
    cards
}
