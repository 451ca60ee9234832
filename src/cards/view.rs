//! Display view of a card.
//!
//! The game keeps selection, wrong-set, and hint membership as id
//! collections. `CardView` joins a card with those memberships so a
//! renderer gets one flat record per card.

use serde::{Deserialize, Serialize};

use super::card::{Card, CardState};
use super::feature::FeatureValue;
use crate::core::CardId;

/// A card plus its derived highlight flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    pub id: CardId,
    pub number: FeatureValue,
    pub color: FeatureValue,
    pub shape: FeatureValue,
    pub fill: FeatureValue,
    pub state: CardState,
    pub is_chosen: bool,
    pub is_wrong_set: bool,
    pub is_hinted: bool,
}

impl CardView {
    /// Build a view from a card and its flags.
    #[must_use]
    pub fn new(card: &Card, is_chosen: bool, is_wrong_set: bool, is_hinted: bool) -> Self {
        Self {
            id: card.id,
            number: card.number,
            color: card.color,
            shape: card.shape,
            fill: card.fill,
            state: card.state,
            is_chosen,
            is_wrong_set,
            is_hinted,
        }
    }

    /// Whether the view layer should draw this card face-up.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.state.is_dealt()
    }
}
