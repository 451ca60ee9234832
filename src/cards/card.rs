//! Cards and their lifecycle state.
//!
//! A `Card` holds only authoritative data: identity, features, and where
//! it is in its lifecycle. Highlighting (chosen, wrong set, hinted) is not
//! stored on the card; see `CardView`.

use serde::{Deserialize, Serialize};

use super::feature::{Feature, FeatureValue};
use crate::core::CardId;

/// Card lifecycle: `Fresh → Playing → FoundSet`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardState {
    /// Undealt, face-down.
    #[default]
    Fresh,
    /// Dealt and face-up.
    Playing,
    /// Part of at least one claimed match. Stays on the tableau.
    FoundSet,
}

impl CardState {
    /// Dealt cards: `Playing` or `FoundSet`.
    #[must_use]
    pub fn is_dealt(self) -> bool {
        matches!(self, CardState::Playing | CardState::FoundSet)
    }
}

/// A single card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub number: FeatureValue,
    pub color: FeatureValue,
    pub shape: FeatureValue,
    pub fill: FeatureValue,
    pub state: CardState,
}

impl Card {
    /// Create a fresh card.
    #[must_use]
    pub fn new(
        id: CardId,
        number: FeatureValue,
        color: FeatureValue,
        shape: FeatureValue,
        fill: FeatureValue,
    ) -> Self {
        Self {
            id,
            number,
            color,
            shape,
            fill,
            state: CardState::Fresh,
        }
    }

    /// Value of one feature.
    #[must_use]
    pub fn feature(&self, feature: Feature) -> FeatureValue {
        match feature {
            Feature::Number => self.number,
            Feature::Color => self.color,
            Feature::Shape => self.shape,
            Feature::Fill => self.fill,
        }
    }

    /// All four feature values, in `Feature::ALL` order.
    #[must_use]
    pub fn features(&self) -> [FeatureValue; 4] {
        [self.number, self.color, self.shape, self.fill]
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}{}", self.number, self.color, self.shape, self.fill)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use FeatureValue::{A, B, C};

    #[test]
    fn test_new_card_is_fresh() {
        let card = Card::new(CardId(0), A, B, C, A);
        assert_eq!(card.state, CardState::Fresh);
        assert!(!card.state.is_dealt());
    }

    #[test]
    fn test_feature_access() {
        let card = Card::new(CardId(0), A, B, C, A);
        assert_eq!(card.feature(Feature::Number), A);
        assert_eq!(card.feature(Feature::Color), B);
        assert_eq!(card.feature(Feature::Shape), C);
        assert_eq!(card.feature(Feature::Fill), A);
        assert_eq!(card.features(), [A, B, C, A]);
        assert_eq!(card.to_string(), "ABCA");
    }

    #[test]
    fn test_dealt_states() {
        assert!(CardState::Playing.is_dealt());
        assert!(CardState::FoundSet.is_dealt());
    }
}
