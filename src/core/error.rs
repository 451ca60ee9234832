//! Engine errors.
//!
//! Intents either apply fully or return one of these without touching
//! game state.

use super::entity::CardId;

/// Errors reported by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineError {
    /// The id does not belong to any card in this game.
    UnknownCard(CardId),
    /// The card exists but has not been dealt.
    NotInPlay(CardId),
    /// Tableau size outside `3..=81`.
    InvalidTableauSize(usize),
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::UnknownCard(id) => write!(f, "{id} is not part of this game"),
            EngineError::NotInPlay(id) => write!(f, "{id} has not been dealt"),
            EngineError::InvalidTableauSize(size) => {
                write!(f, "tableau size {size} must be between 3 and 81")
            }
        }
    }
}

impl std::error::Error for EngineError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            EngineError::UnknownCard(CardId(99)).to_string(),
            "Card(99) is not part of this game"
        );
        assert_eq!(
            EngineError::InvalidTableauSize(1).to_string(),
            "tableau size 1 must be between 3 and 81"
        );
    }
}
