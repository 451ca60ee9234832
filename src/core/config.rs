//! Game configuration.
//!
//! `GameConfig` fixes everything about a deal that isn't random: how many
//! cards are dealt face-up, and optionally the seed used for the shuffle.
//! A `None` seed draws one from the OS at deal time; the drawn seed is
//! recorded on the game so the deal can be replayed.

use serde::{Deserialize, Serialize};

use super::error::EngineError;
use crate::cards::DECK_SIZE;

/// Default number of face-up cards.
pub const DEFAULT_TABLEAU_SIZE: usize = 12;

/// Smallest tableau that can hold a match.
pub const MIN_TABLEAU_SIZE: usize = 3;

/// Deal configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of cards dealt face-up at game start.
    pub tableau_size: usize,

    /// Shuffle seed. `None` uses OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tableau_size: DEFAULT_TABLEAU_SIZE,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Set the tableau size.
    #[must_use]
    pub fn with_tableau_size(mut self, size: usize) -> Self {
        self.tableau_size = size;
        self
    }

    /// Set a fixed shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the configuration can produce a deal.
    pub fn validate(&self) -> Result<(), EngineError> {
        if (MIN_TABLEAU_SIZE..=DECK_SIZE).contains(&self.tableau_size) {
            Ok(())
        } else {
            Err(EngineError::InvalidTableauSize(self.tableau_size))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = GameConfig::default();
        assert_eq!(config.tableau_size, 12);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::default().with_tableau_size(15).with_seed(9);
        assert_eq!(config.tableau_size, 15);
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn test_validate_bounds() {
        assert!(GameConfig::default().with_tableau_size(3).validate().is_ok());
        assert!(GameConfig::default().with_tableau_size(81).validate().is_ok());
        assert_eq!(
            GameConfig::default().with_tableau_size(2).validate(),
            Err(EngineError::InvalidTableauSize(2))
        );
        assert_eq!(
            GameConfig::default().with_tableau_size(82).validate(),
            Err(EngineError::InvalidTableauSize(82))
        );
    }

    #[test]
    fn test_serde_missing_seed() {
        let config: GameConfig = serde_json::from_str(r#"{"tableau_size": 12}"#).unwrap();
        assert_eq!(config, GameConfig::default());

        let json = serde_json::to_string(&GameConfig::default().with_seed(5)).unwrap();
        let back: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.seed, Some(5));
    }
}
