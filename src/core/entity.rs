//! Card identification.
//!
//! Every card in a deal carries a `CardId` allocated when the deck is
//! generated, before shuffling. Ids are never derived from feature values:
//! lookup, equality, and the found-sets registry all go through the id.
//!
//! ```
//! use set_engine::core::CardId;
//!
//! let id = CardId::new(17);
//! assert_eq!(id.raw(), 17);
//! assert_eq!(id.to_string(), "Card(17)");
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a card within one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}
