//! Intents and their recorded outcomes.
//!
//! The presentation layer drives the engine with two intents: choose a card
//! and ask for a hint. Starting a new game replaces the whole state and is
//! not an intent on an existing game.
//!
//! Every applied intent is appended to the game's history as an
//! `IntentRecord`, so a game can be replayed from its seed.

use serde::{Deserialize, Serialize};

use super::entity::CardId;
use crate::rules::Triple;

/// A user intent applied to a running game.
///
/// ```
/// use set_engine::core::{CardId, Intent};
///
/// let pick = Intent::Choose(CardId::new(4));
/// assert_ne!(pick, Intent::Hint);
/// assert_eq!(pick, Intent::Choose(CardId::new(4)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    /// Toggle selection of a card.
    Choose(CardId),
    /// Highlight the next potential match.
    Hint,
}

/// What an intent did to the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Card added to the selection (fewer than three chosen).
    Selected,
    /// Card removed from the selection.
    Deselected,
    /// Three chosen cards formed a new match.
    Matched(Triple),
    /// A new match that claimed the last discoverable match.
    Finished(Triple),
    /// Three chosen cards were rejected and are now the wrong set.
    Mismatched {
        triple: Triple,
        /// The triple is a valid match that had already been claimed.
        already_found: bool,
    },
    /// Hint requested; `None` when the tableau has no matches.
    Hinted(Option<Triple>),
    /// The game is finished; nothing changed.
    Ignored,
}

impl Outcome {
    /// True if this outcome added to the found-sets registry.
    #[must_use]
    pub fn is_match(&self) -> bool {
        matches!(self, Outcome::Matched(_) | Outcome::Finished(_))
    }
}

/// A recorded intent with its sequence number and outcome.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentRecord {
    /// Position in the game's history (starts at 0).
    pub sequence: u32,

    /// The intent applied.
    pub intent: Intent,

    /// What it did.
    pub outcome: Outcome,
}

impl IntentRecord {
    /// Create a new intent record.
    #[must_use]
    pub fn new(sequence: u32, intent: Intent, outcome: Outcome) -> Self {
        Self {
            sequence,
            intent,
            outcome,
        }
    }
}
