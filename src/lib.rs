//! # set-engine
//!
//! Game-state engine for a single-player Set-style card matching puzzle.
//!
//! ## Rules
//!
//! 81 cards, one for every combination of four features (number, color,
//! shape, fill) over three values. Twelve are dealt face-up. Three cards
//! form a match when every feature is either the same on all three or
//! different on all three.
//!
//! ## Design Principles
//!
//! 1. **One state, one writer**: `SetGame` is mutated only through intents
//!    (`choose`, `hint`) and replaced wholesale on a new game.
//!
//! 2. **Derived highlights**: selection, wrong set, and hint are id
//!    collections on the game. Per-card flags are computed in `CardView`.
//!
//! 3. **Reproducible deals**: every game records its shuffle seed and the
//!    intents applied, so it can be replayed exactly.
//!
//! ## Modules
//!
//! - `core`: Card ids, intents, RNG, configuration, errors
//! - `cards`: Features, cards, deck generation, display views
//! - `rules`: Match predicate and exhaustive match search
//! - `games`: The Set game state machine
//! - `session`: Presentation adapter with an elapsed-time clock

pub mod core;
pub mod cards;
pub mod rules;
pub mod games;
pub mod session;

// Re-export commonly used types
pub use crate::core::{CardId, EngineError, GameConfig, GameRng, Intent, IntentRecord, Outcome};

pub use crate::cards::{Card, CardState, CardView, Feature, FeatureValue, DECK_SIZE};

pub use crate::rules::{find_all_matches, is_match, Triple};

pub use crate::games::set::{SetGame, SetGameBuilder};

pub use crate::session::{ElapsedClock, GameSession, GameSummary};
