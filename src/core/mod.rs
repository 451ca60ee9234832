//! Core engine types: card ids, intents, RNG, configuration, errors.
//!
//! These are shared by the card model, the rules, and the game itself.

pub mod entity;
pub mod rng;
pub mod config;
pub mod action;
pub mod error;

pub use entity::CardId;
pub use rng::GameRng;
pub use config::{GameConfig, DEFAULT_TABLEAU_SIZE, MIN_TABLEAU_SIZE};
pub use action::{Intent, IntentRecord, Outcome};
pub use error::EngineError;
