//! Set: a single-player card matching puzzle.
//!
//! - 81 cards, one per combination of four three-valued features
//! - 12 are dealt face-up (configurable)
//! - Pick three cards where every feature is all-same or all-different
//! - The game ends once every card that belongs to some match on the
//!   tableau has been part of a claimed match
//!
//! Hints cycle through every match on the tableau.

mod game;

pub use game::{CardGroup, SetGame, SetGameBuilder};
