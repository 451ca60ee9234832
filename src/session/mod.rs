//! Presentation adapter.
//!
//! A view layer holds one `GameSession`: it reads cards and counters,
//! forwards choose/hint/new-game intents, and feeds the elapsed-time clock
//! from its own one-second timer.

pub mod clock;
pub mod game_session;

pub use clock::ElapsedClock;
pub use game_session::{GameSession, GameSummary};
