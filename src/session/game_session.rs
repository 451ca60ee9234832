//! Presentation-facing wrapper around one running game.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::clock::ElapsedClock;
use crate::cards::CardView;
use crate::core::{CardId, EngineError, GameConfig, Outcome};
use crate::games::set::SetGame;
use crate::rules::Triple;

/// Counters a view layer shows next to the tableau.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub playing_card_count: usize,
    pub remaining_card_count: usize,
    pub available_hints: usize,
    pub hints_disabled: bool,
    pub found_set_count: usize,
    pub finished: bool,
    pub elapsed_seconds: u64,
}

/// Owns the current game and its elapsed-time clock.
///
/// Single writer: a host dispatching from several threads puts the whole
/// session behind one mutex.
#[derive(Clone, Debug)]
pub struct GameSession {
    config: GameConfig,
    game: SetGame,
    clock: ElapsedClock,
}

impl GameSession {
    /// Deal the first game.
    pub fn new(config: GameConfig) -> Result<Self, EngineError> {
        let game = SetGame::new_game(&config)?;
        Ok(Self {
            config,
            game,
            clock: ElapsedClock::new(),
        })
    }

    /// Discard the current game, deal a fresh one, and restart the clock.
    ///
    /// A fixed seed in the session config is used for the first deal only;
    /// later deals draw new seeds.
    pub fn new_game(&mut self) {
        self.config.seed = None;
        self.game = SetGame::deal(self.config.clone());
        self.clock.restart();
        info!(seed = self.game.seed(), "new game");
    }

    /// Forward a card choice. Stops the clock when the game finishes.
    pub fn choose(&mut self, id: CardId) -> Result<Outcome, EngineError> {
        let outcome = self.game.choose(id).map_err(|err| {
            warn!(%err, "rejected card choice");
            err
        })?;
        if let Outcome::Finished(_) = outcome {
            self.clock.stop();
            info!(elapsed_seconds = self.clock.seconds(), "game finished");
        }
        Ok(outcome)
    }

    /// Forward a hint request.
    pub fn hint(&mut self) -> Option<Triple> {
        self.game.hint()
    }

    /// One second of wall time passed.
    pub fn tick(&mut self) {
        if self.game.is_finished() {
            self.clock.stop();
        }
        self.clock.tick();
    }

    /// The current game.
    #[must_use]
    pub fn game(&self) -> &SetGame {
        &self.game
    }

    /// Cards with highlight flags, in tableau order.
    #[must_use]
    pub fn cards(&self) -> Vec<CardView> {
        self.game.card_views()
    }

    #[must_use]
    pub fn elapsed_seconds(&self) -> u64 {
        self.clock.seconds()
    }

    #[must_use]
    pub fn clock(&self) -> &ElapsedClock {
        &self.clock
    }

    /// Current counters.
    #[must_use]
    pub fn summary(&self) -> GameSummary {
        GameSummary {
            playing_card_count: self.game.playing_card_count(),
            remaining_card_count: self.game.remaining_card_count(),
            available_hints: self.game.available_hints(),
            hints_disabled: self.game.hints_disabled(),
            found_set_count: self.game.found_set_count(),
            finished: self.game.is_finished(),
            elapsed_seconds: self.clock.seconds(),
        }
    }
}
