//! Set game state and intents.

use im::{HashSet as ImHashSet, Vector};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;
use smallvec::SmallVec;
use tracing::{debug, info};

use crate::cards::{shuffled_deck, Card, CardState, CardView, DECK_SIZE};
use crate::core::{CardId, EngineError, GameConfig, GameRng, Intent, IntentRecord, Outcome};
use crate::rules::{find_all_matches, is_match, Triple};

/// Ids of up to three cards, in the order they were added.
pub type CardGroup = SmallVec<[CardId; 3]>;

/// One game: the shuffled deck, the dealt tableau, and the
/// selection/hint state machine.
///
/// Cloning is cheap (the deck, registry, and history are persistent
/// structures), so views can hold snapshots.
#[derive(Clone, Debug, Serialize)]
pub struct SetGame {
    /// Config with the seed actually used filled in.
    config: GameConfig,

    /// All 81 cards; the first `playing_card_count` are dealt.
    cards: Vector<Card>,

    /// Card id to position in `cards`.
    index: FxHashMap<CardId, usize>,

    playing_card_count: usize,

    /// Every match among the dealt cards, computed at deal time.
    potential_matches: Vec<Triple>,

    /// Claimed matches.
    found_sets: ImHashSet<Triple>,

    selection: CardGroup,
    wrong_set: CardGroup,
    hinted: CardGroup,
    hint_cursor: Option<usize>,

    finished: bool,

    history: Vector<IntentRecord>,
}

/// Builder for creating a SetGame.
#[derive(Clone, Debug, Default)]
pub struct SetGameBuilder {
    config: GameConfig,
}

impl SetGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tableau_size(mut self, size: usize) -> Self {
        self.config.tableau_size = size;
        assert!(self.config.validate().is_ok(), "Tableau size must be 3-81");
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Deal the game.
    pub fn build(self) -> SetGame {
        SetGame::deal(self.config)
    }
}

impl SetGame {
    /// Start a new game from a configuration.
    pub fn new_game(config: &GameConfig) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self::deal(config.clone()))
    }

    /// Start a game and apply a sequence of intents to it.
    ///
    /// Deterministic when `config.seed` is set; `SetGame::config` always
    /// carries the seed, so `replay(game.config(), intents)` rebuilds a game.
    pub fn replay(
        config: &GameConfig,
        intents: impl IntoIterator<Item = Intent>,
    ) -> Result<Self, EngineError> {
        let mut game = Self::new_game(config)?;
        for intent in intents {
            game.apply(intent)?;
        }
        Ok(game)
    }

    /// Deal from a config that has already passed `validate`.
    pub(crate) fn deal(mut config: GameConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        config.seed = Some(rng.seed());

        let mut cards = shuffled_deck(&mut rng);
        let playing_card_count = config.tableau_size;
        for card in cards.iter_mut().take(playing_card_count) {
            card.state = CardState::Playing;
        }

        let index = cards.iter().enumerate().map(|(pos, card)| (card.id, pos)).collect();
        let potential_matches = find_all_matches(&cards[..playing_card_count]);

        info!(
            seed = rng.seed(),
            tableau_size = playing_card_count,
            potential_matches = potential_matches.len(),
            "dealt new game"
        );

        Self {
            config,
            cards: cards.into_iter().collect(),
            index,
            playing_card_count,
            potential_matches,
            found_sets: ImHashSet::new(),
            selection: CardGroup::new(),
            wrong_set: CardGroup::new(),
            hinted: CardGroup::new(),
            hint_cursor: None,
            finished: false,
            history: Vector::new(),
        }
    }

    // === Intents ===

    /// Apply an intent.
    pub fn apply(&mut self, intent: Intent) -> Result<Outcome, EngineError> {
        match intent {
            Intent::Choose(id) => self.choose(id),
            Intent::Hint => Ok(self.hint_outcome()),
        }
    }

    /// Toggle selection of a dealt card.
    ///
    /// Any wrong-set highlight from the previous attempt is cleared first.
    /// On the third selected card the selection is resolved: a new match is
    /// claimed, anything else (including an already-claimed match) becomes
    /// the wrong set. Fails without touching state if the card is unknown
    /// or undealt.
    pub fn choose(&mut self, id: CardId) -> Result<Outcome, EngineError> {
        let pos = self.position(id)?;
        if !self.cards[pos].state.is_dealt() {
            return Err(EngineError::NotInPlay(id));
        }

        let outcome = if self.finished {
            Outcome::Ignored
        } else {
            self.wrong_set.clear();

            if let Some(i) = self.selection.iter().position(|&c| c == id) {
                self.selection.remove(i);
                Outcome::Deselected
            } else {
                self.selection.push(id);
                if self.selection.len() == 3 {
                    self.resolve_selection()
                } else {
                    Outcome::Selected
                }
            }
        };

        debug!(card = %id, ?outcome, "choose");
        self.record(Intent::Choose(id), outcome);
        Ok(outcome)
    }

    /// Highlight the next potential match, cycling through all of them.
    ///
    /// Abandons any in-progress selection. Returns `None` (and clears the
    /// cursor) when the tableau has no matches, or when the game is over.
    pub fn hint(&mut self) -> Option<Triple> {
        match self.hint_outcome() {
            Outcome::Hinted(triple) => triple,
            _ => None,
        }
    }

    fn hint_outcome(&mut self) -> Outcome {
        if self.finished {
            self.record(Intent::Hint, Outcome::Ignored);
            return Outcome::Ignored;
        }

        self.wrong_set.clear();
        self.selection.clear();
        self.hinted.clear();

        let triple = if self.potential_matches.is_empty() {
            self.hint_cursor = None;
            None
        } else {
            let next = match self.hint_cursor {
                Some(i) if i + 1 < self.potential_matches.len() => i + 1,
                _ => 0,
            };
            self.hint_cursor = Some(next);
            let triple = self.potential_matches[next];
            self.hinted.extend(triple.ids());
            Some(triple)
        };

        debug!(cursor = ?self.hint_cursor, ?triple, "hint");
        let outcome = Outcome::Hinted(triple);
        self.record(Intent::Hint, outcome);
        outcome
    }

    fn resolve_selection(&mut self) -> Outcome {
        self.hinted.clear();

        let triple = Triple::new(self.selection[0], self.selection[1], self.selection[2]);
        let already_found = self.found_sets.contains(&triple);
        let [a, b, c] = triple.ids().map(|id| self.lookup(id));

        if already_found || !is_match(a, b, c) {
            self.wrong_set = std::mem::take(&mut self.selection);
            return Outcome::Mismatched {
                triple,
                already_found,
            };
        }

        self.found_sets.insert(triple);
        for id in triple.ids() {
            let pos = self.index[&id];
            self.cards[pos].state = CardState::FoundSet;
        }
        self.selection.clear();

        if self.all_matches_claimed() {
            self.finished = true;
            info!(
                seed = self.seed(),
                found_sets = self.found_sets.len(),
                "all matches claimed"
            );
            Outcome::Finished(triple)
        } else {
            Outcome::Matched(triple)
        }
    }

    fn record(&mut self, intent: Intent, outcome: Outcome) {
        let sequence = self.history.len() as u32;
        self.history.push_back(IntentRecord::new(sequence, intent, outcome));
    }

    fn position(&self, id: CardId) -> Result<usize, EngineError> {
        self.index.get(&id).copied().ok_or(EngineError::UnknownCard(id))
    }

    /// Card for an id already known to be in this game.
    fn lookup(&self, id: CardId) -> &Card {
        &self.cards[self.index[&id]]
    }

    // === Completion ===

    /// True iff every card that appears in some potential match also
    /// appears in some claimed match.
    #[must_use]
    pub fn all_matches_claimed(&self) -> bool {
        let found: FxHashSet<CardId> = self.found_sets.iter().flat_map(Triple::ids).collect();
        let potential: FxHashSet<CardId> =
            self.potential_matches.iter().flat_map(Triple::ids).collect();
        found == potential
    }

    /// Whether the game has reached its terminal state.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    // === Queries ===

    /// The configuration, with the seed used for this deal.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Shuffle seed of this deal.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.config.seed.unwrap_or_default()
    }

    /// All 81 cards in tableau order.
    #[must_use]
    pub fn cards(&self) -> &Vector<Card> {
        &self.cards
    }

    /// The dealt cards.
    pub fn playing_cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter().take(self.playing_card_count)
    }

    /// Look up a card.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.index.get(&id).map(|&pos| &self.cards[pos])
    }

    /// A card with its highlight flags.
    #[must_use]
    pub fn view(&self, id: CardId) -> Option<CardView> {
        self.card(id).map(|card| self.view_of(card))
    }

    /// Every card with its highlight flags, in tableau order.
    #[must_use]
    pub fn card_views(&self) -> Vec<CardView> {
        self.cards.iter().map(|card| self.view_of(card)).collect()
    }

    fn view_of(&self, card: &Card) -> CardView {
        CardView::new(
            card,
            self.selection.contains(&card.id),
            self.wrong_set.contains(&card.id),
            self.hinted.contains(&card.id),
        )
    }

    /// Number of dealt cards.
    #[must_use]
    pub fn playing_card_count(&self) -> usize {
        self.playing_card_count
    }

    /// Cards not yet dealt. Claimed cards stay on the tableau.
    #[must_use]
    pub fn remaining_card_count(&self) -> usize {
        DECK_SIZE - self.playing_card_count
    }

    /// Number of potential matches on the tableau.
    #[must_use]
    pub fn available_hints(&self) -> usize {
        self.potential_matches.len()
    }

    /// True when there is nothing to hint.
    #[must_use]
    pub fn hints_disabled(&self) -> bool {
        self.available_hints() == 0
    }

    /// All potential matches, in hint order.
    #[must_use]
    pub fn potential_matches(&self) -> &[Triple] {
        &self.potential_matches
    }

    /// Claimed matches (unordered).
    pub fn found_sets(&self) -> impl Iterator<Item = &Triple> {
        self.found_sets.iter()
    }

    /// Number of claimed matches.
    #[must_use]
    pub fn found_set_count(&self) -> usize {
        self.found_sets.len()
    }

    /// Chosen cards, in selection order.
    #[must_use]
    pub fn selection(&self) -> &[CardId] {
        &self.selection
    }

    /// Cards of the last rejected selection.
    #[must_use]
    pub fn wrong_set(&self) -> &[CardId] {
        &self.wrong_set
    }

    /// Cards of the highlighted hint.
    #[must_use]
    pub fn hinted(&self) -> &[CardId] {
        &self.hinted
    }

    /// Index into `potential_matches` of the last hint.
    #[must_use]
    pub fn hint_cursor(&self) -> Option<usize> {
        self.hint_cursor
    }

    /// Applied intents, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<IntentRecord> {
        &self.history
    }
}
