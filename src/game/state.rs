//! The game state machine.
//!
//! `GameState` wires the deck, the table, the matching rule and the
//! scoreboard together and exposes the operations a presentation layer
//! drives: select a card, deal three more, ask for a hint, start over.
//!
//! ## Selection cycle
//!
//! 1. A click on a position that is out of range, removed, or part of the
//!    pending triple is ignored.
//! 2. A pending confirmed match is resolved first: its cards are replaced
//!    in place when the table is at capacity and the deck can supply three
//!    cards, otherwise removed. A pending mismatch is simply cleared.
//! 3. The clicked card is toggled. A third selection moves the triple into
//!    the pending slot and scores it immediately.
//!
//! All operations are synchronous and total. Stale input never errors.

use im::Vector;

use crate::cards::{Card, Deck};
use crate::core::{Clock, GameConfig, GameRng, MonotonicClock, DEAL_SIZE};
use crate::rules::{find_all_matches, has_match, is_triple_match, IndexTriple, MatchOutcome, Scoreboard, MATCH_SIZE};
use crate::zones::{Evaluation, Table, Zone};

use super::snapshot::GameSnapshot;

/// Builder for creating a `GameState`.
///
/// ```
/// use set_engine::core::{GameConfig, ManualClock};
/// use set_engine::game::GameBuilder;
///
/// let game = GameBuilder::new()
///     .config(GameConfig::default())
///     .seed(42)
///     .clock(ManualClock::new())
///     .build();
///
/// assert_eq!(game.visible_cards().len(), 12);
/// ```
pub struct GameBuilder {
    config: GameConfig,
    seed: Option<u64>,
    clock: Option<Box<dyn Clock>>,
    deck: Option<Deck>,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            config: GameConfig::default(),
            seed: None,
            clock: None,
            deck: None,
        }
    }
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Seed the game RNG. Without a seed, entropy is used.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Use a custom time source. Defaults to `MonotonicClock`.
    pub fn clock<C: Clock + 'static>(mut self, clock: C) -> Self {
        self.clock = Some(Box::new(clock));
        self
    }

    /// Deal the first game from this deck instead of a shuffled one.
    ///
    /// Later calls to `new_game` shuffle a fresh deck as usual.
    pub fn deck(mut self, deck: Deck) -> Self {
        self.deck = Some(deck);
        self
    }

    /// Build the game and deal the opening table.
    pub fn build(self) -> GameState {
        let mut rng = self.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let clock = self
            .clock
            .unwrap_or_else(|| Box::new(MonotonicClock::new()));
        let deck = self.deck.unwrap_or_else(|| Deck::new_shuffled(&mut rng.fork()));
        let scoreboard = Scoreboard::new(clock.now());

        let mut state = GameState {
            config: self.config,
            deck: Deck::from_cards(std::iter::empty()),
            table: Table::new(),
            scoreboard,
            rng,
            clock,
        };
        state.start(deck);
        state
    }
}

/// Full game state for one running game.
pub struct GameState {
    config: GameConfig,
    deck: Deck,
    table: Table,
    scoreboard: Scoreboard,
    rng: GameRng,
    clock: Box<dyn Clock>,
}

impl std::fmt::Debug for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameState")
            .field("config", &self.config)
            .field("deck", &self.deck)
            .field("table", &self.table)
            .field("scoreboard", &self.scoreboard)
            .finish_non_exhaustive()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Start a standard game with a random deck and the system clock.
    #[must_use]
    pub fn new() -> Self {
        GameBuilder::new().build()
    }

    /// Get the game configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    // === Operations ===

    /// Shuffle a fresh deck, clear every zone, reset score and timer, and
    /// deal the opening table.
    pub fn new_game(&mut self) {
        let deck = Deck::new_shuffled(&mut self.rng.fork());
        self.start(deck);
    }

    fn start(&mut self, mut deck: Deck) {
        let opening = deck.draw_n(self.config.initial_visible);
        self.table = Table::with_visible(opening);
        self.deck = deck;
        self.scoreboard = Scoreboard::new(self.clock.now());

        log::debug!(
            "New game: {} cards dealt, {} left in deck",
            self.table.visible().len(),
            self.deck.len()
        );
    }

    /// Select or deselect the visible card at `index`.
    ///
    /// Out-of-range positions and cards in the pending triple are ignored.
    pub fn select_card(&mut self, index: usize) {
        let Some(card) = self.table.visible().get(index).copied() else {
            log::trace!(
                "Ignoring selection at {}: {} cards visible",
                index,
                self.table.visible().len()
            );
            return;
        };
        if self.table.is_removed(&card) || self.table.pending().contains(&card) {
            log::trace!("Ignoring selection of {}: not selectable", card);
            return;
        }

        self.resolve_pending();

        if self.table.deselect(&card) {
            return;
        }
        if self.table.selected().len() == MATCH_SIZE - 1 {
            let triple = self.table.take_triple(card);
            self.evaluate(triple);
        } else {
            self.table.select(card);
        }
    }

    /// Deal three more cards if the deck has at least three.
    ///
    /// Dealing is all-or-nothing. Whether or not cards are dealt, a request
    /// made while a match is on the table counts toward the mismatch
    /// penalty. Returns true if cards were dealt.
    pub fn deal_three_more(&mut self) -> bool {
        if self.is_match_available() {
            self.scoreboard.record_needless_deal();
            log::debug!(
                "Deal requested with a match on the table ({} so far)",
                self.scoreboard.deal_requests()
            );
        }

        match self.deck.draw_exact(DEAL_SIZE) {
            Some(cards) => {
                self.table.deal(cards);
                true
            }
            None => {
                log::debug!("Deal skipped: {} cards left in deck", self.deck.len());
                false
            }
        }
    }

    /// First hint in canonical order, if any.
    #[must_use]
    pub fn request_hint(&self) -> Option<IndexTriple> {
        self.hints().into_iter().next()
    }

    /// Every match among the visible cards, in canonical order.
    ///
    /// A confirmed match still waiting to be replaced is left out.
    #[must_use]
    pub fn hints(&self) -> Vec<IndexTriple> {
        let excluded = if self.table.pending().is_confirmed_match() {
            self.table.pending_positions()
        } else {
            None
        };

        let hints: Vec<IndexTriple> = find_all_matches(&self.table.visible_vec())
            .into_iter()
            .filter(|triple| Some(*triple) != excluded)
            .collect();
        log::trace!("{} hints available", hints.len());
        hints
    }

    /// Check whether any match exists among the visible cards.
    #[must_use]
    pub fn is_match_available(&self) -> bool {
        has_match(&self.table.visible_vec())
    }

    /// Permute the visible cards. Selection and the pending triple follow
    /// their cards.
    pub fn shuffle_visible(&mut self) {
        let mut order = self.table.visible_vec();
        self.rng.shuffle(&mut order);
        self.table.reorder_visible(order);
    }

    /// Check whether no move can change the board any more.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.deck.len() < DEAL_SIZE && self.hints().is_empty()
    }

    // === Projections ===

    /// Face-up cards, in display order.
    #[must_use]
    pub fn visible_cards(&self) -> &Vector<Card> {
        self.table.visible()
    }

    /// Selected cards, in selection order.
    #[must_use]
    pub fn selected_cards(&self) -> &[Card] {
        self.table.selected()
    }

    /// The evaluated-triple slot with its outcome.
    #[must_use]
    pub fn pending(&self) -> &Evaluation {
        self.table.pending()
    }

    /// Cards of the evaluated triple, empty when idle.
    #[must_use]
    pub fn pending_cards(&self) -> &[Card] {
        self.table.pending().cards()
    }

    /// Cards retired by confirmed matches.
    #[must_use]
    pub fn removed_cards(&self) -> &Vector<Card> {
        self.table.removed()
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.scoreboard.score()
    }

    /// Deals requested while a match was available.
    #[must_use]
    pub fn deal_requests(&self) -> u32 {
        self.scoreboard.deal_requests()
    }

    /// Cards left in the deck.
    #[must_use]
    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    /// Where a card currently is.
    #[must_use]
    pub fn zone_of(&self, card: &Card) -> Option<Zone> {
        self.table
            .zone_of(card)
            .or_else(|| self.deck.contains(card).then_some(Zone::Deck))
    }

    /// Capture every read-only projection at once.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            visible: self.table.visible().clone(),
            selected: self.table.selected().to_vec(),
            pending: *self.table.pending(),
            removed: self.table.removed().clone(),
            score: self.scoreboard.score(),
            deal_requests: self.scoreboard.deal_requests(),
            deck_remaining: self.deck.len(),
        }
    }

    // === Internals ===

    fn evaluate(&mut self, triple: [Card; MATCH_SIZE]) {
        let outcome = MatchOutcome::from(is_triple_match(&triple));
        self.scoreboard
            .record_evaluation(outcome, self.clock.now(), &self.config);
        self.table.set_pending(outcome, triple);
    }

    fn resolve_pending(&mut self) {
        let Evaluation::Evaluated {
            outcome: MatchOutcome::Match,
            mut cards,
        } = self.table.take_pending()
        else {
            return;
        };
        cards.sort_by_key(|card| self.table.position_of(card));

        let at_capacity = self.table.visible().len() == self.config.initial_visible;
        let replacements = if at_capacity {
            self.deck.draw_exact(MATCH_SIZE)
        } else {
            None
        };

        match replacements {
            Some(replacements) => {
                self.table.replace_and_retire(&cards, replacements);
                log::debug!("Match replaced, {} cards left in deck", self.deck.len());
            }
            None => {
                self.table.remove_and_retire(&cards);
                log::debug!(
                    "Match removed, {} cards visible",
                    self.table.visible().len()
                );
            }
        }
    }
}
