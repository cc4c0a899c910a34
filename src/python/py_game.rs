//! Game bindings for Python.

use pyo3::prelude::*;

use crate::cards::Card;
use crate::core::GameConfig;
use crate::game::{GameBuilder, GameState};
use crate::rules::is_match;

/// Python wrapper for Card.
#[pyclass(name = "Card")]
#[derive(Clone, Debug)]
pub struct PyCard(pub Card);

#[pymethods]
impl PyCard {
    /// Create a card from attribute codes (each 0-2).
    #[new]
    fn new(color: u8, shape: u8, fill: u8, count: u8) -> Self {
        Self(Card::from_codes([color, shape, fill, count]))
    }

    /// Attribute codes as (color, shape, fill, count).
    fn codes(&self) -> (u8, u8, u8, u8) {
        let [c, s, f, n] = self.0.codes();
        (c, s, f, n)
    }

    fn __repr__(&self) -> String {
        self.0.to_string()
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        self.0.ordinal() as u64
    }
}

/// Check whether a list of cards is a match.
///
/// Raises ValueError unless exactly three cards are given.
#[pyfunction]
pub fn cards_match(cards: Vec<PyCard>) -> PyResult<bool> {
    let cards: Vec<Card> = cards.into_iter().map(|c| c.0).collect();
    is_match(&cards).map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))
}

/// Python wrapper for a running Set game.
#[pyclass(name = "SetGame")]
pub struct PySetGame {
    state: GameState,
}

#[pymethods]
impl PySetGame {
    /// Start a new game.
    ///
    /// # Arguments
    /// - seed: RNG seed for a reproducible deck (random if omitted)
    /// - initial_visible: number of cards dealt face up
    #[new]
    #[pyo3(signature = (seed = None, initial_visible = 12))]
    fn new(seed: Option<u64>, initial_visible: usize) -> PyResult<Self> {
        if initial_visible > crate::cards::DECK_SIZE {
            return Err(PyErr::new::<pyo3::exceptions::PyValueError, _>(format!(
                "initial_visible must be at most {}",
                crate::cards::DECK_SIZE
            )));
        }
        let mut builder =
            GameBuilder::new().config(GameConfig::new().with_initial_visible(initial_visible));
        if let Some(seed) = seed {
            builder = builder.seed(seed);
        }
        Ok(Self {
            state: builder.build(),
        })
    }

    fn new_game(&mut self) {
        self.state.new_game();
    }

    fn select_card(&mut self, index: usize) {
        self.state.select_card(index);
    }

    /// Returns True if three cards were dealt.
    fn deal_three_more(&mut self) -> bool {
        self.state.deal_three_more()
    }

    fn request_hint(&self) -> Option<(usize, usize, usize)> {
        self.state.request_hint().map(|[i, j, k]| (i, j, k))
    }

    fn hints(&self) -> Vec<(usize, usize, usize)> {
        self.state
            .hints()
            .into_iter()
            .map(|[i, j, k]| (i, j, k))
            .collect()
    }

    fn is_match_available(&self) -> bool {
        self.state.is_match_available()
    }

    fn shuffle_visible(&mut self) {
        self.state.shuffle_visible();
    }

    fn is_over(&self) -> bool {
        self.state.is_over()
    }

    #[getter]
    fn visible_cards(&self) -> Vec<PyCard> {
        self.state.visible_cards().iter().copied().map(PyCard).collect()
    }

    #[getter]
    fn selected_cards(&self) -> Vec<PyCard> {
        self.state.selected_cards().iter().copied().map(PyCard).collect()
    }

    #[getter]
    fn pending_cards(&self) -> Vec<PyCard> {
        self.state.pending_cards().iter().copied().map(PyCard).collect()
    }

    /// True/False for an evaluated triple, None when nothing is pending.
    #[getter]
    fn pending_is_match(&self) -> Option<bool> {
        self.state.pending().outcome().map(|o| o.is_match())
    }

    #[getter]
    fn removed_cards(&self) -> Vec<PyCard> {
        self.state.removed_cards().iter().copied().map(PyCard).collect()
    }

    #[getter]
    fn score(&self) -> u32 {
        self.state.score()
    }

    #[getter]
    fn deal_requests(&self) -> u32 {
        self.state.deal_requests()
    }

    #[getter]
    fn deck_len(&self) -> usize {
        self.state.deck_len()
    }

    fn __repr__(&self) -> String {
        format!(
            "SetGame(visible={}, deck={}, score={})",
            self.state.visible_cards().len(),
            self.state.deck_len(),
            self.state.score()
        )
    }
}
