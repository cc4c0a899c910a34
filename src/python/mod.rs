//! Python bindings for the Set rule engine.
//!
//! Lets a Python presentation layer (or test harness) drive a game.
//!
//! # Quick Start
//!
//! ```python
//! import set_engine
//!
//! game = set_engine.SetGame(seed=42)
//! hint = game.request_hint()
//! if hint is not None:
//!     for index in hint:
//!         game.select_card(index)
//! print(game.score, game.pending_is_match)
//! ```

use pyo3::prelude::*;

mod py_game;

pub use py_game::*;

/// set_engine: rule engine for the Set card game.
#[pymodule]
fn set_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyCard>()?;
    m.add_class::<PySetGame>()?;
    m.add_function(wrap_pyfunction!(cards_match, m)?)?;

    Ok(())
}
