//! The Set game: state machine, builder, and snapshots.
//!
//! A presentation layer owns one `GameState`, forwards user input to
//! `select_card`, `deal_three_more`, `request_hint` and `new_game`, and
//! renders from the projections or a `GameSnapshot`.
//!
//! The core is single-threaded and holds no locks. Embeddings that receive
//! events on several threads must serialize calls into it.

mod snapshot;
mod state;

pub use snapshot::GameSnapshot;
pub use state::{GameBuilder, GameState};
