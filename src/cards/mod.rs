//! Card system: the attribute domain, card values, and the deck.
//!
//! ## Key Types
//!
//! - `Variant`: one of three values an attribute can take
//! - `Attribute`: color, shape, fill, count
//! - `Card`: immutable 4-tuple of variants; 81 exist
//! - `Deck`: shuffled draw pile that only shrinks

pub mod attributes;
pub mod card;
pub mod deck;

pub use attributes::{Attribute, Variant};
pub use card::{Card, DECK_SIZE};
pub use deck::Deck;
