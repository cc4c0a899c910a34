//! Zone system for card locations.
//!
//! A card is in exactly one of the deck, the visible row, or the removed
//! pile. Selection and the pending triple are layers over the visible row.
//!
//! ## Key Types
//!
//! - `Zone`: where a card is, for presentation and assertions
//! - `Evaluation`: the `Idle | Evaluated` slot for the last judged triple
//! - `Table`: visible row, selection, pending slot, removed pile

pub mod table;

pub use table::{Evaluation, Table, Zone};
