//! Card values.
//!
//! A `Card` is an immutable tuple of four variants. Equality and hashing
//! are structural, so cards double as their own identity: the 81-card deck
//! holds each combination exactly once, and zones track cards by value.

use serde::{Deserialize, Serialize};

use super::attributes::{Attribute, Variant};

/// Number of distinct cards: 3 variants over 4 attributes.
pub const DECK_SIZE: usize = 81;

/// A card with one variant per attribute.
///
/// ## Example
///
/// ```
/// use set_engine::cards::{Attribute, Card, Variant};
///
/// let card = Card::new(Variant::First, Variant::Second, Variant::Third, Variant::First);
/// assert_eq!(card.get(Attribute::Fill), Variant::Third);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Card {
    pub color: Variant,
    pub shape: Variant,
    pub fill: Variant,
    pub count: Variant,
}

impl Card {
    /// Create a card.
    #[must_use]
    pub const fn new(color: Variant, shape: Variant, fill: Variant, count: Variant) -> Self {
        Self {
            color,
            shape,
            fill,
            count,
        }
    }

    /// Create a card from residue codes (taken mod 3), in attribute order.
    #[must_use]
    pub const fn from_codes(codes: [u8; 4]) -> Self {
        Self::new(
            Variant::from_code(codes[0]),
            Variant::from_code(codes[1]),
            Variant::from_code(codes[2]),
            Variant::from_code(codes[3]),
        )
    }

    /// Residue codes in attribute order.
    #[must_use]
    pub const fn codes(&self) -> [u8; 4] {
        [
            self.color.code(),
            self.shape.code(),
            self.fill.code(),
            self.count.code(),
        ]
    }

    /// Get the variant for an attribute.
    #[must_use]
    pub const fn get(&self, attribute: Attribute) -> Variant {
        match attribute {
            Attribute::Color => self.color,
            Attribute::Shape => self.shape,
            Attribute::Fill => self.fill,
            Attribute::Count => self.count,
        }
    }

    /// The unique card that forms a match with `self` and `other`.
    #[must_use]
    pub const fn completing(&self, other: &Card) -> Card {
        Card::new(
            self.color.complement(other.color),
            self.shape.complement(other.shape),
            self.fill.complement(other.fill),
            self.count.complement(other.count),
        )
    }

    /// Position of this card in the canonical (unshuffled) deck order.
    #[must_use]
    pub fn ordinal(&self) -> usize {
        let [c, s, f, n] = self.codes();
        (c as usize) * 27 + (s as usize) * 9 + (f as usize) * 3 + n as usize
    }

    /// Iterate over all 81 cards in canonical order.
    pub fn all() -> impl Iterator<Item = Card> {
        (0..DECK_SIZE).map(|i| {
            Card::from_codes([
                (i / 27) as u8,
                (i / 9 % 3) as u8,
                (i / 3 % 3) as u8,
                (i % 3) as u8,
            ])
        })
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [c, s, fl, n] = self.codes();
        write!(f, "Card({}{}{}{})", c, s, fl, n)
    }
}
