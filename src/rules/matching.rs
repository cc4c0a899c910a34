//! The matching rule.
//!
//! Three cards form a match when, for every attribute, the variant codes
//! sum to 0 mod 3. Over Z/3 this holds exactly when the three values are
//! all equal or all distinct, which is the rule as players know it.
//!
//! ```
//! use set_engine::cards::Card;
//! use set_engine::rules::{find_all_matches, is_triple_match};
//!
//! let a = Card::from_codes([0, 0, 0, 0]);
//! let b = Card::from_codes([1, 1, 1, 1]);
//! let c = Card::from_codes([2, 2, 2, 2]);
//! assert!(is_triple_match(&[a, b, c]));
//!
//! let d = Card::from_codes([0, 0, 0, 1]);
//! assert_eq!(find_all_matches(&[a, d, b, c]), vec![[0, 2, 3]]);
//! ```

use crate::cards::Card;
use crate::core::{Error, Result};

/// Number of cards in a match.
pub const MATCH_SIZE: usize = 3;

/// Positions `[i, j, k]` of a match within a card slice, with `i < j < k`.
pub type IndexTriple = [usize; MATCH_SIZE];

/// Check whether exactly three cards form a match.
///
/// Returns `InvalidArgument` for any other number of cards.
pub fn is_match(cards: &[Card]) -> Result<bool> {
    let triple: &[Card; MATCH_SIZE] = cards.try_into().map_err(|_| {
        Error::InvalidArgument(format!(
            "a match needs exactly {} cards, got {}",
            MATCH_SIZE,
            cards.len()
        ))
    })?;
    Ok(is_triple_match(triple))
}

/// Check whether three cards form a match.
#[must_use]
pub fn is_triple_match(cards: &[Card; MATCH_SIZE]) -> bool {
    let [a, b, c] = (*cards).map(|card| card.codes());
    (0..4).all(|attr| (a[attr] + b[attr] + c[attr]) % 3 == 0)
}

/// Enumerate every match among `cards`.
///
/// Brute force over all `i < j < k`; results come out in lexicographic
/// order. Returns an empty vec for fewer than three cards.
#[must_use]
pub fn find_all_matches(cards: &[Card]) -> Vec<IndexTriple> {
    let n = cards.len();
    let mut matches = Vec::new();

    for i in 0..n {
        for j in (i + 1)..n {
            for k in (j + 1)..n {
                if is_triple_match(&[cards[i], cards[j], cards[k]]) {
                    matches.push([i, j, k]);
                }
            }
        }
    }

    matches
}

/// Check whether any match exists among `cards`.
///
/// Stops at the first match found.
#[must_use]
pub fn has_match(cards: &[Card]) -> bool {
    let n = cards.len();
    (0..n).any(|i| {
        ((i + 1)..n).any(|j| ((j + 1)..n).any(|k| is_triple_match(&[cards[i], cards[j], cards[k]])))
    })
}
