//! The attribute domain.
//!
//! Every card has four attributes (color, shape, fill, count), each taking
//! one of three variants. The rules only need the variants as residues mod
//! 3, so `Variant::code` is the single place that encoding lives.

use serde::{Deserialize, Serialize};

/// One of the three values an attribute can take.
///
/// What a variant looks like (red vs. green, oval vs. diamond) is up to the
/// presentation layer; the engine only compares them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Variant {
    First,
    Second,
    Third,
}

impl Variant {
    /// All variants, in code order.
    pub const ALL: [Variant; 3] = [Variant::First, Variant::Second, Variant::Third];

    /// Residue of this variant in Z/3.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Variant::First => 0,
            Variant::Second => 1,
            Variant::Third => 2,
        }
    }

    /// Variant for a residue. Values are taken mod 3.
    #[must_use]
    pub const fn from_code(code: u8) -> Self {
        match code % 3 {
            0 => Variant::First,
            1 => Variant::Second,
            _ => Variant::Third,
        }
    }

    /// The variant that completes a match with `self` and `other`.
    ///
    /// Equal inputs give the same variant back; distinct inputs give the
    /// remaining one.
    #[must_use]
    pub const fn complement(self, other: Variant) -> Self {
        Self::from_code((6 - self.code() - other.code()) % 3)
    }
}

/// The four independent card dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Attribute {
    Color,
    Shape,
    Fill,
    Count,
}

impl Attribute {
    /// All attributes, in card field order.
    pub const ALL: [Attribute; 4] = [
        Attribute::Color,
        Attribute::Shape,
        Attribute::Fill,
        Attribute::Count,
    ];
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Attribute::Color => "color",
            Attribute::Shape => "shape",
            Attribute::Fill => "fill",
            Attribute::Count => "count",
        };
        f.write_str(name)
    }
}
