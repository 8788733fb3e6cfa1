//! Threshold symbols and frequency maps.
//!
//! A [Symbol] is a short string token describing the threshold output of one card: a single
//! element letter (`a`, `e`, `f`, `w`), a concatenation for multi-threshold cards (`ae`,
//! `aefw`), the blank `x` for cards that produce no threshold, or the wildcard `*` used to
//! pad a requirement out to a larger draw count. A symbol of length _L_ provides every
//! element letter it contains, but can only occupy one requirement slot per draw.

use std::fmt::{Display, Formatter};

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use strum_macros::{Display as StrumDisplay, EnumIter};

const WILDCARD: &str = "*";
const BLANK: &str = "x";

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    pub fn wildcard() -> Self {
        Self(WILDCARD.into())
    }

    pub fn blank() -> Self {
        Self(BLANK.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_wildcard(&self) -> bool {
        self.0 == WILDCARD
    }

    pub fn is_blank(&self) -> bool {
        self.0 == BLANK
    }

    /// Whether this symbol can stand in for `other`: true iff `other` appears as a
    /// substring. A wildcard slot is handled separately by the expander.
    pub fn provides(&self, other: &Symbol) -> bool {
        self.0.contains(&other.0)
    }
}

impl From<&str> for Symbol {
    fn from(value: &str) -> Self {
        Self(value.into())
    }
}

impl From<String> for Symbol {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Counts occurrences of each distinct symbol in `symbols`. An empty slice yields an
/// empty map.
pub fn frequencies(symbols: &[Symbol]) -> FxHashMap<Symbol, usize> {
    let mut freqs = FxHashMap::with_capacity_and_hasher(symbols.len(), Default::default());
    for symbol in symbols {
        *freqs.entry(symbol.clone()).or_insert(0) += 1;
    }
    freqs
}

/// The four elements a site card may provide thresholds for. The strum-serialized form
/// matches the keys used in the card database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, StrumDisplay)]
#[strum(serialize_all = "lowercase")]
pub enum Element {
    Air,
    Earth,
    Fire,
    Water,
}

impl Element {
    /// Single-letter form used in symbol strings and requirements.
    pub fn letter(self) -> char {
        match self {
            Element::Air => 'a',
            Element::Earth => 'e',
            Element::Fire => 'f',
            Element::Water => 'w',
        }
    }
}
