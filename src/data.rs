//! Card database and deck list adapters.
//!
//! The card database is a JSON array of cards; site cards carry per-element threshold
//! counts in their guardian record. Sites are transformed into a name → symbol-string
//! threshold map (`"ae"`, `"aefw"`, `""` for threshold-less sites), which is what the deck
//! list converter joins against.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use thiserror::Error;
use tracing::debug;

use crate::symbol::{Element, Symbol};

const SITE_TYPE: &str = "Site";
const WILDCARD_SYMBOLS: &str = "aefw";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    pub name: String,
    pub guardian: Guardian,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Guardian {
    #[serde(rename = "type")]
    pub card_type: String,
    #[serde(default)]
    pub thresholds: Thresholds,
}

/// Per-element threshold counts of one card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thresholds {
    #[serde(default)]
    pub air: u8,
    #[serde(default)]
    pub earth: u8,
    #[serde(default)]
    pub fire: u8,
    #[serde(default)]
    pub water: u8,
}

impl Thresholds {
    pub fn get(&self, element: Element) -> u8 {
        match element {
            Element::Air => self.air,
            Element::Earth => self.earth,
            Element::Fire => self.fire,
            Element::Water => self.water,
        }
    }

    /// Concatenated symbol string, one letter per threshold point, in canonical element
    /// order. Empty for a threshold-less card.
    pub fn symbol_string(&self) -> String {
        let mut symbols = String::new();
        for element in Element::iter() {
            for _ in 0..self.get(element) {
                symbols.push(element.letter());
            }
        }
        symbols
    }

    /// Requirement symbols, one per threshold point, sorted ascending.
    pub fn criteria(&self) -> Vec<Symbol> {
        self.symbol_string()
            .chars()
            .map(|letter| Symbol::from(letter.to_string()))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.air == 0 && self.earth == 0 && self.fire == 0 && self.water == 0
    }
}

/// Normalized card name → threshold symbol string.
pub type ThresholdMap = FxHashMap<String, String>;

/// Extracts the threshold map from the card database. Cards named in `wildcard_names`
/// (normalized) are treated as providing every element once.
pub fn transform_cards(cards: &[Card], wildcard_names: &FxHashSet<String>) -> ThresholdMap {
    let mut thresholds = ThresholdMap::default();
    for card in cards {
        if card.guardian.card_type != SITE_TYPE {
            continue;
        }
        let name = normalize_name(&card.name);
        let symbols = if wildcard_names.contains(&name) {
            WILDCARD_SYMBOLS.into()
        } else {
            card.guardian.thresholds.symbol_string()
        };
        thresholds.insert(name, symbols);
    }
    debug!("transformed {} sites from {} cards", thresholds.len(), cards.len());
    thresholds
}

/// Lowercases a card name and replaces spaces with underscores so it can key the
/// threshold map.
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase().replace(' ', "_")
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeckError {
    #[error("unknown card {0:?}")]
    UnknownCard(String),
}

/// Converts a deck list (lines of the form `<count>x <name>`; anything not starting with
/// a digit is skipped) into the sorted symbol pool. Sites without thresholds contribute
/// `x` symbols so the pool retains the full deck size.
pub fn deck_to_symbols(list: &str, thresholds: &ThresholdMap) -> Result<Vec<Symbol>, DeckError> {
    let mut symbols = vec![];
    for line in list.lines() {
        let Some(count) = line.chars().next().and_then(|first| first.to_digit(10)) else {
            continue;
        };
        let name = normalize_name(line.get(3..).unwrap_or_default().trim());
        let provided = thresholds
            .get(&name)
            .ok_or_else(|| DeckError::UnknownCard(name.clone()))?;
        for _ in 0..count {
            if provided.is_empty() {
                symbols.push(Symbol::blank());
            } else {
                symbols.push(Symbol::from(provided.as_str()));
            }
        }
    }
    symbols.sort();
    Ok(symbols)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::syms;

    fn site(name: &str, thresholds: Thresholds) -> Card {
        Card {
            name: name.into(),
            guardian: Guardian {
                card_type: SITE_TYPE.into(),
                thresholds,
            },
        }
    }

    fn threshold_fixture() -> ThresholdMap {
        let cards = vec![
            site(
                "Autumn River",
                Thresholds {
                    water: 1,
                    ..Thresholds::default()
                },
            ),
            site(
                "Gnome Hollows",
                Thresholds {
                    air: 1,
                    earth: 1,
                    ..Thresholds::default()
                },
            ),
            site("Arid Desert", Thresholds::default()),
            Card {
                name: "Not A Site".into(),
                guardian: Guardian {
                    card_type: "Minion".into(),
                    thresholds: Thresholds::default(),
                },
            },
        ];
        transform_cards(&cards, &FxHashSet::default())
    }

    #[test]
    fn normalizes_names() {
        assert_eq!("autumn_river", normalize_name("Autumn River"));
        assert_eq!("lone_tower", normalize_name("LONE Tower"));
    }

    #[test]
    fn symbol_string_in_canonical_order() {
        let thresholds = Thresholds {
            air: 1,
            earth: 2,
            fire: 0,
            water: 1,
        };
        assert_eq!("aeew", thresholds.symbol_string());
        assert_eq!(syms("a,e,e,w"), thresholds.criteria());
    }

    #[test]
    fn transform_keeps_sites_only() {
        let thresholds = threshold_fixture();
        assert_eq!(3, thresholds.len());
        assert_eq!("w", thresholds["autumn_river"]);
        assert_eq!("ae", thresholds["gnome_hollows"]);
        assert_eq!("", thresholds["arid_desert"]);
        assert!(!thresholds.contains_key("not_a_site"));
    }

    #[test]
    fn wildcard_names_provide_every_element() {
        let cards = vec![site(
            "Lone Tower",
            Thresholds {
                earth: 1,
                ..Thresholds::default()
            },
        )];
        let wildcards: FxHashSet<String> = ["lone_tower".to_string()].into_iter().collect();
        let thresholds = transform_cards(&cards, &wildcards);
        assert_eq!("aefw", thresholds["lone_tower"]);
    }

    #[test]
    fn deck_list_expands_counts_and_blanks() {
        let thresholds = threshold_fixture();
        let list = "2x Autumn River\n1x Gnome Hollows\n2x Arid Desert\n\nSideboard notes\n";
        let symbols = deck_to_symbols(list, &thresholds).unwrap();
        assert_eq!(syms("ae,w,w,x,x"), symbols);
    }

    #[test]
    fn deck_list_unknown_card_is_an_error() {
        let thresholds = threshold_fixture();
        let result = deck_to_symbols("1x Sunken Ruins", &thresholds);
        assert_eq!(Err(DeckError::UnknownCard("sunken_ruins".into())), result);
    }
}
