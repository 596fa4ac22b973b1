//! Dataset assembly and slice lookup.
//!
//! The bundled JSON is embedded at compile time and parsed once by
//! [`Dataset::load`]. The returned value is immutable; callers hold it
//! for the process lifetime and hand out references. There is no global
//! state and no reload path - the data is static.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::cards::{sort_cards, Card};
use crate::error::LoadError;
use crate::filters::Filters;

static ALL_CARDS_JSON: &str = include_str!("../data/all/cards.json");
static EN_CARDS_JSON: &str = include_str!("../data/en/cards.json");
static EN_FILTERS_JSON: &str = include_str!("../data/en/filters.json");
static JP_CARDS_JSON: &str = include_str!("../data/jp/cards.json");

/// Names the three slices of the dataset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SliceKey {
    /// The combined card list across all regions.
    All,
    /// The English card list with its bundled filters.
    En,
    /// The Japanese card list.
    Jp,
}

impl std::fmt::Display for SliceKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SliceKey::All => write!(f, "all"),
            SliceKey::En => write!(f, "en"),
            SliceKey::Jp => write!(f, "jp"),
        }
    }
}

/// One slice of the dataset: its cards plus the filter metadata.
///
/// Every slice uses this shape. Slices whose bundle carries no filters
/// file get their filters derived from their cards at load time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSet {
    /// The cards, in canonical order (by set, then card number).
    pub cards: Vec<Card>,

    /// Distinct-value lists for the filterable fields of `cards`.
    pub filters: Filters,
}

impl CardSet {
    /// Get the number of cards in this slice.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the slice holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Look up a card by its card number.
    #[must_use]
    pub fn find_by_number(&self, card_number: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.card_number == card_number)
    }
}

/// The assembled dataset: three named slices, immutable after load.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    all: CardSet,
    en: CardSet,
    jp: CardSet,
}

impl Dataset {
    /// Parse the embedded bundles and assemble the dataset.
    ///
    /// Runs the integrity checks (non-empty unique `card_number` per
    /// slice, bundled `en` filters matching the derived values) and
    /// sorts every slice into canonical order. Deterministic: two loads
    /// yield equal datasets.
    ///
    /// Fails fatally on the first malformed bundle; no partial dataset
    /// is ever returned.
    pub fn load() -> Result<Self, LoadError> {
        let all = parse_cards(SliceKey::All, ALL_CARDS_JSON)?;
        let en = parse_cards(SliceKey::En, EN_CARDS_JSON)?;
        let jp = parse_cards(SliceKey::Jp, JP_CARDS_JSON)?;

        let en_filters: Filters =
            serde_json::from_str(EN_FILTERS_JSON).map_err(|source| LoadError::Parse {
                slice: SliceKey::En,
                source,
            })?;
        if en_filters != Filters::from_cards(&en) {
            return Err(LoadError::FilterMismatch {
                slice: SliceKey::En,
            });
        }

        Ok(Self {
            all: CardSet {
                filters: Filters::from_cards(&all),
                cards: all,
            },
            en: CardSet {
                filters: en_filters,
                cards: en,
            },
            jp: CardSet {
                filters: Filters::from_cards(&jp),
                cards: jp,
            },
        })
    }

    /// Get a slice by key.
    #[must_use]
    pub fn slice(&self, key: SliceKey) -> &CardSet {
        match key {
            SliceKey::All => &self.all,
            SliceKey::En => &self.en,
            SliceKey::Jp => &self.jp,
        }
    }

    /// The combined slice.
    #[must_use]
    pub fn all(&self) -> &CardSet {
        &self.all
    }

    /// The English slice.
    #[must_use]
    pub fn en(&self) -> &CardSet {
        &self.en
    }

    /// The Japanese slice.
    #[must_use]
    pub fn jp(&self) -> &CardSet {
        &self.jp
    }
}

/// Parse one bundled card list and run its integrity checks.
fn parse_cards(slice: SliceKey, json: &str) -> Result<Vec<Card>, LoadError> {
    let mut cards: Vec<Card> =
        serde_json::from_str(json).map_err(|source| LoadError::Parse { slice, source })?;

    let mut seen = FxHashSet::default();
    for (index, card) in cards.iter().enumerate() {
        if card.card_number.is_empty() {
            return Err(LoadError::EmptyCardNumber { slice, index });
        }
        if !seen.insert(card.card_number.clone()) {
            return Err(LoadError::DuplicateCardNumber {
                slice,
                card_number: card.card_number.clone(),
            });
        }
    }

    sort_cards(&mut cards);
    Ok(cards)
}
