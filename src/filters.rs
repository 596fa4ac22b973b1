//! Filter metadata - distinct values per filterable card field.
//!
//! `Filters` holds the unique value lists a UI needs to populate its
//! selection controls for one slice. The `en` slice ships its filters
//! in the bundle; the other slices derive theirs from their cards.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Distinct-value lists for one slice, each sorted ascending.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filters {
    /// Distinct card colors, flattened across multi-color cards.
    pub colors: Vec<String>,

    /// Distinct rarity codes.
    pub rarities: Vec<String>,

    /// Distinct type-line entries, flattened.
    pub types: Vec<String>,

    /// Distinct set/printing descriptors.
    pub sets: Vec<String>,

    /// Distinct card categories (LEADER, CHARACTER, ...).
    pub categories: Vec<String>,
}

impl Filters {
    /// Derive the filter lists from a card collection.
    ///
    /// Each list is the set of distinct values appearing across `cards`
    /// for the respective field, sorted ascending.
    #[must_use]
    pub fn from_cards(cards: &[Card]) -> Self {
        let mut colors = FxHashSet::default();
        let mut rarities = FxHashSet::default();
        let mut types = FxHashSet::default();
        let mut sets = FxHashSet::default();
        let mut categories = FxHashSet::default();

        for card in cards {
            colors.extend(card.colors.iter().cloned());
            types.extend(card.types.iter().cloned());
            rarities.insert(card.rarity.clone());
            sets.insert(card.card_sets.clone());
            categories.insert(card.card_type.clone());
        }

        Self {
            colors: sorted_vec(colors),
            rarities: sorted_vec(rarities),
            types: sorted_vec(types),
            sets: sorted_vec(sets),
            categories: sorted_vec(categories),
        }
    }
}

fn sorted_vec(set: FxHashSet<String>) -> Vec<String> {
    let mut values: Vec<String> = set.into_iter().collect();
    values.sort();
    values
}
