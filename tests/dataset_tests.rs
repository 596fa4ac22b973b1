//! End-to-end tests against the bundled snapshot.
//!
//! These pin the observable contract of the assembled dataset:
//! - fixed slice counts for the bundled snapshot
//! - non-empty unique card numbers per slice
//! - filters matching the distinct values of their slice's cards
//! - deterministic, idempotent loading

use op_card_data::{Dataset, Filters, SliceKey};

// Snapshot counts for the bundled data.
const EN_CARD_COUNT: usize = 10;
const JP_CARD_COUNT: usize = 6;

/// The `all` slice is the union of the per-language bundles, with no
/// duplication and no loss.
#[test]
fn test_snapshot_counts() {
    let dataset = Dataset::load().expect("bundled data loads");

    assert_eq!(dataset.en().len(), EN_CARD_COUNT);
    assert_eq!(dataset.jp().len(), JP_CARD_COUNT);
    assert_eq!(dataset.all().len(), EN_CARD_COUNT + JP_CARD_COUNT);
}

/// Every card number is non-empty and unique within its slice.
#[test]
fn test_card_numbers_unique_per_slice() {
    let dataset = Dataset::load().expect("bundled data loads");

    for key in [SliceKey::All, SliceKey::En, SliceKey::Jp] {
        let slice = dataset.slice(key);
        let mut numbers: Vec<&str> = slice
            .cards
            .iter()
            .map(|c| c.card_number.as_str())
            .collect();

        assert!(numbers.iter().all(|n| !n.is_empty()), "slice {}", key);

        numbers.sort_unstable();
        numbers.dedup();
        assert_eq!(numbers.len(), slice.len(), "slice {}", key);
    }
}

/// Each slice's filters equal the distinct values derived from its
/// cards - including the `en` filters, which come from the bundle.
#[test]
fn test_filters_match_cards() {
    let dataset = Dataset::load().expect("bundled data loads");

    for key in [SliceKey::All, SliceKey::En, SliceKey::Jp] {
        let slice = dataset.slice(key);
        assert_eq!(
            slice.filters,
            Filters::from_cards(&slice.cards),
            "slice {}",
            key
        );
    }
}

/// Loading twice yields deep-equal datasets.
#[test]
fn test_load_is_deterministic() {
    let first = Dataset::load().expect("bundled data loads");
    let second = Dataset::load().expect("bundled data loads");

    assert_eq!(first, second);
}

/// List fields are always present, never null: an empty attribute list
/// is bundled as `["-"]` per the source convention.
#[test]
fn test_list_fields_are_always_present() {
    let dataset = Dataset::load().expect("bundled data loads");

    for card in &dataset.all().cards {
        assert!(!card.attributes.is_empty(), "{}", card.card_number);
        assert!(!card.colors.is_empty(), "{}", card.card_number);
        assert!(!card.card_effects.is_empty(), "{}", card.card_number);
    }
}

/// The `en` slice carries exactly its cards and filters, and the known
/// distinct values of the bundled English snapshot.
#[test]
fn test_en_slice_shape() {
    let dataset = Dataset::load().expect("bundled data loads");
    let en = dataset.en();

    assert_eq!(en.cards.len(), EN_CARD_COUNT);
    assert_eq!(en.filters.colors, vec!["Blue", "Green", "Red"]);
    assert_eq!(en.filters.rarities, vec!["C", "L", "R", "SEC", "SR"]);
    assert_eq!(
        en.filters.categories,
        vec!["CHARACTER", "EVENT", "LEADER", "STAGE"]
    );
    assert_eq!(
        en.filters.sets,
        vec![
            "[OP-01] -ROMANCE DAWN- [OP-01]",
            "[ST-01] Straw Hat Crew [ST-01]"
        ]
    );
}

/// Cards come back in canonical order: by set, then numerically within
/// the set.
#[test]
fn test_canonical_order() {
    let dataset = Dataset::load().expect("bundled data loads");

    let en_numbers: Vec<&str> = dataset
        .en()
        .cards
        .iter()
        .map(|c| c.card_number.as_str())
        .collect();
    assert_eq!(
        en_numbers,
        vec![
            "OP01-001", "OP01-047", "OP01-060", "OP01-084", "OP01-121", "ST01-001", "ST01-004",
            "ST01-006", "ST01-014", "ST01-017",
        ]
    );
}
