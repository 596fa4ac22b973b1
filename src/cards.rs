//! Card records - the static per-card data.
//!
//! `Card` mirrors the bundled JSON schema field for field. The numeric
//! stats (`life`, `cost`, `power`, `counter`) stay as text because the
//! source data uses `"-"` for cards where a stat does not apply, and
//! some printed values carry non-numeric markers.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// One playable card's full metadata record.
///
/// Every field is required: a bundled record missing any of them is a
/// shape error and fails the whole load. List fields deserialize
/// strictly - `null` is rejected, an empty list is fine.
///
/// ## Example
///
/// ```
/// let json = r#"{
///     "card_name": "Roronoa Zoro",
///     "card_number": "OP01-001",
///     "rarity": "L",
///     "is_alternate_art": false,
///     "card_type": "LEADER",
///     "image_url": "https://en.onepiece-cardgame.com/images/cardlist/card/OP01-001.png",
///     "life": "5",
///     "cost": "-",
///     "attributes": ["Slash"],
///     "power": "5000",
///     "counter": "-",
///     "colors": ["Red"],
///     "types": ["Supernovas", "Straw Hat Crew"],
///     "effects": "[DON!! x1] All of your Characters gain +1000 power.",
///     "card_effects": ["[DON!! x1]"],
///     "card_sets": "[OP-01] -ROMANCE DAWN- [OP-01]",
///     "image_name": "OP01-001"
/// }"#;
///
/// let card: op_card_data::Card = serde_json::from_str(json).unwrap();
/// assert_eq!(card.card_number, "OP01-001");
/// assert!(card.is_leader());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Display name, e.g. "Monkey.D.Luffy".
    pub card_name: String,

    /// Card number, e.g. "OP01-001". Unique within a slice.
    pub card_number: String,

    /// Rarity code as printed: "C", "UC", "R", "SR", "L", "SEC", ...
    pub rarity: String,

    /// Whether this record is an alternate-art printing.
    pub is_alternate_art: bool,

    /// Category: "LEADER", "CHARACTER", "EVENT" or "STAGE".
    pub card_type: String,

    /// Full URL of the card image.
    pub image_url: String,

    /// Leader life total, or "-" for non-Leader cards.
    pub life: String,

    /// Play cost, or "-" for Leader cards.
    pub cost: String,

    /// Attribute tags ("Slash", "Strike", ...); `["-"]` when the card
    /// has none, matching the source data convention.
    pub attributes: Vec<String>,

    /// Power value, or "-" where power does not apply.
    pub power: String,

    /// Counter value, or "-" where counter does not apply.
    pub counter: String,

    /// Card colors in printed order.
    pub colors: Vec<String>,

    /// Type line entries, e.g. ["Supernovas", "Straw Hat Crew"].
    pub types: Vec<String>,

    /// Free-text effect description.
    pub effects: String,

    /// Discrete effect tags found on the card, e.g. "[Blocker]".
    pub card_effects: Vec<String>,

    /// Set/printing descriptor, e.g. "[OP-01] -ROMANCE DAWN- [OP-01]".
    pub card_sets: String,

    /// Image file stem, e.g. "OP01-001".
    pub image_name: String,
}

impl Card {
    /// Whether this card is a Leader.
    #[must_use]
    pub fn is_leader(&self) -> bool {
        self.card_type == "LEADER"
    }

    /// The sort key for canonical ordering: set descriptor, then
    /// card-number prefix, then the numeric tail of the card number.
    fn sort_key(&self) -> (&str, String, i32) {
        let (prefix, number) = split_card_number(&self.card_number);
        (&self.card_sets, prefix, number)
    }
}

/// Sort cards into canonical order: by set, then by card-number prefix,
/// then by the numeric tail ("ST01-002" before "ST01-010").
pub fn sort_cards(cards: &mut [Card]) {
    cards.sort_by(|a, b| match a.sort_key().cmp(&b.sort_key()) {
        Ordering::Equal => a.card_number.cmp(&b.card_number),
        ordering => ordering,
    });
}

/// Split a card number like "ST01-001" into ("ST01-", 1).
///
/// Numbers without a dash split at the first digit; a non-numeric tail
/// sorts as 0.
fn split_card_number(card_number: &str) -> (String, i32) {
    let digit_start = card_number
        .chars()
        .position(|c| c.is_ascii_digit())
        .unwrap_or(0);
    let (prefix, rest) = card_number.split_at(digit_start);

    let last_dash = rest.rfind('-').unwrap_or(0);
    let tail = if last_dash > 0 {
        &rest[last_dash + 1..]
    } else {
        rest
    };

    let number = tail
        .chars()
        .filter(|c| c.is_ascii_digit())
        .collect::<String>()
        .parse::<i32>()
        .unwrap_or(0);

    let full_prefix = if last_dash > 0 {
        format!("{}{}-", prefix, &rest[..last_dash])
    } else {
        prefix.to_string()
    };

    (full_prefix, number)
}
