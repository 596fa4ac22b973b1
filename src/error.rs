//! Load-failure error type.

use thiserror::Error;

use crate::dataset::SliceKey;

/// Why assembling the dataset failed.
///
/// Any variant aborts the whole load; no partial dataset is returned.
#[derive(Debug, Error)]
pub enum LoadError {
    /// A bundled file is not valid JSON or a record does not match the
    /// `Card`/`Filters` shape.
    #[error("slice {slice} is malformed: {source}")]
    Parse {
        slice: SliceKey,
        #[source]
        source: serde_json::Error,
    },

    /// A record carries an empty `card_number`.
    #[error("slice {slice} has an empty card_number at index {index}")]
    EmptyCardNumber { slice: SliceKey, index: usize },

    /// Two records in the same slice share a `card_number`.
    #[error("slice {slice} has a duplicate card_number {card_number}")]
    DuplicateCardNumber {
        slice: SliceKey,
        card_number: String,
    },

    /// The bundled filters disagree with the values derived from the
    /// slice's cards.
    #[error("slice {slice} bundles filters that do not match its cards")]
    FilterMismatch { slice: SliceKey },
}
