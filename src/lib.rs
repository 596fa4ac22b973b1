//! # op-card-data
//!
//! Bundled One Piece Card Game card data with typed access.
//!
//! The crate embeds a static snapshot of card data (card attributes plus
//! filter metadata) and exposes it as an owned, immutable [`Dataset`]
//! with three slices: `all` (combined), `en` (English) and `jp`
//! (Japanese). Every slice is a [`CardSet`] of cards plus the
//! distinct-value [`Filters`] for its filterable fields.
//!
//! ## Design
//!
//! - **Explicit initialization**: [`Dataset::load`] parses the embedded
//!   JSON once and returns an owned value. There is no global state;
//!   pass the dataset to consumers by reference.
//!
//! - **Load-or-fail**: a malformed bundle fails the whole load with a
//!   [`LoadError`]. No partial or degraded dataset is ever returned.
//!
//! - **Immutable after load**: all access is read-only lookup against
//!   the assembled slices; nothing is recomputed.
//!
//! ## Example
//!
//! ```
//! use op_card_data::{Dataset, SliceKey};
//!
//! let dataset = Dataset::load().expect("bundled data is well-formed");
//!
//! let en = dataset.slice(SliceKey::En);
//! assert_eq!(en.cards.len(), en.len());
//! assert!(en.filters.colors.contains(&"Red".to_string()));
//! ```

pub mod cards;
pub mod dataset;
pub mod error;
pub mod filters;

pub use crate::cards::{sort_cards, Card};
pub use crate::dataset::{CardSet, Dataset, SliceKey};
pub use crate::error::LoadError;
pub use crate::filters::Filters;
