//! Card system: identities, category metadata, and the event catalog.
//!
//! ## Key Types
//!
//! - `CardCode`: One of the 52 rank+suit identities
//! - `Category`: Display metadata shared by a suit
//! - `Card`: A drawn identity with its event text resolved
//! - `CardCatalog`: Event text lookup

pub mod catalog;
pub mod definition;

pub use catalog::{requires_tower_check, CardCatalog, TOWER_CHECK_MARKER, UNKNOWN_EVENT};
pub use definition::{Card, CardCode, Category, Rank, Suit};
