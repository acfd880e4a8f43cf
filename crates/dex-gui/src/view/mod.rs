//! View module.
//!
//! Views are pure functions that render UI from [`crate::state::AppState`].
//!
//! - `catalog.rs` - the main screen: toolbar, type filter, card grid, paging
//! - `card.rs` - a single record card
//! - `detail.rs` - modal detail overlay
//! - `toast.rs` - transient notification

pub mod card;
pub mod catalog;
pub mod detail;
pub mod toast;

pub use catalog::view_catalog;
