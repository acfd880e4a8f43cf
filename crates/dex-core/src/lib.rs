//! Collection controller and favorites persistence.
//!
//! [`CollectionState`] is the stateful core of the application: it owns the
//! loaded records, the pagination window, the load/error tri-state, the
//! filter state, and the favorites set. All transitions happen through its
//! methods; views read from it and forward user intents back as method
//! calls. Network work itself lives elsewhere - the controller hands out
//! [`FetchRequest`]s and consumes their results, so every transition is
//! synchronous and unit-testable.
//!
//! Overlap between fetches is prevented twice over: requests are refused
//! while one is in flight, and each request carries a generation stamp that
//! [`CollectionState::commit_page`] checks before merging, so a superseded
//! result is discarded rather than applied.
//!
//! [`FavoritesStore`] persists the favorites set as a JSON array of record
//! identifiers in the platform data directory.

mod collection;
mod store;

pub use collection::{
    CollectionState, FetchRequest, LoadState, PageOutcome, PageWindow, PaginationMode,
};
pub use store::{FavoritesStore, PersistenceError};
