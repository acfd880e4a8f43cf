//! Domain model for Pokédex Desktop.
//!
//! This crate holds the data types shared by the API client, the collection
//! controller, and the GUI:
//!
//! - [`Record`] - one catalog entry, deserialized directly from the detail
//!   endpoint and never mutated after creation
//! - [`TypeTag`] - the known category-tag vocabulary used by the filter bar
//! - [`FilterState`] + [`filter::visible`] - the pure filter/search engine
//!
//! The wire shape of [`Record`] mirrors the upstream JSON exactly (nested
//! `types[].type.name`, `stats[].stat.name`, `sprites.other` and so on) so
//! the types stay compatible with the public data source.

pub mod filter;
pub mod record;
pub mod type_tag;

pub use filter::FilterState;
pub use record::{AbilitySlot, NamedResource, Record, Sprites, StatEntry, TypeSlot};
pub use type_tag::TypeTag;
