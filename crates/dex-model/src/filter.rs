//! The filter/search engine.
//!
//! [`visible`] is a pure function from loaded records and the current
//! [`FilterState`] to the visible subset. It preserves input order and never
//! re-sorts; ranking and fuzzy matching are out of scope.

use std::collections::BTreeSet;

use crate::record::Record;
use crate::type_tag::TypeTag;

/// Current search text and selected category tags.
///
/// Reset only by explicit user action, never implicitly on page changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Free-text query, matched case-insensitively against record names.
    pub query: String,
    /// Selected tags; a record must carry every one of them (AND semantics).
    pub selected_types: BTreeSet<TypeTag>,
}

impl FilterState {
    /// Replace the query text.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    /// Clear the query text.
    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    /// Toggle a tag in or out of the selected set.
    pub fn toggle_type(&mut self, tag: TypeTag) {
        if !self.selected_types.remove(&tag) {
            self.selected_types.insert(tag);
        }
    }

    /// Whether the filter lets every record through.
    pub fn is_empty(&self) -> bool {
        self.query.is_empty() && self.selected_types.is_empty()
    }

    /// Whether a single record passes the filter.
    pub fn matches(&self, record: &Record) -> bool {
        let query_ok = self.query.is_empty()
            || record
                .name
                .to_lowercase()
                .contains(&self.query.to_lowercase());

        let types_ok = self
            .selected_types
            .iter()
            .all(|tag| record.has_tag(tag.as_str()));

        query_ok && types_ok
    }
}

/// Compute the visible subset of `records` under `filter`.
///
/// The result is an order-preserving subsequence of the input.
pub fn visible<'a>(records: &'a [Record], filter: &FilterState) -> Vec<&'a Record> {
    records.iter().filter(|r| filter.matches(r)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn record(id: u32, name: &str, tags: &[&str]) -> Record {
        let json = format!(
            r#"{{"id": {id}, "name": "{name}", "types": [{}]}}"#,
            tags.iter()
                .enumerate()
                .map(|(i, t)| format!(
                    r#"{{"slot": {}, "type": {{"name": "{t}", "url": ""}}}}"#,
                    i + 1
                ))
                .collect::<Vec<_>>()
                .join(",")
        );
        serde_json::from_str(&json).unwrap()
    }

    fn kanto_sample() -> Vec<Record> {
        vec![
            record(1, "bulbasaur", &["grass", "poison"]),
            record(4, "charmander", &["fire"]),
            record(6, "charizard", &["fire", "flying"]),
            record(7, "squirtle", &["water"]),
            record(25, "pikachu", &["electric"]),
        ]
    }

    #[test]
    fn empty_filter_passes_everything() {
        let records = kanto_sample();
        let filter = FilterState::default();
        assert_eq!(visible(&records, &filter).len(), records.len());
    }

    #[test]
    fn query_is_case_insensitive_substring() {
        let records = kanto_sample();
        let mut filter = FilterState::default();
        filter.set_query("CHAR");
        let names: Vec<&str> = visible(&records, &filter)
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, ["charmander", "charizard"]);
    }

    #[test]
    fn selected_tags_use_and_semantics() {
        let records = kanto_sample();
        let mut filter = FilterState::default();
        filter.toggle_type(TypeTag::Fire);
        filter.toggle_type(TypeTag::Flying);

        // Charmander is {fire} only and must be excluded.
        let names: Vec<&str> = visible(&records, &filter)
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, ["charizard"]);

        // With {fire} alone both fire records pass.
        filter.toggle_type(TypeTag::Flying);
        assert_eq!(visible(&records, &filter).len(), 2);
    }

    #[test]
    fn query_and_tags_compose() {
        let records = kanto_sample();
        let mut filter = FilterState::default();
        filter.set_query("char");
        filter.toggle_type(TypeTag::Flying);
        let names: Vec<&str> = visible(&records, &filter)
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, ["charizard"]);
    }

    #[test]
    fn is_empty_tracks_query_and_selection() {
        let mut filter = FilterState::default();
        assert!(filter.is_empty());

        filter.set_query("pika");
        assert!(!filter.is_empty());
        filter.clear_query();
        assert!(filter.is_empty());

        filter.toggle_type(TypeTag::Electric);
        assert!(!filter.is_empty());
    }

    #[test]
    fn toggle_is_an_involution() {
        let mut filter = FilterState::default();
        filter.toggle_type(TypeTag::Ghost);
        assert!(filter.selected_types.contains(&TypeTag::Ghost));
        filter.toggle_type(TypeTag::Ghost);
        assert!(filter.selected_types.is_empty());
    }

    // Property: visible() yields an order-preserving subsequence, and
    // filtering its own output again changes nothing.
    proptest! {
        #[test]
        fn visible_is_an_idempotent_subsequence(
            ids in proptest::collection::vec(1u32..1000, 0..30),
            query in "[a-z]{0,4}",
        ) {
            let names = ["bulbasaur", "charmander", "squirtle", "pikachu", "eevee"];
            let records: Vec<Record> = ids
                .iter()
                .enumerate()
                .map(|(i, id)| record(*id, names[i % names.len()], &["normal"]))
                .collect();

            let mut filter = FilterState::default();
            filter.set_query(query);

            let first = visible(&records, &filter);

            // Subsequence: every element appears in the input, in input order.
            let mut cursor = 0;
            for item in &first {
                let pos = records[cursor..]
                    .iter()
                    .position(|r| std::ptr::eq(r, *item))
                    .expect("output record missing from input tail");
                cursor += pos + 1;
            }

            // Idempotence: re-filtering the output is a no-op.
            let owned: Vec<Record> = first.iter().map(|r| (*r).clone()).collect();
            let second = visible(&owned, &filter);
            prop_assert_eq!(second.len(), owned.len());
        }
    }
}
