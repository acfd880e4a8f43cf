//! The collection controller state machine.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use dex_api::ApiError;
use dex_model::{FilterState, Record, TypeTag, filter};

// =============================================================================
// PAGINATION
// =============================================================================

/// How page fetches combine with the in-memory record list.
///
/// Chosen once at controller construction; the view derives its paging
/// controls from it instead of branching ad hoc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaginationMode {
    /// Each page fetch overwrites the visible set with exactly one page.
    /// Pairs with numbered page controls and a known total count.
    #[default]
    Replace,
    /// Each fetch appends a page to a growing list. Pairs with a single
    /// "load more" control and the server's pagination cursor.
    Accumulate,
}

impl PaginationMode {
    /// Display label for the settings UI.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Replace => "Numbered pages",
            Self::Accumulate => "Load more",
        }
    }

    /// Both modes, for the settings picker.
    pub const ALL: [PaginationMode; 2] = [Self::Replace, Self::Accumulate];
}

/// The current pagination cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// Committed page number, 1-based (replace mode).
    pub page: u32,
    /// Records requested per fetch.
    pub page_size: u32,
    /// Offset of the next contiguous fetch (accumulate mode).
    pub next_offset: u32,
    /// Total record count, once known.
    pub total_count: Option<u32>,
    /// Whether the server reports more records (accumulate mode).
    pub has_more: bool,
}

impl PageWindow {
    /// Number of pages, once the total is known. Never less than one.
    pub fn total_pages(&self) -> Option<u32> {
        self.total_count
            .map(|total| total.div_ceil(self.page_size).max(1))
    }
}

/// One fetch the controller has asked for.
///
/// The generation stamp identifies the fetch across the async boundary:
/// results carrying a stale generation are discarded, never merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchRequest {
    /// Records already consumed before this page.
    pub offset: u32,
    /// Items requested.
    pub limit: u32,
    /// Target page number (replace mode; informational otherwise).
    pub page: u32,
    /// Generation stamp checked at completion time.
    pub generation: u64,
}

/// Server-side pagination facts returned with a committed page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageOutcome {
    /// Offset of the page after this one, or `None` on the last page.
    pub next_offset: Option<u32>,
    /// Total record count reported by the server.
    pub total_count: Option<u32>,
}

// =============================================================================
// LOAD STATE
// =============================================================================

/// Tri-state of the current fetch operation.
///
/// The failed variant keeps the request so a retry re-issues the exact same
/// offset and limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// Nothing in flight.
    Idle,
    /// A fetch is outstanding; paging controls are disabled.
    InFlight {
        /// The outstanding request.
        request: FetchRequest,
    },
    /// The last fetch failed; records and page window are untouched.
    Failed {
        /// The request that failed, re-issued verbatim by `retry`.
        request: FetchRequest,
        /// What went wrong, undifferentiated for display.
        error: ApiError,
    },
}

// =============================================================================
// COLLECTION STATE
// =============================================================================

/// The stateful core: loaded records, pagination, load state, filter state,
/// and the favorites set.
#[derive(Debug, Clone)]
pub struct CollectionState {
    mode: PaginationMode,
    records: Vec<Record>,
    window: PageWindow,
    load: LoadState,
    /// Current search text and selected tags. Public: pure state, no
    /// invariants beyond its own.
    pub filter: FilterState,
    favorites: BTreeSet<u32>,
    generation: u64,
}

impl CollectionState {
    /// Create a controller.
    ///
    /// `total_hint` seeds the total count before the first response arrives
    /// (replace mode clamps page numbers against it); the server's count
    /// overrides it on the first commit.
    pub fn new(mode: PaginationMode, page_size: u32, total_hint: Option<u32>) -> Self {
        Self {
            mode,
            records: Vec::new(),
            window: PageWindow {
                page: 1,
                page_size: page_size.max(1),
                next_offset: 0,
                total_count: total_hint,
                has_more: true,
            },
            load: LoadState::Idle,
            filter: FilterState::default(),
            favorites: BTreeSet::new(),
            generation: 0,
        }
    }

    // ========================================================================
    // Read access
    // ========================================================================

    /// All loaded records, ascending by identifier.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// The pagination strategy chosen at construction.
    pub fn mode(&self) -> PaginationMode {
        self.mode
    }

    /// The current pagination cursor.
    pub fn window(&self) -> &PageWindow {
        &self.window
    }

    /// The current load state.
    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    /// Whether a fetch is outstanding.
    pub fn is_in_flight(&self) -> bool {
        matches!(self.load, LoadState::InFlight { .. })
    }

    /// Look up a loaded record by identifier.
    pub fn find(&self, id: u32) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    /// The visible subset under the current filter - derived on every read,
    /// never stored.
    pub fn visible(&self) -> Vec<&Record> {
        filter::visible(&self.records, &self.filter)
    }

    // ========================================================================
    // Fetch lifecycle
    // ========================================================================

    /// The first fetch after startup, regardless of mode.
    pub fn initial_request(&mut self) -> Option<FetchRequest> {
        match self.mode {
            PaginationMode::Replace => self.request_page(1),
            PaginationMode::Accumulate => self.request_more(),
        }
    }

    /// Request an absolute page (replace mode).
    ///
    /// The target is clamped to `[1, total_pages]`. Returns `None` while a
    /// fetch is in flight.
    pub fn request_page(&mut self, target: u32) -> Option<FetchRequest> {
        if self.is_in_flight() {
            return None;
        }

        let page = match self.window.total_pages() {
            Some(total) => target.clamp(1, total),
            None => target.max(1),
        };

        let request = FetchRequest {
            offset: (page - 1) * self.window.page_size,
            limit: self.window.page_size,
            page,
            generation: self.next_generation(),
        };
        self.load = LoadState::InFlight { request };
        Some(request)
    }

    /// Request the page after the committed one (replace mode).
    pub fn request_next(&mut self) -> Option<FetchRequest> {
        self.request_page(self.window.page.saturating_add(1))
    }

    /// Request the page before the committed one (replace mode).
    pub fn request_prev(&mut self) -> Option<FetchRequest> {
        self.request_page(self.window.page.saturating_sub(1))
    }

    /// Request the next contiguous page (accumulate mode).
    ///
    /// Returns `None` while in flight or once the server reports no more
    /// records.
    pub fn request_more(&mut self) -> Option<FetchRequest> {
        if self.is_in_flight() || !self.window.has_more {
            return None;
        }

        let request = FetchRequest {
            offset: self.window.next_offset,
            limit: self.window.page_size,
            page: self.window.page,
            generation: self.next_generation(),
        };
        self.load = LoadState::InFlight { request };
        Some(request)
    }

    /// Re-issue the failed fetch. Valid only from the failed state; the
    /// offset and limit are identical, only the generation is fresh.
    pub fn retry(&mut self) -> Option<FetchRequest> {
        let LoadState::Failed { request, .. } = &self.load else {
            return None;
        };

        let request = FetchRequest {
            generation: self.generation + 1,
            ..*request
        };
        self.generation = request.generation;
        self.load = LoadState::InFlight { request };
        Some(request)
    }

    /// Merge a completed page.
    ///
    /// Ignored (returns `false`) unless `generation` matches the in-flight
    /// request, so superseded results are discarded. The merge is atomic:
    /// callers hand over the full detail list or nothing.
    pub fn commit_page(
        &mut self,
        generation: u64,
        mut details: Vec<Record>,
        outcome: PageOutcome,
    ) -> bool {
        let LoadState::InFlight { request } = &self.load else {
            debug!(generation, "Discarding page result: no fetch in flight");
            return false;
        };
        let request = *request;
        if request.generation != generation {
            debug!(
                generation,
                current = request.generation,
                "Discarding superseded page result"
            );
            return false;
        }

        details.sort();
        let fetched = details.len() as u32;

        match self.mode {
            PaginationMode::Replace => {
                self.records = details;
                self.window.page = request.page;
            }
            PaginationMode::Accumulate => {
                self.records.append(&mut details);
                self.records.sort();
                self.records.dedup();
                self.window.next_offset = outcome
                    .next_offset
                    .unwrap_or(request.offset.saturating_add(fetched));
            }
        }

        if let Some(total) = outcome.total_count {
            self.window.total_count = Some(total);
        }
        self.window.has_more = match self.mode {
            PaginationMode::Replace => self
                .window
                .total_pages()
                .is_none_or(|total| self.window.page < total),
            PaginationMode::Accumulate => outcome.next_offset.is_some(),
        };

        self.load = LoadState::Idle;
        true
    }

    /// Record a failed fetch. Records and page window stay untouched; only
    /// the load state transitions.
    pub fn fail(&mut self, generation: u64, error: ApiError) -> bool {
        let LoadState::InFlight { request } = &self.load else {
            return false;
        };
        let request = *request;
        if request.generation != generation {
            debug!(generation, "Discarding superseded fetch failure");
            return false;
        }

        self.load = LoadState::Failed { request, error };
        true
    }

    fn next_generation(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    // ========================================================================
    // Favorites
    // ========================================================================

    /// The favorites set.
    pub fn favorites(&self) -> &BTreeSet<u32> {
        &self.favorites
    }

    /// Replace the favorites set (startup load from the store).
    pub fn set_favorites(&mut self, favorites: BTreeSet<u32>) {
        self.favorites = favorites;
    }

    /// Symmetric-difference update with one identifier. Returns whether the
    /// record is favorited afterwards. The caller persists the set.
    pub fn toggle_favorite(&mut self, id: u32) -> bool {
        if self.favorites.remove(&id) {
            false
        } else {
            self.favorites.insert(id);
            true
        }
    }

    /// Whether the identifier is favorited.
    pub fn is_favorite(&self, id: u32) -> bool {
        self.favorites.contains(&id)
    }

    // ========================================================================
    // Filter
    // ========================================================================

    /// Replace the search query. Never triggers a fetch.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.filter.set_query(text);
    }

    /// Clear the search query, leaving the type selection alone.
    pub fn clear_query(&mut self) {
        self.filter.clear_query();
    }

    /// Toggle a tag in the selected set. Never triggers a fetch.
    pub fn toggle_type(&mut self, tag: TypeTag) {
        self.filter.toggle_type(tag);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dex_model::record::{NamedResource, Sprites, TypeSlot};

    fn record(id: u32, name: &str, tags: &[&str]) -> Record {
        Record {
            id,
            name: name.to_string(),
            height: 7,
            weight: 69,
            base_experience: Some(64),
            types: tags
                .iter()
                .enumerate()
                .map(|(i, t)| TypeSlot {
                    slot: i as u32 + 1,
                    kind: NamedResource {
                        name: (*t).to_string(),
                        url: String::new(),
                    },
                })
                .collect(),
            stats: Vec::new(),
            abilities: Vec::new(),
            sprites: Sprites::default(),
        }
    }

    fn first_page() -> Vec<Record> {
        vec![
            record(2, "ivysaur", &["grass", "poison"]),
            record(1, "bulbasaur", &["grass", "poison"]),
        ]
    }

    // -------------------------------------------------------------------------
    // Replace mode
    // -------------------------------------------------------------------------

    #[test]
    fn first_page_commit_sorts_and_goes_idle() {
        let mut state = CollectionState::new(PaginationMode::Replace, 2, Some(151));
        let request = state.initial_request().expect("first fetch");
        assert_eq!(request.offset, 0);
        assert!(state.is_in_flight());

        let applied = state.commit_page(
            request.generation,
            first_page(),
            PageOutcome {
                next_offset: Some(2),
                total_count: Some(151),
            },
        );
        assert!(applied);
        let ids: Vec<u32> = state.records().iter().map(|r| r.id).collect();
        assert_eq!(ids, [1, 2]);
        assert_eq!(*state.load_state(), LoadState::Idle);
        assert!(state.window().has_more);
    }

    #[test]
    fn replace_commit_discards_the_previous_page_entirely() {
        let mut state = CollectionState::new(PaginationMode::Replace, 2, Some(151));
        let request = state.request_page(1).unwrap();
        state.commit_page(request.generation, first_page(), PageOutcome::default());

        let request = state.request_page(2).unwrap();
        assert_eq!(request.offset, 2);
        state.commit_page(
            request.generation,
            vec![record(3, "venusaur", &["grass", "poison"]), record(4, "charmander", &["fire"])],
            PageOutcome::default(),
        );

        let ids: Vec<u32> = state.records().iter().map(|r| r.id).collect();
        assert_eq!(ids, [3, 4]);
        assert_eq!(state.window().page, 2);
    }

    #[test]
    fn page_targets_are_clamped_to_the_known_total() {
        let mut state = CollectionState::new(PaginationMode::Replace, 12, Some(151));
        // ceil(151 / 12) = 13 pages.
        let request = state.request_page(99).unwrap();
        assert_eq!(request.page, 13);
        assert_eq!(request.offset, 144);

        state.fail(request.generation, ApiError::Network("boom".to_string()));
        let request = state.retry().unwrap();
        state.commit_page(request.generation, Vec::new(), PageOutcome::default());

        let request = state.request_page(0).unwrap();
        assert_eq!(request.page, 1);
    }

    #[test]
    fn requests_are_refused_while_in_flight() {
        let mut state = CollectionState::new(PaginationMode::Replace, 12, Some(151));
        let _outstanding = state.request_page(1).unwrap();
        assert!(state.request_page(2).is_none());
        assert!(state.request_next().is_none());
        assert!(state.retry().is_none());
    }

    // -------------------------------------------------------------------------
    // Failure and retry
    // -------------------------------------------------------------------------

    #[test]
    fn failed_fetch_leaves_records_and_window_untouched() {
        let mut state = CollectionState::new(PaginationMode::Replace, 2, Some(151));
        let request = state.request_page(1).unwrap();
        state.commit_page(request.generation, first_page(), PageOutcome::default());
        let before_ids: Vec<u32> = state.records().iter().map(|r| r.id).collect();
        let before_window = *state.window();

        // Detail fetch for "ivysaur" fails -> the whole page fetch fails.
        let request = state.request_page(2).unwrap();
        state.fail(
            request.generation,
            ApiError::Network("connection reset".to_string()),
        );

        let after_ids: Vec<u32> = state.records().iter().map(|r| r.id).collect();
        assert_eq!(before_ids, after_ids);
        assert_eq!(before_window, *state.window());
        assert!(matches!(
            state.load_state(),
            LoadState::Failed {
                error: ApiError::Network(_),
                ..
            }
        ));
    }

    #[test]
    fn retry_reissues_the_same_offset() {
        let mut state = CollectionState::new(PaginationMode::Replace, 12, Some(151));
        let failed = state.request_page(3).unwrap();
        state.fail(failed.generation, ApiError::Decode("bad json".to_string()));

        let retried = state.retry().expect("retry from failed state");
        assert_eq!(retried.offset, failed.offset);
        assert_eq!(retried.limit, failed.limit);
        assert_eq!(retried.page, failed.page);
        assert_ne!(retried.generation, failed.generation);
        assert!(state.is_in_flight());
    }

    #[test]
    fn retry_is_invalid_outside_the_failed_state() {
        let mut state = CollectionState::new(PaginationMode::Replace, 12, Some(151));
        assert!(state.retry().is_none());
    }

    // -------------------------------------------------------------------------
    // Generation discard
    // -------------------------------------------------------------------------

    #[test]
    fn superseded_results_are_discarded_not_merged() {
        let mut state = CollectionState::new(PaginationMode::Replace, 2, Some(151));
        let stale = state.request_page(1).unwrap();
        state.fail(stale.generation, ApiError::Network("timeout".to_string()));
        let fresh = state.retry().unwrap();

        // The stale fetch finally resolves; its result must not be merged.
        assert!(!state.commit_page(stale.generation, first_page(), PageOutcome::default()));
        assert!(state.records().is_empty());
        assert!(state.is_in_flight());

        // The current fetch commits normally.
        assert!(state.commit_page(fresh.generation, first_page(), PageOutcome::default()));
        assert_eq!(state.records().len(), 2);
    }

    #[test]
    fn results_after_idle_are_discarded() {
        let mut state = CollectionState::new(PaginationMode::Replace, 2, Some(151));
        assert!(!state.commit_page(7, first_page(), PageOutcome::default()));
        assert!(!state.fail(7, ApiError::Network("late".to_string())));
    }

    // -------------------------------------------------------------------------
    // Accumulate mode
    // -------------------------------------------------------------------------

    #[test]
    fn accumulate_appends_and_tracks_the_cursor() {
        let mut state = CollectionState::new(PaginationMode::Accumulate, 2, None);
        let request = state.request_more().unwrap();
        assert_eq!(request.offset, 0);
        state.commit_page(
            request.generation,
            first_page(),
            PageOutcome {
                next_offset: Some(2),
                total_count: Some(151),
            },
        );
        assert!(state.window().has_more);
        assert_eq!(state.window().next_offset, 2);

        let request = state.request_more().unwrap();
        assert_eq!(request.offset, 2);
        state.commit_page(
            request.generation,
            vec![record(3, "venusaur", &["grass", "poison"])],
            PageOutcome {
                next_offset: None,
                total_count: Some(151),
            },
        );

        let ids: Vec<u32> = state.records().iter().map(|r| r.id).collect();
        assert_eq!(ids, [1, 2, 3]);
        assert!(!state.window().has_more);
        assert!(state.request_more().is_none());
    }

    #[test]
    fn accumulate_never_duplicates_an_identifier() {
        let mut state = CollectionState::new(PaginationMode::Accumulate, 2, None);
        let request = state.request_more().unwrap();
        state.commit_page(
            request.generation,
            first_page(),
            PageOutcome {
                next_offset: Some(2),
                total_count: None,
            },
        );

        // Overlapping page: ivysaur again plus venusaur.
        let request = state.request_more().unwrap();
        state.commit_page(
            request.generation,
            vec![
                record(2, "ivysaur", &["grass", "poison"]),
                record(3, "venusaur", &["grass", "poison"]),
            ],
            PageOutcome {
                next_offset: Some(4),
                total_count: None,
            },
        );

        let ids: Vec<u32> = state.records().iter().map(|r| r.id).collect();
        assert_eq!(ids, [1, 2, 3]);
    }

    // -------------------------------------------------------------------------
    // Favorites and filter
    // -------------------------------------------------------------------------

    #[test]
    fn double_toggle_restores_the_prior_favorites() {
        let mut state = CollectionState::new(PaginationMode::Replace, 12, Some(151));
        state.set_favorites([4, 7].into_iter().collect());
        let before = state.favorites().clone();

        assert!(state.toggle_favorite(1));
        assert!(state.is_favorite(1));
        assert!(!state.toggle_favorite(1));
        assert_eq!(*state.favorites(), before);
    }

    #[test]
    fn filter_survives_page_changes() {
        let mut state = CollectionState::new(PaginationMode::Replace, 2, Some(151));
        state.set_query("saur");
        state.toggle_type(TypeTag::Grass);

        let request = state.request_page(1).unwrap();
        state.commit_page(request.generation, first_page(), PageOutcome::default());

        assert_eq!(state.filter.query, "saur");
        assert!(state.filter.selected_types.contains(&TypeTag::Grass));
        assert_eq!(state.visible().len(), 2);
    }

    #[test]
    fn visible_is_derived_from_records_and_filter() {
        let mut state = CollectionState::new(PaginationMode::Replace, 2, Some(151));
        let request = state.request_page(1).unwrap();
        state.commit_page(request.generation, first_page(), PageOutcome::default());

        state.set_query("ivy");
        let names: Vec<&str> = state.visible().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["ivysaur"]);

        state.set_query("");
        assert_eq!(state.visible().len(), 2);
    }

    #[test]
    fn clear_query_keeps_the_type_selection() {
        let mut state = CollectionState::new(PaginationMode::Replace, 2, Some(151));
        state.set_query("char");
        state.toggle_type(TypeTag::Poison);

        state.clear_query();
        assert_eq!(state.filter.query, "");
        assert!(state.filter.selected_types.contains(&TypeTag::Poison));
        assert!(!state.filter.is_empty());
    }
}
