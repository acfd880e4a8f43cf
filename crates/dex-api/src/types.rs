//! Wire types for the list endpoint.

use serde::{Deserialize, Serialize};

/// Response of the paged list endpoint:
/// `{count, next, previous, results: [{name, url}]}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageList {
    /// Total number of records upstream.
    pub count: u32,
    /// URL of the next page, or `null` on the last page.
    pub next: Option<String>,
    /// URL of the previous page, or `null` on the first page.
    #[serde(default)]
    pub previous: Option<String>,
    /// Summaries for this page, in upstream order.
    pub results: Vec<RecordSummary>,
}

impl PageList {
    /// Offset of the next page, parsed from the `next` cursor URL.
    ///
    /// Returns `None` on the last page or when the cursor carries no
    /// recognizable `offset` parameter.
    pub fn next_offset(&self) -> Option<u32> {
        let next = self.next.as_deref()?;
        let query = next.split_once('?')?.1;
        query
            .split('&')
            .find_map(|pair| pair.strip_prefix("offset="))
            .and_then(|value| value.parse().ok())
    }

    /// Whether the server reports more records past this page.
    pub fn has_more(&self) -> bool {
        self.next.is_some()
    }
}

/// One `{name, url}` entry of a list page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordSummary {
    /// Record name (lowercase).
    pub name: String,
    /// Detail URL for the record.
    #[serde(default)]
    pub url: String,
}
