//! Async client for the public creature-data API.
//!
//! Exposes the two operations the application needs:
//!
//! - [`ApiClient::list_page`] - one page of `{name, url}` summaries plus the
//!   server's pagination cursor and total count
//! - [`ApiClient::get_by_name`] / [`ApiClient::get_by_id`] - one full
//!   [`dex_model::Record`]
//!
//! The client is deliberately thin: no caching, no retries, no backoff. The
//! collection controller decides what to do with failures; this crate only
//! classifies them into [`ApiError`].
//!
//! Functions are async and integrate with Iced via `Task::perform`, the same
//! shape the rest of the workspace uses for one-shot background work.

pub mod client;
pub mod error;
pub mod types;

pub use client::{API_BASE_URL, ApiClient};
pub use error::{ApiError, Result};
pub use types::{PageList, RecordSummary};
