//! Page and sprite fetch services.
//!
//! A page fetch is two stages joined into one result: the list call for one
//! page of summaries, then a concurrent fan-out of per-record detail calls.
//! `try_join_all` gives fail-fast semantics - the first detail error fails
//! the whole page, and the controller commits all records or none.

use futures_util::future::try_join_all;
use iced::widget::image;
use tracing::warn;

use dex_api::{ApiClient, ApiError};
use dex_core::{FetchRequest, PageOutcome};
use dex_model::Record;

/// Fetch one full page of records.
///
/// `dex_limit` caps the catalog at the first N entries of the national
/// ordering; the server's list endpoint covers far more, so the count and
/// cursor it returns are clamped here before the controller sees them.
pub async fn load_page(
    client: ApiClient,
    request: FetchRequest,
    dex_limit: u32,
) -> Result<(Vec<Record>, PageOutcome), ApiError> {
    // The last page may be short of page_size.
    let limit = request.limit.min(dex_limit.saturating_sub(request.offset));
    if limit == 0 {
        return Ok((
            Vec::new(),
            PageOutcome {
                next_offset: None,
                total_count: Some(dex_limit),
            },
        ));
    }

    let page = client.list_page(request.offset, limit).await?;

    let outcome = PageOutcome {
        next_offset: page.next_offset().filter(|&offset| offset < dex_limit),
        total_count: Some(page.count.min(dex_limit)),
    };

    let fetches = page
        .results
        .iter()
        .map(|summary| client.get_by_name(&summary.name));
    let records = try_join_all(fetches).await?;

    Ok((records, outcome))
}

/// Fetch and decode one sprite image.
///
/// Failures degrade to `None` - the card keeps its placeholder and the
/// catalog stays usable.
pub async fn load_sprite(client: ApiClient, url: String) -> Option<image::Handle> {
    match client.fetch_bytes(&url).await {
        Ok(bytes) => Some(image::Handle::from_bytes(bytes)),
        Err(err) => {
            warn!(%err, url, "Sprite fetch failed");
            None
        }
    }
}
