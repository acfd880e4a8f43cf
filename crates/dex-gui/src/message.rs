//! Message hierarchy for the Elm-style architecture.
//!
//! All user interactions and background-task results flow through these
//! types. Fetch results carry the generation stamp of the request that
//! produced them so the collection controller can discard superseded
//! results.

use iced::keyboard;
use iced::widget::image;

use dex_api::ApiError;
use dex_core::{PageOutcome, PaginationMode};
use dex_model::{Record, TypeTag};

/// Root message enum for the application.
#[derive(Debug, Clone)]
pub enum Message {
    /// Catalog view messages (paging, filtering, favorites, detail)
    Catalog(CatalogMessage),

    /// Keyboard event
    KeyPressed(keyboard::Key, keyboard::Modifiers),

    /// Toast auto-dismiss timer fired, or the dismiss button was clicked
    ToastDismissed,

    /// No operation - used for ignored events
    Noop,
}

/// Messages for the catalog view.
#[derive(Debug, Clone)]
pub enum CatalogMessage {
    // =========================================================================
    // Filtering
    // =========================================================================
    /// Search query text changed
    QueryChanged(String),

    /// Clear-search button clicked
    QueryCleared,

    /// A type filter chip was toggled
    TypeToggled(TypeTag),

    // =========================================================================
    // Paging
    // =========================================================================
    /// A numbered page was requested (replace mode)
    PageRequested(u32),

    /// Next-page button clicked
    NextPage,

    /// Previous-page button clicked
    PrevPage,

    /// Load-more button clicked (accumulate mode)
    LoadMore,

    /// Retry button clicked after a failed fetch
    Retry,

    /// The pagination mode selector changed
    PaginationModeSelected(PaginationMode),

    // =========================================================================
    // Favorites and detail
    // =========================================================================
    /// Favorite heart toggled on a card or in the detail overlay
    FavoriteToggled(u32),

    /// A card was clicked, opening the detail overlay
    RecordSelected(u32),

    /// The detail overlay was closed
    DetailClosed,

    /// Light/dark theme toggle clicked
    ThemeToggled,

    // =========================================================================
    // Background task results
    // =========================================================================
    /// A page fetch completed: the list call plus the per-record detail
    /// fan-out, joined into one result
    PageLoaded {
        generation: u64,
        result: Result<(Vec<Record>, PageOutcome), ApiError>,
    },

    /// A sprite image finished loading; `None` means the fetch failed and
    /// the card keeps its placeholder
    SpriteLoaded {
        id: u32,
        handle: Option<image::Handle>,
    },
}
