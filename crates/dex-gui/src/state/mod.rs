//! Application state.
//!
//! [`AppState`] is the single root of everything the views render. The
//! collection controller in `dex-core` owns records, paging, filtering, and
//! favorites; this layer adds what only the GUI cares about: the sprite
//! cache, the detail-overlay selection, settings, and the toast.

mod settings;

use std::collections::{BTreeSet, HashMap};

use iced::widget::image;

use dex_api::ApiClient;
use dex_core::{CollectionState, FavoritesStore};

pub use settings::{CatalogSettings, DisplaySettings, Settings, ThemeMode};

/// All application state.
pub struct AppState {
    /// Records, paging, filter, and favorites.
    pub collection: CollectionState,

    /// API client, cloned into background fetch tasks.
    pub client: ApiClient,

    /// Favorites persistence.
    pub store: FavoritesStore,

    /// Persisted user preferences.
    pub settings: Settings,

    /// Decoded sprite images by record identifier.
    pub sprites: HashMap<u32, image::Handle>,

    /// Sprite fetches currently outstanding, so a record is requested once.
    pub sprites_in_flight: BTreeSet<u32>,

    /// Record shown in the detail overlay, if any.
    pub selected: Option<u32>,

    /// Transient notification, if any.
    pub toast: Option<Toast>,
}

impl AppState {
    /// Build the initial state from loaded settings.
    ///
    /// The API client is constructed here; if that fails (TLS backend
    /// initialization, effectively never) the error surfaces as a toast and
    /// a default client cannot exist, so construction returns the error.
    pub fn with_settings(settings: Settings) -> Result<Self, dex_api::ApiError> {
        let client = ApiClient::new()?;
        let store = FavoritesStore::from_project_dirs();

        let mut collection = CollectionState::new(
            settings.catalog.pagination_mode,
            settings.catalog.page_size,
            Some(settings.catalog.dex_limit),
        );
        collection.set_favorites(store.load());

        Ok(Self {
            collection,
            client,
            store,
            settings,
            sprites: HashMap::new(),
            sprites_in_flight: BTreeSet::new(),
            selected: None,
            toast: None,
        })
    }

    /// Sprite handle for a record, if it has loaded.
    pub fn sprite(&self, id: u32) -> Option<&image::Handle> {
        self.sprites.get(&id)
    }

    /// Show a toast, replacing any current one.
    pub fn show_toast(&mut self, toast: Toast) {
        self.toast = Some(toast);
    }
}

// =============================================================================
// TOAST
// =============================================================================

/// Transient notification shown at the bottom of the window.
#[derive(Debug, Clone)]
pub struct Toast {
    /// The message to display.
    pub message: String,
    /// Determines the icon and accent color.
    pub kind: ToastKind,
}

/// Type of toast notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    /// Something went wrong but the app carries on.
    Warning,
    /// Something failed outright.
    Error,
}

impl Toast {
    /// A warning toast.
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Warning,
        }
    }

    /// An error toast.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_constructors_carry_their_severity() {
        assert_eq!(Toast::warning("disk full").kind, ToastKind::Warning);
        assert_eq!(Toast::error("disk full").kind, ToastKind::Error);
    }

    #[test]
    fn show_toast_replaces_the_current_one() {
        let mut state = AppState::with_settings(Settings::default()).unwrap();

        state.show_toast(Toast::warning("first"));
        state.show_toast(Toast::error("second"));

        let toast = state.toast.unwrap();
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(toast.message, "second");
    }
}
