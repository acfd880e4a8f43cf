//! Catalog message handler.
//!
//! Every catalog interaction lands here. Paging intents go through the
//! collection controller, which either hands back a [`FetchRequest`] to run
//! as a background task or refuses because a fetch is already in flight.
//! Fetch results come back stamped with their generation; the controller
//! decides whether they still apply.

use iced::Task;
use tracing::{info, warn};

use dex_core::{CollectionState, FetchRequest, PaginationMode};

use super::MessageHandler;
use crate::message::{CatalogMessage, Message};
use crate::service::fetch;
use crate::state::{AppState, Toast};

/// Handler for [`CatalogMessage`].
pub struct CatalogHandler;

impl MessageHandler<CatalogMessage> for CatalogHandler {
    fn handle(&self, state: &mut AppState, msg: CatalogMessage) -> Task<Message> {
        match msg {
            // =================================================================
            // Filtering - synchronous, never fetches
            // =================================================================
            CatalogMessage::QueryChanged(text) => {
                state.collection.set_query(text);
                Task::none()
            }

            CatalogMessage::QueryCleared => {
                state.collection.clear_query();
                Task::none()
            }

            CatalogMessage::TypeToggled(tag) => {
                state.collection.toggle_type(tag);
                Task::none()
            }

            // =================================================================
            // Paging
            // =================================================================
            CatalogMessage::PageRequested(target) => {
                let request = state.collection.request_page(target);
                spawn_page_fetch(state, request)
            }

            CatalogMessage::NextPage => {
                let request = state.collection.request_next();
                spawn_page_fetch(state, request)
            }

            CatalogMessage::PrevPage => {
                let request = state.collection.request_prev();
                spawn_page_fetch(state, request)
            }

            CatalogMessage::LoadMore => {
                let request = state.collection.request_more();
                spawn_page_fetch(state, request)
            }

            CatalogMessage::Retry => {
                let request = state.collection.retry();
                spawn_page_fetch(state, request)
            }

            CatalogMessage::PaginationModeSelected(mode) => {
                handle_mode_change(state, mode)
            }

            // =================================================================
            // Favorites and detail
            // =================================================================
            CatalogMessage::FavoriteToggled(id) => {
                let now_favorite = state.collection.toggle_favorite(id);
                info!(id, now_favorite, "Toggled favorite");

                // The in-memory toggle stands even if the write fails.
                if let Err(err) = state.store.save(state.collection.favorites()) {
                    warn!(%err, "Failed to persist favorites");
                    state.show_toast(Toast::warning("Favorites could not be saved to disk"));
                }
                Task::none()
            }

            CatalogMessage::RecordSelected(id) => {
                state.selected = Some(id);
                Task::none()
            }

            CatalogMessage::DetailClosed => {
                state.selected = None;
                Task::none()
            }

            CatalogMessage::ThemeToggled => {
                state.settings.display.theme = state.settings.display.theme.toggled();
                if let Err(err) = state.settings.save() {
                    warn!(%err, "Failed to persist settings");
                    state.show_toast(Toast::error("Settings could not be saved to disk"));
                }
                Task::none()
            }

            // =================================================================
            // Background task results
            // =================================================================
            CatalogMessage::PageLoaded { generation, result } => match result {
                Ok((records, outcome)) => {
                    if state.collection.commit_page(generation, records, outcome) {
                        spawn_sprite_fetches(state)
                    } else {
                        Task::none()
                    }
                }
                Err(error) => {
                    warn!(%error, generation, "Page fetch failed");
                    state.collection.fail(generation, error);
                    Task::none()
                }
            },

            CatalogMessage::SpriteLoaded { id, handle } => {
                state.sprites_in_flight.remove(&id);
                if let Some(handle) = handle {
                    state.sprites.insert(id, handle);
                }
                Task::none()
            }
        }
    }
}

/// Run a fetch request as a background task, if the controller issued one.
fn spawn_page_fetch(state: &AppState, request: Option<FetchRequest>) -> Task<Message> {
    let Some(request) = request else {
        return Task::none();
    };

    let client = state.client.clone();
    let dex_limit = state.settings.catalog.dex_limit;
    let generation = request.generation;

    Task::perform(
        async move { fetch::load_page(client, request, dex_limit).await },
        move |result| Message::Catalog(CatalogMessage::PageLoaded { generation, result }),
    )
}

/// Start sprite fetches for loaded records that have none yet.
fn spawn_sprite_fetches(state: &mut AppState) -> Task<Message> {
    let mut tasks = Vec::new();

    for record in state.collection.records() {
        let id = record.id;
        if state.sprites.contains_key(&id) || state.sprites_in_flight.contains(&id) {
            continue;
        }
        let Some(url) = record.sprite_url() else {
            continue;
        };

        state.sprites_in_flight.insert(id);
        let client = state.client.clone();
        let url = url.to_string();
        tasks.push(Task::perform(
            async move { fetch::load_sprite(client, url).await },
            move |handle| Message::Catalog(CatalogMessage::SpriteLoaded { id, handle }),
        ));
    }

    Task::batch(tasks)
}

/// Switch pagination strategy.
///
/// The catalog restarts under the new mode: fresh record list, page one.
/// Filter state and favorites carry over. Refused while a fetch is in
/// flight, like every other paging control.
fn handle_mode_change(state: &mut AppState, mode: PaginationMode) -> Task<Message> {
    if state.collection.is_in_flight() || state.collection.mode() == mode {
        return Task::none();
    }

    info!(mode = mode.label(), "Switching pagination mode");

    let favorites = state.collection.favorites().clone();
    let filter = state.collection.filter.clone();

    let mut collection = CollectionState::new(
        mode,
        state.settings.catalog.page_size,
        Some(state.settings.catalog.dex_limit),
    );
    collection.set_favorites(favorites);
    collection.filter = filter;
    state.collection = collection;

    state.settings.catalog.pagination_mode = mode;
    if let Err(err) = state.settings.save() {
        warn!(%err, "Failed to persist settings");
        state.show_toast(Toast::error("Settings could not be saved to disk"));
    }

    let request = state.collection.initial_request();
    spawn_page_fetch(state, request)
}
