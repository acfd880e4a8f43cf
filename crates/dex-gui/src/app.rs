//! Main application module.
//!
//! Implements the Iced 0.14.0 application using the builder pattern. The
//! architecture follows the Elm pattern: State → Message → Update → View.
//!
//! All state changes happen in `update()`; views are pure functions over
//! [`AppState`]. Async work runs through `Task::perform` - no channels, no
//! polling.

use std::time::Duration;

use iced::keyboard;
use iced::{Element, Subscription, Task, Theme, time};

use crate::handler::{CatalogHandler, MessageHandler};
use crate::message::Message;
use crate::state::{AppState, Settings};
use crate::theme::app_theme;
use crate::view::view_catalog;

/// How long a toast stays up before auto-dismissing.
const TOAST_TIMEOUT: Duration = Duration::from_secs(5);

/// Main application struct.
///
/// The root of the Iced application: holds the state and implements the
/// Elm architecture methods.
pub struct App {
    /// All application state.
    pub state: AppState,
}

impl App {
    /// Create a new application instance.
    ///
    /// Called once at startup. Returns the initial state and the first page
    /// fetch as the startup task.
    pub fn new() -> (Self, Task<Message>) {
        // Load settings from disk
        let settings = Settings::load();

        let state = match AppState::with_settings(settings) {
            Ok(state) => state,
            Err(err) => {
                // Without an HTTP client there is no application to run.
                tracing::error!(%err, "Failed to initialize the API client");
                std::process::exit(1);
            }
        };

        let mut app = Self { state };

        let startup = match app.state.collection.initial_request() {
            Some(request) => {
                let client = app.state.client.clone();
                let dex_limit = app.state.settings.catalog.dex_limit;
                let generation = request.generation;
                Task::perform(
                    async move { crate::service::fetch::load_page(client, request, dex_limit).await },
                    move |result| {
                        Message::Catalog(crate::message::CatalogMessage::PageLoaded {
                            generation,
                            result,
                        })
                    },
                )
            }
            None => Task::none(),
        };

        (app, startup)
    }

    /// Window title.
    pub fn title(&self) -> String {
        String::from("Pokédex Desktop")
    }

    /// Update application state in response to a message.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Catalog(msg) => CatalogHandler.handle(&mut self.state, msg),

            Message::KeyPressed(key, _modifiers) => {
                // Escape closes the detail overlay
                if let keyboard::Key::Named(keyboard::key::Named::Escape) = key {
                    self.state.selected = None;
                }
                Task::none()
            }

            Message::ToastDismissed => {
                self.state.toast = None;
                Task::none()
            }

            Message::Noop => Task::none(),
        }
    }

    /// Render the application.
    pub fn view(&self) -> Element<'_, Message> {
        view_catalog(&self.state)
    }

    /// Resolve the active theme from display settings.
    pub fn theme(&self) -> Theme {
        app_theme(self.state.settings.display.theme)
    }

    /// Application subscriptions: global keyboard events, plus the toast
    /// auto-dismiss timer while a toast is visible.
    pub fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([keyboard_subscription(), self.toast_subscription()])
    }

    fn toast_subscription(&self) -> Subscription<Message> {
        if self.state.toast.is_some() {
            time::every(TOAST_TIMEOUT).map(|_| Message::ToastDismissed)
        } else {
            Subscription::none()
        }
    }
}

/// Keyboard event subscription, runs continuously.
fn keyboard_subscription() -> Subscription<Message> {
    keyboard::listen().map(|event| match event {
        keyboard::Event::KeyPressed { key, modifiers, .. } => Message::KeyPressed(key, modifiers),
        _ => Message::Noop,
    })
}
