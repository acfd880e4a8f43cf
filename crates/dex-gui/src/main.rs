//! Pokédex Desktop - catalog viewer.
//!
//! A desktop viewer for the public creature-data API: paginated catalog,
//! client-side search and type filtering, favorites, and a detail overlay.
//!
//! Built with Iced 0.14.0 using the Elm architecture (State, Message,
//! Update, View).

mod app;
mod handler;
mod message;
mod service;
mod state;
mod theme;
mod view;

use app::App;
use iced::Size;
use iced::window;

/// Application entry point.
pub fn main() -> iced::Result {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    tracing::info!("Starting Pokédex Desktop");

    // Run the Iced application using the builder pattern
    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .subscription(App::subscription)
        .font(iced_fonts::LUCIDE_FONT_BYTES)
        .window(window::Settings {
            size: Size::new(1100.0, 780.0),
            min_size: Some(Size::new(860.0, 600.0)),
            ..Default::default()
        })
        .run()
}
