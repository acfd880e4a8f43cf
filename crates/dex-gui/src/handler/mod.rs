//! Message handler architecture for the Iced-based GUI.
//!
//! Trait-based handler dispatch that keeps message handling out of the main
//! `App` struct. Each handler implements [`MessageHandler`] for one message
//! type; `App::update()` dispatches to it:
//!
//! ```ignore
//! pub fn update(&mut self, message: Message) -> Task<Message> {
//!     match message {
//!         Message::Catalog(msg) => CatalogHandler.handle(&mut self.state, msg),
//!         // ...
//!     }
//! }
//! ```

mod catalog;

use iced::Task;

use crate::message::Message;
use crate::state::AppState;

pub use catalog::CatalogHandler;

/// Trait for handling messages in the Iced architecture.
pub trait MessageHandler<M> {
    /// Handle a message, potentially mutating state and returning a
    /// follow-up task, or `Task::none()` if complete.
    fn handle(&self, state: &mut AppState, msg: M) -> Task<Message>;
}
