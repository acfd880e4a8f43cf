//! Background task services.
//!
//! Async functions run via `Task::perform`. Each returns a plain value; the
//! handler layer maps it into a [`crate::message::Message`].

pub mod fetch;
