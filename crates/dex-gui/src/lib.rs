//! Pokédex Desktop - GUI library.
//!
//! Core application types for the catalog viewer, built with Iced 0.14.0
//! using the Elm architecture.

pub mod app;
pub mod handler;
pub mod message;
pub mod state;
pub mod theme;
pub mod view;

// Service modules for background tasks
pub mod service;
