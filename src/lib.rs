//! `BioBuddy` favorites client.
//!
//! Toggles the favorite flag on a paper through `POST /api/toggle_favorite`
//! and keeps the star button in step with the server's answer.

pub mod config;
pub mod favorites;
pub mod handler;
pub mod ui;

#[cfg(test)]
mod testing;

pub use config::ClientConfig;
pub use favorites::{FavoriteError, FavoritesClient, PaperId, ToggleResponse, ToggleTransport};
pub use handler::FavoriteToggleHandler;
pub use ui::{ButtonState, Control, FavoriteButton, Notifier, TracingNotifier};
