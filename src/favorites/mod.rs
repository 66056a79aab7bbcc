//! Favorites — the network half of the favorite toggle.
//!
//! DESIGN
//! ======
//! The request/response round trip returns a plain `Result`; mapping that
//! result onto a button lives in `crate::ui` so it can be tested without a
//! server.

pub mod client;
pub mod pending;
pub mod types;

pub use client::{FavoritesClient, TOGGLE_FAVORITE_PATH, ToggleTransport, toggle_endpoint};
pub use pending::{PendingGuard, PendingToggles};
pub use types::{FavoriteError, PaperId, ToggleRequest, ToggleResponse, parse_toggle_response};
