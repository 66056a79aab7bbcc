//! UI — the presentation half of the favorite toggle.

pub mod button;
pub mod notice;

pub use button::{
    ButtonState, Control, EMPTY_STAR, FILLED_STAR, FavoriteButton, OUTLINE_CLASS, apply_state, apply_toggle_result,
};
pub use notice::{LOGIN_NOTICE, Notifier, TracingNotifier};
