//! User-facing notices and diagnostics.

use crate::favorites::FavoriteError;

pub const LOGIN_NOTICE: &str = "Please log in to save favorites.";

/// Where toggle failures are reported.
pub trait Notifier {
    /// Show a blocking notice to the user.
    fn alert(&self, message: &str);

    /// Record a failure the user is not told about.
    fn diagnostic(&self, err: &FavoriteError) {
        tracing::error!(error = %err, "favorite toggle failed");
    }
}

/// Headless notifier: alerts become warn-level log lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn alert(&self, message: &str) {
        tracing::warn!(%message, "user notice");
    }
}
