//! Favorite toggle handler — click in, button or notice out.
//!
//! DESIGN
//! ======
//! One click issues one request through the `ToggleTransport`, then hands
//! the result to `ui::apply_toggle_result`. Nothing is returned to the
//! caller and no error escapes: auth failures surface as a login notice,
//! everything else as a diagnostic.
//!
//! Clicks are not serialized by default. Two rapid clicks on the same paper
//! race and the last response to resolve wins. `with_dedup` turns on the
//! per-paper in-flight guard, which drops a click while its paper already
//! has a request outstanding.

use tracing::debug;

use crate::favorites::{PaperId, PendingToggles, ToggleTransport};
use crate::ui::{Control, Notifier, apply_toggle_result};

pub struct FavoriteToggleHandler<T, N> {
    transport: T,
    notifier: N,
    pending: Option<PendingToggles>,
}

impl<T: ToggleTransport, N: Notifier> FavoriteToggleHandler<T, N> {
    pub fn new(transport: T, notifier: N) -> Self {
        Self { transport, notifier, pending: None }
    }

    /// Drop clicks for a paper whose previous toggle has not resolved yet.
    #[must_use]
    pub fn with_dedup(mut self) -> Self {
        self.pending = Some(PendingToggles::new());
        self
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub async fn toggle_favorite(&self, control: &mut impl Control, paper_id: &PaperId) {
        let _guard = match &self.pending {
            Some(pending) => match pending.try_begin(paper_id) {
                Some(guard) => Some(guard),
                None => {
                    debug!(%paper_id, "toggle already in flight; click dropped");
                    return;
                }
            },
            None => None,
        };

        let result = self.transport.toggle(paper_id).await;
        apply_toggle_result(control, &result, &self.notifier);
    }
}

#[cfg(test)]
#[path = "handler_test.rs"]
mod tests;
