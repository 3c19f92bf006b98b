//! Fetch parameters — use case run control.
//!
//! [`FetchParams`] groups the static parameters that control a run of
//! [`FetchPeopleUseCase`](crate::use_cases::fetch_people::FetchPeopleUseCase).
//! These are application-layer concerns, not domain policy.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default time allowed for dispatched fetches to wind down after cancellation.
pub const DEFAULT_CANCEL_GRACE: Duration = Duration::from_millis(500);

/// Run control parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchParams {
    /// How long a cancelled concurrent run drains its outstanding fetches
    /// before aborting them. The `Canceled` outcome is decided before the
    /// drain starts; this only bounds the cleanup.
    pub cancel_grace: Duration,
}

impl Default for FetchParams {
    fn default() -> Self {
        Self {
            cancel_grace: DEFAULT_CANCEL_GRACE,
        }
    }
}

impl FetchParams {
    pub fn with_cancel_grace(mut self, grace: Duration) -> Self {
        self.cancel_grace = grace;
        self
    }

    pub fn with_cancel_grace_ms(self, millis: u64) -> Self {
        self.with_cancel_grace(Duration::from_millis(millis))
    }
}
