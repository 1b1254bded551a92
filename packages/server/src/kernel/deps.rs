//! Server dependencies for request handlers (using traits for testability)
//!
//! Built once at startup and cloned into every request. All external
//! services sit behind trait objects so tests can swap in fakes.

use std::sync::Arc;
use std::time::Duration;

use super::{BaseCompletionService, BaseStudyStore};

#[derive(Clone)]
pub struct ServerDeps {
    pub store: Arc<dyn BaseStudyStore>,
    /// Single completion client shared for the process lifetime
    pub completion: Arc<dyn BaseCompletionService>,
    /// Upper bound on one completion call; exceeding it counts as a failure
    pub completion_timeout: Duration,
}

impl ServerDeps {
    pub fn new(
        store: Arc<dyn BaseStudyStore>,
        completion: Arc<dyn BaseCompletionService>,
        completion_timeout: Duration,
    ) -> Self {
        Self {
            store,
            completion,
            completion_timeout,
        }
    }
}
