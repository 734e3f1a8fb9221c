use serde::Serialize;

use super::domain::ApplicationId;

/// One unit failure inside a bulk operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BulkFailure {
    pub application: ApplicationId,
    pub reason: String,
}

/// Aggregate tally for a bulk operation.
///
/// Unit operations are attempted independently; the batch never aborts on
/// first failure, and the tally reports both sides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BulkOutcome {
    pub succeeded: Vec<ApplicationId>,
    pub failed: Vec<BulkFailure>,
}

impl BulkOutcome {
    pub fn record_success(&mut self, application: ApplicationId) {
        self.succeeded.push(application);
    }

    pub fn record_failure(&mut self, application: ApplicationId, reason: impl Into<String>) {
        self.failed.push(BulkFailure {
            application,
            reason: reason.into(),
        });
    }

    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }

    /// "N succeeded, M failed" summary for notifications.
    pub fn summary(&self) -> String {
        format!(
            "{} succeeded, {} failed",
            self.succeeded.len(),
            self.failed.len()
        )
    }
}
