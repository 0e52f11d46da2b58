//! Submission collaborator — consumes a completed draft at flow end.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::SubmissionError;
use crate::session::SessionContext;

/// Receives a fully validated draft once the final step passes.
///
/// Failures are never fatal to the flow: the manager surfaces them as a
/// flow-level message and keeps the draft so the user can retry.
#[async_trait]
pub trait Submitter: Send + Sync {
    async fn submit(
        &self,
        session: &SessionContext,
        flow: &str,
        draft: &Value,
    ) -> Result<(), SubmissionError>;
}

/// Submitter that only logs the handoff. Stands in until a real backend
/// exists.
pub struct LogSubmitter;

#[async_trait]
impl Submitter for LogSubmitter {
    async fn submit(
        &self,
        session: &SessionContext,
        flow: &str,
        draft: &Value,
    ) -> Result<(), SubmissionError> {
        tracing::info!(
            session_id = %session.session_id,
            flow,
            fields = draft.as_object().map(|o| o.len()).unwrap_or(0),
            "Draft submitted"
        );
        Ok(())
    }
}
