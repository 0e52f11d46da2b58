//! FlowManager — coordinates the sequencer, session identity, and the
//! submission collaborator.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::session::SessionContext;
use crate::submit::Submitter;

use super::sequencer::{JumpError, ProgressView, Sequencer, StepOutcome};
use super::steps::FlowDefinition;

/// Result of an `advance` call, serialized straight onto the wire.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum AdvanceOutcome {
    /// The step passed; the cursor moved to `ordinal`.
    Advanced { ordinal: u32 },
    /// Validation failed; the cursor stayed where it was.
    Rejected {
        field_errors: BTreeMap<String, String>,
    },
    /// The flow completed and the draft was handed off.
    Submitted,
    /// The final step passed but the collaborator refused the draft. The
    /// user is back on the last step with everything intact.
    SubmissionFailed { message: String },
}

/// Snapshot of the whole flow for the status endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct FlowStatus {
    pub session_id: Uuid,
    pub flow: &'static str,
    pub progress: ProgressView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flow_error: Option<String>,
    pub submitted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

struct FlowInner {
    sequencer: Sequencer,
    submitted: bool,
    flow_error: Option<String>,
    completed_at: Option<DateTime<Utc>>,
}

/// Drives one onboarding session: owns the sequencer, knows who is filling
/// the form, and hands the finished draft to the submitter exactly once.
pub struct FlowManager {
    session: SessionContext,
    flow_name: &'static str,
    submitter: Arc<dyn Submitter>,
    inner: Arc<RwLock<FlowInner>>,
}

impl FlowManager {
    pub fn new(
        session: SessionContext,
        flow: FlowDefinition,
        submitter: Arc<dyn Submitter>,
    ) -> Self {
        let flow_name = flow.name;
        Self {
            session,
            flow_name,
            submitter,
            inner: Arc::new(RwLock::new(FlowInner {
                sequencer: Sequencer::new(flow),
                submitted: false,
                flow_error: None,
                completed_at: None,
            })),
        }
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    /// Merge a single field value into the draft.
    pub async fn update_field(&self, name: &str, value: Value) {
        let mut inner = self.inner.write().await;
        inner.sequencer.update_field(name, value);
    }

    /// Snapshot of the accumulated draft.
    pub async fn draft(&self) -> Value {
        self.inner.read().await.sequencer.draft()
    }

    pub async fn progress(&self) -> ProgressView {
        self.inner.read().await.sequencer.progress()
    }

    pub async fn status(&self) -> FlowStatus {
        let inner = self.inner.read().await;
        FlowStatus {
            session_id: self.session.session_id,
            flow: self.flow_name,
            progress: inner.sequencer.progress(),
            flow_error: inner.flow_error.clone(),
            submitted: inner.submitted,
            completed_at: inner.completed_at,
        }
    }

    /// Validate the current step and advance; on final-step success, submit.
    ///
    /// A submitter failure returns the user to the last step with a
    /// flow-level message — the draft and all passed marks survive, so a
    /// retry re-validates only the final step and submits again. Once a
    /// submission succeeds, further calls are no-ops reporting `Submitted`.
    pub async fn advance(&self) -> AdvanceOutcome {
        let mut inner = self.inner.write().await;
        if inner.submitted {
            return AdvanceOutcome::Submitted;
        }
        match inner.sequencer.go_next() {
            StepOutcome::Advanced { ordinal } => {
                inner.flow_error = None;
                AdvanceOutcome::Advanced { ordinal }
            }
            StepOutcome::Rejected(report) => AdvanceOutcome::Rejected {
                field_errors: report.field_errors,
            },
            StepOutcome::Complete => {
                let draft = inner.sequencer.draft();
                match self
                    .submitter
                    .submit(&self.session, self.flow_name, &draft)
                    .await
                {
                    Ok(()) => {
                        inner.submitted = true;
                        inner.flow_error = None;
                        inner.completed_at = Some(Utc::now());
                        tracing::info!(
                            session_id = %self.session.session_id,
                            flow = self.flow_name,
                            "Onboarding complete"
                        );
                        AdvanceOutcome::Submitted
                    }
                    Err(e) => {
                        // Return the user to the last step; keep the draft.
                        inner.sequencer.go_back();
                        let message = e.to_string();
                        inner.flow_error = Some(message.clone());
                        tracing::warn!(
                            session_id = %self.session.session_id,
                            flow = self.flow_name,
                            "Submission failed: {}",
                            message
                        );
                        AdvanceOutcome::SubmissionFailed { message }
                    }
                }
            }
        }
    }

    /// Retreat one step. Never validates, never clears values.
    pub async fn go_back(&self) -> ProgressView {
        let mut inner = self.inner.write().await;
        inner.sequencer.go_back();
        inner.sequencer.progress()
    }

    /// Jump to a previously reachable step.
    pub async fn jump_to(&self, ordinal: u32) -> Result<ProgressView, JumpError> {
        let mut inner = self.inner.write().await;
        inner.sequencer.jump_to(ordinal)?;
        Ok(inner.sequencer.progress())
    }
}
