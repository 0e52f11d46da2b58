//! Step sequencer — the wizard's cursor, draft, and passed-step record.
//!
//! States are step ordinals `1..=N` plus the terminal "complete" position at
//! `N + 1`. `go_next` is guarded by the validation gate; `go_back` is not.
//! Abandoning the wizard is just dropping the `Sequencer` — the draft lives
//! nowhere else.

use std::collections::BTreeSet;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::schema::ValidationReport;

use super::gate;
use super::steps::{FlowDefinition, StepDefinition};

/// Outcome of a `go_next` call.
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    /// Validation passed; the cursor now sits on `ordinal`.
    Advanced { ordinal: u32 },
    /// The final step passed; the flow is complete.
    Complete,
    /// Validation failed; the cursor did not move.
    Rejected(ValidationReport),
}

/// Why a `jump_to` was refused. Never fatal — the caller shows a locked step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum JumpError {
    #[error("step {target} is locked")]
    StepLocked { target: u32 },

    #[error("step {target} is out of range")]
    OutOfRange { target: u32 },
}

/// Derived progress view, recomputed from sequencer state on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressView {
    pub ordinal: u32,
    pub total: u32,
    pub percent: u8,
    pub label: String,
    pub encouragement: &'static str,
    pub complete: bool,
}

/// Runtime cursor over a `FlowDefinition`.
#[derive(Debug, Clone)]
pub struct Sequencer {
    flow: FlowDefinition,
    current: u32,
    draft: Map<String, Value>,
    passed: BTreeSet<u32>,
}

impl Sequencer {
    /// Start a fresh session at step 1 with an empty draft.
    pub fn new(flow: FlowDefinition) -> Self {
        Self {
            flow,
            current: 1,
            draft: Map::new(),
            passed: BTreeSet::new(),
        }
    }

    pub fn flow(&self) -> &FlowDefinition {
        &self.flow
    }

    /// Current step ordinal. Equals `total_steps() + 1` once complete.
    pub fn current_ordinal(&self) -> u32 {
        self.current
    }

    pub fn total_steps(&self) -> u32 {
        self.flow.total_steps()
    }

    /// The step the cursor sits on; `None` once the flow is complete.
    pub fn current_step(&self) -> Option<&StepDefinition> {
        self.flow.step(self.current)
    }

    /// Whether the cursor has advanced past the final step.
    pub fn is_complete(&self) -> bool {
        self.current > self.total_steps()
    }

    /// Highest ordinal that has ever passed validation; 0 before any pass.
    pub fn highest_passed(&self) -> u32 {
        self.passed.iter().next_back().copied().unwrap_or(0)
    }

    /// Merge a single field value into the draft. No validation runs here —
    /// that is deferred to `go_next`.
    pub fn update_field(&mut self, name: &str, value: Value) {
        self.draft.insert(name.to_string(), value);
    }

    /// Snapshot of the accumulated draft.
    pub fn draft(&self) -> Value {
        Value::Object(self.draft.clone())
    }

    /// Validate the current step and advance on success.
    ///
    /// On failure the cursor stays put and the field errors come back. Steps
    /// already behind the cursor are never re-validated here.
    pub fn go_next(&mut self) -> StepOutcome {
        let Some(step) = self.flow.step(self.current) else {
            return StepOutcome::Complete;
        };
        let report = gate::validate_step(step, &self.flow.schema, &self.draft());
        if !report.is_valid() {
            return StepOutcome::Rejected(report);
        }
        self.passed.insert(self.current);
        self.current += 1;
        if self.is_complete() {
            StepOutcome::Complete
        } else {
            StepOutcome::Advanced {
                ordinal: self.current,
            }
        }
    }

    /// Retreat one step, floored at 1. Non-destructive: entered values and
    /// passed marks stay as they are, and nothing is re-validated.
    pub fn go_back(&mut self) {
        if self.current > 1 {
            self.current -= 1;
        }
    }

    /// Move the cursor to `ordinal`, allowed only up to one past the highest
    /// step that has passed validation.
    pub fn jump_to(&mut self, ordinal: u32) -> Result<(), JumpError> {
        if ordinal < 1 || ordinal > self.total_steps() {
            return Err(JumpError::OutOfRange { target: ordinal });
        }
        if ordinal > self.highest_passed() + 1 {
            return Err(JumpError::StepLocked { target: ordinal });
        }
        self.current = ordinal;
        Ok(())
    }

    /// Recompute the derived progress view.
    pub fn progress(&self) -> ProgressView {
        let total = self.total_steps();
        let percent = (self.passed.len() as u32 * 100 / total).min(100) as u8;
        let complete = self.is_complete();
        let label = match self.current_step() {
            Some(step) => step.label.to_string(),
            None => "Complete".to_string(),
        };
        ProgressView {
            ordinal: self.current.min(total),
            total,
            percent,
            label,
            encouragement: encouragement(percent),
            complete,
        }
    }
}

/// Motivational copy keyed off progress.
fn encouragement(percent: u8) -> &'static str {
    match percent {
        0 => "Let's get started",
        1..=39 => "Nice start, keep going",
        40..=79 => "More than halfway there",
        80..=99 => "Almost done",
        _ => "All set",
    }
}
