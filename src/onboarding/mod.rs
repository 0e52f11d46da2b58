//! Onboarding engine — the multi-step wizard behind applicant and employer
//! sign-up.
//!
//! A `FlowDefinition` pairs an entity schema with the ordered steps that
//! cover it; a `Sequencer` walks those steps, accumulating a draft and
//! validating each step's field subset on advance. The `FlowManager` wraps a
//! sequencer in a session and hands the finished draft to the submission
//! collaborator.

pub mod gate;
pub mod manager;
pub mod routes;
pub mod sequencer;
pub mod steps;

pub use manager::{AdvanceOutcome, FlowManager, FlowStatus};
pub use routes::{OnboardingRouteState, onboarding_routes};
pub use sequencer::{JumpError, ProgressView, Sequencer, StepOutcome};
pub use steps::{FlowDefinition, StepDefinition, applicant_flow, employer_flow};
