//! Validation gate — adapts entity schemas to a single step's field subset.

use serde_json::Value;

use crate::schema::{EntitySchema, ValidationReport};

use super::steps::StepDefinition;

/// Validate only the fields the given step declares.
///
/// Fields outside the step are ignored even if currently invalid, so a later
/// required field left empty never blocks an earlier step. The report is a
/// value, never an error — the user corrects and retries.
pub fn validate_step(
    step: &StepDefinition,
    schema: &EntitySchema,
    draft: &Value,
) -> ValidationReport {
    schema.validate_fields(draft, step.fields)
}
