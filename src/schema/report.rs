//! Validation outcome — a field-to-message map.

use std::collections::BTreeMap;

use serde::Serialize;

/// Result of validating a record (or a step's subset of one).
///
/// An empty map means the record is valid. Keys are field names; a field
/// keeps its first reported message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub field_errors: BTreeMap<String, String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the validated record passed every rule.
    pub fn is_valid(&self) -> bool {
        self.field_errors.is_empty()
    }

    /// Record an error for a field. First message wins.
    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.field_errors
            .entry(field.to_string())
            .or_insert_with(|| message.into());
    }

    /// Get the message for a field, if any.
    pub fn message(&self, field: &str) -> Option<&str> {
        self.field_errors.get(field).map(String::as_str)
    }
}
