//! Selection widgets — controlled single/multi-select state for option sets.
//!
//! These hold only the selection the owning step feeds back into the draft;
//! there is no hidden source of truth. Option identifiers come from
//! `schema::entities::options`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// "Choose one" controller. Selecting replaces the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SingleSelect {
    selected: Option<String>,
}

impl SingleSelect {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current selection.
    pub fn on_select(&mut self, value: &str) {
        self.selected = Some(value.to_string());
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// The selection as a draft field value (empty string when unset).
    pub fn to_value(&self) -> Value {
        Value::String(self.selected.clone().unwrap_or_default())
    }
}

/// "Choose many" controller with an optional cap on the set size.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiSelect {
    selected: Vec<String>,
    max_selections: Option<usize>,
}

impl MultiSelect {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cap the selection size. Toggle attempts past the cap are ignored.
    pub fn with_max(max_selections: usize) -> Self {
        Self {
            selected: Vec::new(),
            max_selections: Some(max_selections),
        }
    }

    /// Add the value if absent, remove it if present. Additions past the
    /// configured cap are silently dropped; removals always work.
    pub fn on_toggle(&mut self, value: &str) {
        if let Some(index) = self.selected.iter().position(|v| v == value) {
            self.selected.remove(index);
            return;
        }
        if let Some(max) = self.max_selections {
            if self.selected.len() >= max {
                return;
            }
        }
        self.selected.push(value.to_string());
    }

    pub fn contains(&self, value: &str) -> bool {
        self.selected.iter().any(|v| v == value)
    }

    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// The selection as a draft field value (JSON array).
    pub fn to_value(&self) -> Value {
        Value::Array(
            self.selected
                .iter()
                .map(|v| Value::String(v.clone()))
                .collect(),
        )
    }
}
