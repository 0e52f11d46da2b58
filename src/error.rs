//! Error types for HoReCa Match.
//!
//! Field-level validation results are values (`ValidationReport`), not errors:
//! they are always recoverable and stay at the step where they occurred. The
//! enums here cover the failures that are not resolvable by editing a field.

/// Top-level error type for the marketplace core.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Flow error: {0}")]
    Flow(#[from] FlowError),

    #[error("Submission error: {0}")]
    Submission(#[from] SubmissionError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Flow definition errors — a step sequence that does not line up with its
/// schema is a programming mistake, caught when the flow is built.
#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    #[error("Flow {flow} has no steps")]
    Empty { flow: String },

    #[error(
        "Flow {flow}: step ordinals must be contiguous from 1, found {found} at position {position}"
    )]
    NonContiguousOrdinals {
        flow: String,
        position: usize,
        found: u32,
    },

    #[error("Flow {flow}: step {ordinal} references unknown field {field}")]
    UnknownField {
        flow: String,
        ordinal: u32,
        field: String,
    },

    #[error("Flow {flow}: field {field} is claimed by both step {first} and step {second}")]
    DuplicateField {
        flow: String,
        field: String,
        first: u32,
        second: u32,
    },

    #[error("Flow {flow}: field {field} is not covered by any step")]
    UncoveredField { flow: String, field: String },
}

/// Errors reported by the submission collaborator at flow completion.
///
/// These are surfaced as a flow-level message and never discard the draft.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("Network failure: {0}")]
    Network(String),

    #[error("Submission rejected: {reason}")]
    Rejected { reason: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for the marketplace core.
pub type Result<T> = std::result::Result<T, Error>;
