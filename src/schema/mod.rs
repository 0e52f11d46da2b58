//! Schema layer — declarative validation rules for marketplace entities.
//!
//! Each entity is described by an `EntitySchema`: a list of `FieldRule`s
//! pairing a field name with a tagged-variant `FieldKind` carrying the
//! constraint parameters. Validation runs over a `serde_json::Value` record
//! and is pure and total — malformed input produces field errors, never a
//! panic or an `Err`.

pub mod entities;
pub mod field;
pub mod report;

pub use entities::{
    EntitySchema, applicant_draft, education_item, employer_profile, event, job_posting,
    job_response, partner,
};
pub use field::{FieldKind, FieldRule};
pub use report::ValidationReport;
