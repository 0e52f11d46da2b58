//! Entity schemas for the marketplace.
//!
//! One `EntitySchema` per record kind. The applicant draft and employer
//! profile schemas double as the field universe their onboarding flows must
//! cover.

use serde_json::Value;

use super::field::{FieldKind, FieldRule};
use super::report::ValidationReport;

/// Option sets shared between schemas and selection widgets.
pub mod options {
    pub const POSITIONS: &[&str] = &[
        "cook",
        "sous_chef",
        "chef",
        "confectioner",
        "barista",
        "bartender",
        "waiter",
        "hall_manager",
        "venue_manager",
    ];
    pub const EDUCATION_LEVELS: &[&str] =
        &["secondary", "vocational", "culinary_school", "higher"];
    pub const RANKS: &[&str] = &["trainee", "junior", "middle", "senior", "lead"];
    pub const VENUE_FORMATS: &[&str] = &[
        "cafe",
        "restaurant",
        "bar",
        "hotel",
        "canteen",
        "catering",
        "bakery",
        "fast_food",
    ];
}

/// A named set of field rules.
#[derive(Debug, Clone)]
pub struct EntitySchema {
    pub name: &'static str,
    pub fields: Vec<FieldRule>,
}

impl EntitySchema {
    /// Look up a field rule by name.
    pub fn field(&self, name: &str) -> Option<&FieldRule> {
        self.fields.iter().find(|rule| rule.name == name)
    }

    /// Names of every field in declaration order.
    pub fn field_names(&self) -> Vec<&'static str> {
        self.fields.iter().map(|rule| rule.name).collect()
    }

    /// Validate a full candidate record.
    ///
    /// Total over any `Value`: a non-object record simply has every field
    /// absent. Fields not declared in the schema are ignored.
    pub fn validate(&self, record: &Value) -> ValidationReport {
        let mut report = ValidationReport::new();
        for rule in &self.fields {
            if let Some(message) = rule.check(record.get(rule.name)) {
                report.push(rule.name, message);
            }
        }
        report
    }

    /// Validate only the named subset of fields.
    pub fn validate_fields(&self, record: &Value, names: &[&str]) -> ValidationReport {
        let mut report = ValidationReport::new();
        for name in names {
            if let Some(rule) = self.field(name) {
                if let Some(message) = rule.check(record.get(rule.name)) {
                    report.push(rule.name, message);
                }
            }
        }
        report
    }
}

/// Applicant onboarding draft — the 18 fields the five-step wizard collects.
pub fn applicant_draft() -> EntitySchema {
    use FieldKind::*;
    use options::*;
    EntitySchema {
        name: "applicant_draft",
        fields: vec![
            // Identity
            FieldRule::required("full_name", Text { min_len: 2, max_len: Some(120) }),
            FieldRule::required("phone", Phone),
            FieldRule::required("city", Text { min_len: 2, max_len: Some(80) }),
            FieldRule::required("age", Number { min: Some(16.0), max: Some(80.0) }),
            // Career
            FieldRule::required("experience_years", Number { min: Some(0.0), max: Some(60.0) }),
            FieldRule::required("current_position", OneOf { options: POSITIONS }),
            FieldRule::required("desired_position", OneOf { options: POSITIONS }),
            FieldRule::required("education", OneOf { options: EDUCATION_LEVELS }),
            FieldRule::required("rank", OneOf { options: RANKS }),
            // Specialization
            FieldRule::required("cuisines", List { min_items: 1, max_items: None }),
            FieldRule::optional("certificates", List { min_items: 1, max_items: None }),
            FieldRule::optional("skills", List { min_items: 1, max_items: None }),
            // Conditions
            FieldRule::required("venue_formats", List { min_items: 1, max_items: None }),
            FieldRule::required("salary_from", Number { min: Some(0.0), max: None }),
            FieldRule::optional("salary_to", Number { min: Some(0.0), max: None }),
            // Closing
            FieldRule::required("goals", List { min_items: 1, max_items: None }),
            FieldRule::required("about", Text { min_len: 50, max_len: Some(2000) }),
            FieldRule::required("self_rating", Rating { min: 1, max: 5 }),
        ],
    }
}

/// Employer profile built by the employer wizard.
pub fn employer_profile() -> EntitySchema {
    use FieldKind::*;
    use options::*;
    EntitySchema {
        name: "employer_profile",
        fields: vec![
            FieldRule::required("company_name", Text { min_len: 2, max_len: Some(120) }),
            FieldRule::required("city", Text { min_len: 2, max_len: Some(80) }),
            FieldRule::required("venue_format", OneOf { options: VENUE_FORMATS }),
            FieldRule::required("phone", Phone),
            FieldRule::optional("website", Url),
            FieldRule::required("description", Text { min_len: 50, max_len: Some(2000) }),
        ],
    }
}

/// Job posting published by an employer.
pub fn job_posting() -> EntitySchema {
    use FieldKind::*;
    use options::*;
    EntitySchema {
        name: "job_posting",
        fields: vec![
            FieldRule::required("title", Text { min_len: 5, max_len: Some(120) }),
            FieldRule::required("description", Text { min_len: 50, max_len: Some(5000) }),
            FieldRule::required("position", OneOf { options: POSITIONS }),
            FieldRule::required("city", Text { min_len: 2, max_len: Some(80) }),
            FieldRule::required("salary_from", Number { min: Some(0.0), max: None }),
            FieldRule::optional("salary_to", Number { min: Some(0.0), max: None }),
            FieldRule::required("requirements", List { min_items: 1, max_items: None }),
            FieldRule::optional("benefits", List { min_items: 1, max_items: None }),
        ],
    }
}

/// Industry event shown on the landing page.
pub fn event() -> EntitySchema {
    use FieldKind::*;
    EntitySchema {
        name: "event",
        fields: vec![
            FieldRule::required("title", Text { min_len: 5, max_len: Some(120) }),
            FieldRule::required("description", Text { min_len: 50, max_len: Some(5000) }),
            FieldRule::required("city", Text { min_len: 2, max_len: Some(80) }),
            FieldRule::required("location", Text { min_len: 2, max_len: Some(200) }),
            FieldRule::required("starts_at", Text { min_len: 1, max_len: Some(40) }),
            FieldRule::optional("url", Url),
        ],
    }
}

/// Course or training offered through the marketplace.
pub fn education_item() -> EntitySchema {
    use FieldKind::*;
    EntitySchema {
        name: "education_item",
        fields: vec![
            FieldRule::required("title", Text { min_len: 5, max_len: Some(120) }),
            FieldRule::required("description", Text { min_len: 50, max_len: Some(5000) }),
            FieldRule::required("duration_hours", Number { min: Some(0.0), max: None }),
            FieldRule::required("price", Number { min: Some(0.0), max: None }),
            FieldRule::optional("url", Url),
        ],
    }
}

/// Partner organisation shown on the landing page.
pub fn partner() -> EntitySchema {
    use FieldKind::*;
    EntitySchema {
        name: "partner",
        fields: vec![
            FieldRule::required("name", Text { min_len: 2, max_len: Some(120) }),
            FieldRule::optional("website", Url),
            FieldRule::optional("logo_url", Url),
        ],
    }
}

/// Applicant response to a job posting.
pub fn job_response() -> EntitySchema {
    use FieldKind::*;
    EntitySchema {
        name: "job_response",
        fields: vec![
            FieldRule::required("job_id", Text { min_len: 1, max_len: Some(64) }),
            FieldRule::required("full_name", Text { min_len: 2, max_len: Some(120) }),
            FieldRule::required("phone", Phone),
            FieldRule::optional("cover_letter", Text { min_len: 0, max_len: Some(2000) }),
        ],
    }
}
