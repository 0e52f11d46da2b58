//! Marketplace records — typed entities behind the entity schemas.
//!
//! Plain CRUD records: serde models stamped with an id, timestamps, and a
//! moderation status. The only behavior is field-level validation through the
//! schema layer and the status transition check the admin panel relies on.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::schema::{self, EntitySchema, ValidationReport};

/// Moderation lifecycle for admin-reviewed records.
///
/// Pending → Approved or Pending → Rejected; both outcomes are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModerationStatus {
    Pending,
    Approved,
    Rejected,
}

impl ModerationStatus {
    /// Check if a transition from `self` to `target` is valid.
    pub fn can_transition_to(&self, target: ModerationStatus) -> bool {
        use ModerationStatus::*;
        matches!((self, target), (Pending, Approved) | (Pending, Rejected))
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending)
    }
}

impl Default for ModerationStatus {
    fn default() -> Self {
        Self::Pending
    }
}

impl std::fmt::Display for ModerationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        };
        write!(f, "{s}")
    }
}

fn validate_record<T: Serialize>(schema: &EntitySchema, record: &T) -> ValidationReport {
    match serde_json::to_value(record) {
        Ok(value) => schema.validate(&value),
        Err(e) => {
            tracing::warn!("Failed to serialize {} for validation: {}", schema.name, e);
            let mut report = ValidationReport::new();
            report.push("_record", "could not be serialized");
            report
        }
    }
}

/// Typed equivalent of a completed applicant draft.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicantProfile {
    pub full_name: String,
    pub phone: String,
    pub city: String,
    pub age: u32,
    pub experience_years: u32,
    pub current_position: String,
    pub desired_position: String,
    pub education: String,
    pub rank: String,
    pub cuisines: Vec<String>,
    #[serde(default)]
    pub certificates: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    pub venue_formats: Vec<String>,
    pub salary_from: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_to: Option<u32>,
    pub goals: Vec<String>,
    pub about: String,
    pub self_rating: u8,
}

impl ApplicantProfile {
    /// Deserialize a completed draft into the typed profile.
    pub fn from_draft(draft: &Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(draft.clone())
    }

    pub fn validate(&self) -> ValidationReport {
        validate_record(&schema::applicant_draft(), self)
    }
}

/// Employer profile built by the employer wizard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployerProfile {
    pub company_name: String,
    pub city: String,
    pub venue_format: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    pub description: String,
}

impl EmployerProfile {
    pub fn from_draft(draft: &Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(draft.clone())
    }

    pub fn validate(&self) -> ValidationReport {
        validate_record(&schema::employer_profile(), self)
    }
}

/// Job posting published by an employer, moderated before going live.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: Uuid,
    pub employer_id: String,
    pub title: String,
    pub description: String,
    pub position: String,
    pub city: String,
    pub salary_from: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_to: Option<u32>,
    pub requirements: Vec<String>,
    #[serde(default)]
    pub benefits: Vec<String>,
    pub status: ModerationStatus,
    pub created_at: DateTime<Utc>,
}

impl JobPosting {
    pub fn new(
        employer_id: &str,
        title: &str,
        description: &str,
        position: &str,
        city: &str,
        salary_from: u32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            employer_id: employer_id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            position: position.to_string(),
            city: city.to_string(),
            salary_from,
            salary_to: None,
            requirements: Vec::new(),
            benefits: Vec::new(),
            status: ModerationStatus::default(),
            created_at: Utc::now(),
        }
    }

    pub fn with_requirements(mut self, requirements: &[&str]) -> Self {
        self.requirements = requirements.iter().map(|r| r.to_string()).collect();
        self
    }

    pub fn with_salary_to(mut self, salary_to: u32) -> Self {
        self.salary_to = Some(salary_to);
        self
    }

    pub fn validate(&self) -> ValidationReport {
        validate_record(&schema::job_posting(), self)
    }
}

/// Industry event shown on the landing page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub city: String,
    pub location: String,
    pub starts_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub status: ModerationStatus,
    pub created_at: DateTime<Utc>,
}

impl Event {
    pub fn validate(&self) -> ValidationReport {
        validate_record(&schema::event(), self)
    }
}

/// Course or training offered through the marketplace.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationItem {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub duration_hours: u32,
    pub price: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub status: ModerationStatus,
    pub created_at: DateTime<Utc>,
}

impl EducationItem {
    pub fn validate(&self) -> ValidationReport {
        validate_record(&schema::education_item(), self)
    }
}

/// Partner organisation shown on the landing page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Partner {
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Partner {
    pub fn validate(&self) -> ValidationReport {
        validate_record(&schema::partner(), self)
    }
}

/// Applicant response to a job posting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobResponse {
    pub id: Uuid,
    pub job_id: String,
    pub full_name: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_letter: Option<String>,
    pub status: ModerationStatus,
    pub created_at: DateTime<Utc>,
}

impl JobResponse {
    pub fn new(job_id: &str, full_name: &str, phone: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            job_id: job_id.to_string(),
            full_name: full_name.to_string(),
            phone: phone.to_string(),
            cover_letter: None,
            status: ModerationStatus::default(),
            created_at: Utc::now(),
        }
    }

    pub fn validate(&self) -> ValidationReport {
        validate_record(&schema::job_response(), self)
    }
}
