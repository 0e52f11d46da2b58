//! Session context — identity handed to the flow explicitly.
//!
//! Authentication happens elsewhere; the core only receives the result. No
//! ambient globals: whoever builds a `FlowManager` passes one of these in.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who the session belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Applicant,
    Employer,
    Admin,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Applicant => "applicant",
            Self::Employer => "employer",
            Self::Admin => "admin",
        };
        write!(f, "{s}")
    }
}

/// Identity signal supplied by the authentication collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionContext {
    pub session_id: Uuid,
    pub user_id: String,
    pub role: Role,
    pub authenticated: bool,
}

impl SessionContext {
    /// Session for a signed-in user.
    pub fn new(user_id: &str, role: Role) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            user_id: user_id.to_string(),
            role,
            authenticated: true,
        }
    }

    /// Session for a visitor who has not signed in.
    pub fn anonymous(role: Role) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            user_id: String::new(),
            role,
            authenticated: false,
        }
    }
}
