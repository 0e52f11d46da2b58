//! HoReCa Match — onboarding core for a hospitality job marketplace.

pub mod config;
pub mod error;
pub mod onboarding;
pub mod records;
pub mod schema;
pub mod selection;
pub mod session;
pub mod submit;
