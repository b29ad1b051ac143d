//! Field validation pipeline
//!
//! Pure per-field rule functions returning structured pass/fail reports.
//! Uniqueness rules (handle/email lookups) live in the service layer on
//! top of these.

mod report;
mod rules;

pub use report::FieldReport;
pub use rules::{
    description, email_format, handle_format, new_password, password, picture_url, username,
    DESCRIPTION_MAX, FIELD_MAX, FIELD_MIN,
};
