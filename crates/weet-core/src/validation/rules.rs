//! Per-field validation rules
//!
//! Each function checks one field and reports every violated rule.

use super::report::FieldReport;

/// Minimum length shared by handle, username, and password
pub const FIELD_MIN: usize = 8;
/// Maximum length shared by handle, username, and password
pub const FIELD_MAX: usize = 20;
/// Maximum length of a user description
pub const DESCRIPTION_MAX: usize = 250;

/// Recognized image file extensions for profile and banner pictures
const IMAGE_EXTENSIONS: [&str; 4] = [".jpg", ".jpeg", ".png", ".gif"];

/// Top-level domains the email rule accepts
const EMAIL_TLDS: [&str; 3] = ["com", "edu", "net"];

fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// Handle: 8-20 characters, letters and digits only. Uniqueness is checked
/// separately against the user table.
pub fn handle_format(handle: &str) -> FieldReport {
    let mut report = FieldReport::valid();
    let len = char_len(handle);
    if !(FIELD_MIN..=FIELD_MAX).contains(&len) {
        report.flag("Handle must be between 8 and 20 characters long.");
    }
    if !handle.chars().all(|c| c.is_ascii_alphanumeric()) {
        report.flag("Handle can only contain letters and numbers.");
    }
    report
}

/// Username: 8-20 characters, not blank, no leading space
pub fn username(username: &str) -> FieldReport {
    let mut report = FieldReport::valid();
    let len = char_len(username);
    if !(FIELD_MIN..=FIELD_MAX).contains(&len) {
        report.flag("Username must be between 8 and 20 characters long.");
    }
    if username.trim().is_empty() {
        report.flag("Username cannot be blank.");
    } else if username.starts_with(' ') {
        report.flag("Username cannot begin with a space.");
    }
    report
}

/// Password: 8-20 characters, at least one uppercase letter, one digit,
/// and one special character; no whitespace anywhere
pub fn password(password: &str) -> FieldReport {
    let mut report = FieldReport::valid();
    let len = char_len(password);
    if !(FIELD_MIN..=FIELD_MAX).contains(&len) {
        report.flag("Password must be between 8 and 20 characters long.");
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        report.flag("Password must contain at least one uppercase letter.");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        report.flag("Password must contain at least one number.");
    }
    if !password.chars().any(|c| c.is_ascii_punctuation()) {
        report.flag("Password must contain at least one special character.");
    }
    if password.chars().any(char::is_whitespace) {
        report.flag("Password cannot contain whitespace.");
    }
    report
}

/// New password: all password rules plus must differ from the old password
pub fn new_password(new: &str, old: &str) -> FieldReport {
    let mut report = password(new);
    if new == old {
        report.flag("New password cannot be the same as the old password.");
    }
    report
}

/// Email: restrictive `user@domain.(com|edu|net)` shape. Uniqueness (or
/// same-owner equality on update) is checked separately.
pub fn email_format(email: &str) -> FieldReport {
    let mut report = FieldReport::valid();
    if !has_valid_email_shape(email) {
        report.flag("Email is not valid.");
    }
    report
}

fn has_valid_email_shape(email: &str) -> bool {
    let Some((local, domain_full)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty()
        || !local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "._%+-".contains(c))
    {
        return false;
    }
    let Some((domain, tld)) = domain_full.rsplit_once('.') else {
        return false;
    };
    if !EMAIL_TLDS.contains(&tld) {
        return false;
    }
    // Domain labels: non-empty, letters/digits/hyphens
    !domain.is_empty()
        && domain.split('.').all(|label| {
            !label.is_empty() && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        })
}

/// Picture URL: http(s) scheme, recognized image extension, no whitespace
pub fn picture_url(url: &str) -> FieldReport {
    let mut report = FieldReport::valid();
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        report.flag("Image URL must begin with http or https.");
    }
    let lowered = url.to_ascii_lowercase();
    if !IMAGE_EXTENSIONS.iter().any(|ext| lowered.ends_with(ext)) {
        report.flag("Image URL must end in a valid image format.");
    }
    if url.chars().any(char::is_whitespace) {
        report.flag("Image URL cannot contain whitespace.");
    }
    report
}

/// User description: at most 250 characters, not blank, no leading space
pub fn description(text: &str) -> FieldReport {
    let mut report = FieldReport::valid();
    if char_len(text) > DESCRIPTION_MAX {
        report.flag("Description cannot exceed 250 characters.");
    }
    if text.trim().is_empty() {
        report.flag("Description cannot be blank.");
    } else if text.starts_with(' ') {
        report.flag("Description cannot begin with a space.");
    }
    report
}
