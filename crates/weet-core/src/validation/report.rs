//! Structured validation result for a single field

use serde::Serialize;

/// Pass/fail result for one validated field. Every violated rule
/// contributes a message, not just the first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldReport {
    pub is_valid: bool,
    pub messages: Vec<String>,
}

impl FieldReport {
    /// A passing report with no messages
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            messages: Vec::new(),
        }
    }

    /// Record a rule violation
    pub fn flag(&mut self, message: impl Into<String>) {
        self.is_valid = false;
        self.messages.push(message.into());
    }

    /// Fold another report into this one
    pub fn merge(&mut self, other: FieldReport) {
        self.is_valid = self.is_valid && other.is_valid;
        self.messages.extend(other.messages);
    }
}

impl Default for FieldReport {
    fn default() -> Self {
        Self::valid()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_report() {
        let report = FieldReport::valid();
        assert!(report.is_valid);
        assert!(report.messages.is_empty());
    }

    #[test]
    fn test_flag_accumulates() {
        let mut report = FieldReport::valid();
        report.flag("first problem");
        report.flag("second problem");
        assert!(!report.is_valid);
        assert_eq!(report.messages.len(), 2);
    }

    #[test]
    fn test_merge() {
        let mut report = FieldReport::valid();
        let mut other = FieldReport::valid();
        other.flag("problem");
        report.merge(other);
        assert!(!report.is_valid);
        assert_eq!(report.messages, vec!["problem".to_string()]);
    }

    #[test]
    fn test_serializes_camel_case() {
        let report = FieldReport::valid();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["isValid"], true);
        assert!(json["messages"].as_array().unwrap().is_empty());
    }
}
