//! Validation error taxonomy shared by every input schema

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Machine-readable reason a field was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    #[serde(rename = "missing_required")]
    MissingRequiredField,
    #[serde(rename = "pattern_mismatch")]
    PatternMismatch,
    #[serde(rename = "length_out_of_range")]
    LengthOutOfRange,
    #[serde(rename = "malformed_structure")]
    MalformedStructure,
    #[serde(rename = "invalid_email_syntax")]
    InvalidEmailSyntax,
}

impl ErrorKind {
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::MissingRequiredField => "missing_required",
            ErrorKind::PatternMismatch => "pattern_mismatch",
            ErrorKind::LengthOutOfRange => "length_out_of_range",
            ErrorKind::MalformedStructure => "malformed_structure",
            ErrorKind::InvalidEmailSyntax => "invalid_email_syntax",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// A single rejected field, named by its wire alias
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    #[serde(rename = "code")]
    pub kind: ErrorKind,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            kind,
            message: message.into(),
        }
    }
}

/// Every violation found in one payload
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("payload failed validation on {} field(s)", .errors.len())]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    pub fn single(field: impl Into<String>, kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            errors: vec![FieldError::new(field, kind, message)],
        }
    }

    /// Errors reported against the given wire field
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a FieldError> + 'a {
        self.errors.iter().filter(move |e| e.field == field)
    }

    /// Errors of the given kind, in the order they were found
    pub fn of_kind(&self, kind: ErrorKind) -> impl Iterator<Item = &FieldError> + '_ {
        self.errors.iter().filter(move |e| e.kind == kind)
    }

    pub fn has(&self, field: &str, kind: ErrorKind) -> bool {
        self.for_field(field).any(|e| e.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_codes_match_serde_names() {
        for kind in [
            ErrorKind::MissingRequiredField,
            ErrorKind::PatternMismatch,
            ErrorKind::LengthOutOfRange,
            ErrorKind::MalformedStructure,
            ErrorKind::InvalidEmailSyntax,
        ] {
            let json = serde_json::to_value(kind).unwrap();
            assert_eq!(json, serde_json::Value::String(kind.code().to_string()));
        }
    }

    #[test]
    fn test_field_error_serializes_kind_as_code() {
        let err = FieldError::new("otp", ErrorKind::MissingRequiredField, "field required");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["field"], "otp");
        assert_eq!(json["code"], "missing_required");
        assert_eq!(json["message"], "field required");
    }

    #[test]
    fn test_validation_error_lookup() {
        let err = ValidationError {
            errors: vec![
                FieldError::new("mobile", ErrorKind::PatternMismatch, "digits only"),
                FieldError::new("otp", ErrorKind::MissingRequiredField, "field required"),
            ],
        };
        assert!(err.has("mobile", ErrorKind::PatternMismatch));
        assert!(!err.has("mobile", ErrorKind::LengthOutOfRange));
        assert_eq!(err.of_kind(ErrorKind::MissingRequiredField).count(), 1);
        assert_eq!(err.to_string(), "payload failed validation on 2 field(s)");
    }
}
