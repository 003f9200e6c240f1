//! Normalization and validation of inbound payloads
//!
//! Every input schema is built by walking a JSON object field by field,
//! collecting all violations before reporting them together.

use serde_json::{Map, Value};

use crate::error::{ErrorKind, FieldError, ValidationError};
use crate::fields::Field;
use crate::types::GeoLocation;

/// Pseudo-field used when the payload itself is not a JSON object
pub const BODY_FIELD: &str = "body";

pub const GEO_LOCATION_SHAPE_MESSAGE: &str =
    "Invalid geoLocation format. Expecting {lat: float, lng: float}.";

/// An input shape that can be built from an untyped request payload
pub trait Schema: Sized {
    fn from_payload(payload: &Value) -> Result<Self, ValidationError>;
}

// ============================================================================
// String Rules
// ============================================================================

/// Length bounds and character class for a string field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringRule {
    pub min_len: Option<usize>,
    pub max_len: Option<usize>,
    pub digits_only: bool,
}

impl StringRule {
    const fn exact_digits(len: usize) -> Self {
        Self {
            min_len: Some(len),
            max_len: Some(len),
            digits_only: true,
        }
    }

    const fn bounded(min_len: usize, max_len: usize) -> Self {
        Self {
            min_len: Some(min_len),
            max_len: Some(max_len),
            digits_only: false,
        }
    }

    const fn at_most(max_len: usize) -> Self {
        Self {
            min_len: None,
            max_len: Some(max_len),
            digits_only: false,
        }
    }

    const fn unbounded() -> Self {
        Self {
            min_len: None,
            max_len: None,
            digits_only: false,
        }
    }

    /// Check length first, then character class. Length is counted in characters.
    /// The digit class is ASCII `0-9` only; other Unicode digits do not match.
    pub fn check(&self, value: &str) -> Result<(), (ErrorKind, String)> {
        let len = value.chars().count();
        let too_short = self.min_len.map_or(false, |min| len < min);
        let too_long = self.max_len.map_or(false, |max| len > max);
        if too_short || too_long {
            return Err((ErrorKind::LengthOutOfRange, self.length_message()));
        }
        if self.digits_only && !value.chars().all(|c| c.is_ascii_digit()) {
            return Err((ErrorKind::PatternMismatch, self.pattern_message()));
        }
        Ok(())
    }

    fn length_message(&self) -> String {
        match (self.min_len, self.max_len) {
            (Some(min), Some(max)) if min == max => {
                format!("must be exactly {} characters", min)
            }
            (Some(min), Some(max)) => format!("must be between {} and {} characters", min, max),
            (Some(min), None) => format!("must be at least {} characters", min),
            (None, Some(max)) => format!("must be at most {} characters", max),
            (None, None) => "has an invalid length".to_string(),
        }
    }

    fn pattern_message(&self) -> String {
        match self.max_len {
            Some(len) if self.min_len == Some(len) => format!("must be exactly {} digits", len),
            _ => "must contain only digits".to_string(),
        }
    }
}

pub const MOBILE_RULE: StringRule = StringRule::exact_digits(10);
pub const OTP_RULE: StringRule = StringRule::exact_digits(6);
pub const PIN_CODE_RULE: StringRule = StringRule::exact_digits(6);
pub const FULL_NAME_RULE: StringRule = StringRule::bounded(2, 100);
pub const AADHAAR_NUMBER_RULE: StringRule = StringRule::at_most(12);
pub const CROP_TYPE_RULE: StringRule = StringRule::at_most(50);
pub const CULTIVATION_UNIT_RULE: StringRule = StringRule::at_most(20);
pub const APPROXIMATE_PRODUCE_RULE: StringRule = StringRule::at_most(100);
pub const VILLAGE_RULE: StringRule = StringRule::at_most(100);
pub const DISTRICT_RULE: StringRule = StringRule::at_most(100);
pub const STATE_RULE: StringRule = StringRule::at_most(50);
/// Cultivation area is accepted as free text; numeric coercion happens downstream
pub const CULTIVATION_AREA_RULE: StringRule = StringRule::unbounded();
pub const FREE_TEXT_RULE: StringRule = StringRule::unbounded();

/// Validate a 10-digit mobile number
pub fn validate_mobile(mobile: &str) -> Result<(), &'static str> {
    MOBILE_RULE
        .check(mobile)
        .map_err(|_| "Mobile number must be exactly 10 digits")
}

/// Validate a 6-digit one-time code
pub fn validate_otp(otp: &str) -> Result<(), &'static str> {
    OTP_RULE
        .check(otp)
        .map_err(|_| "OTP must be exactly 6 digits")
}

/// Validate a 6-digit postal PIN code
pub fn validate_pin_code(pin_code: &str) -> Result<(), &'static str> {
    PIN_CODE_RULE
        .check(pin_code)
        .map_err(|_| "PIN code must be exactly 6 digits")
}

/// Validate email address syntax
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if validator::validate_email(email) {
        Ok(())
    } else {
        Err("Invalid email address")
    }
}

// ============================================================================
// Normalization
// ============================================================================

/// Empty or whitespace-only text becomes absent; anything else is kept untouched
pub fn blank_to_none(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Text of a string value. Numbers and other JSON types are not coerced.
fn string_text(value: &Value) -> Option<&str> {
    value.as_str()
}

// ============================================================================
// Payload Walking
// ============================================================================

/// Read-only view over an inbound JSON object
#[derive(Debug, Clone, Copy)]
pub struct Payload<'a> {
    map: &'a Map<String, Value>,
}

impl<'a> Payload<'a> {
    pub fn from_value(value: &'a Value) -> Result<Self, ValidationError> {
        match value {
            Value::Object(map) => Ok(Self { map }),
            _ => Err(ValidationError::single(
                BODY_FIELD,
                ErrorKind::MalformedStructure,
                "payload must be a JSON object",
            )),
        }
    }

    /// Raw value for a field, preferring the wire alias. `null` counts as absent.
    pub fn get(&self, field: Field) -> Option<&'a Value> {
        self.map
            .get(field.alias)
            .or_else(|| self.map.get(field.name))
            .filter(|v| !v.is_null())
    }
}

/// Collects field errors while a schema is being built
#[derive(Debug, Default)]
pub struct Checker {
    errors: Vec<FieldError>,
}

impl Checker {
    pub fn new() -> Self {
        Self::default()
    }

    fn reject(&mut self, field: Field, kind: ErrorKind, message: impl Into<String>) {
        self.errors.push(FieldError::new(field.alias, kind, message));
    }

    fn text(&mut self, field: Field, value: &Value) -> Option<String> {
        match string_text(value) {
            Some(text) => Some(text.to_string()),
            None => {
                self.reject(field, ErrorKind::MalformedStructure, "must be a string");
                None
            }
        }
    }

    fn apply(&mut self, field: Field, rule: StringRule, value: String) -> Option<String> {
        match rule.check(&value) {
            Ok(()) => Some(value),
            Err((kind, message)) => {
                self.reject(field, kind, message);
                None
            }
        }
    }

    /// A string field that must be present
    pub fn required(&mut self, payload: &Payload<'_>, field: Field, rule: StringRule) -> Option<String> {
        let Some(raw) = payload.get(field) else {
            self.reject(field, ErrorKind::MissingRequiredField, "field required");
            return None;
        };
        let text = self.text(field, raw)?;
        self.apply(field, rule, text)
    }

    /// An optional string field; blank values are normalized to absent before checks
    pub fn optional(&mut self, payload: &Payload<'_>, field: Field, rule: StringRule) -> Option<String> {
        let raw = payload.get(field)?;
        let text = blank_to_none(self.text(field, raw))?;
        self.apply(field, rule, text)
    }

    /// An optional `{lat, lng}` object; `{}` is normalized to absent
    pub fn geo_location(&mut self, payload: &Payload<'_>, field: Field) -> Option<GeoLocation> {
        let raw = payload.get(field)?;
        let parsed = match raw {
            Value::Object(map) if map.is_empty() => return None,
            Value::Object(map) if map.len() == 2 => {
                match (
                    map.get("lat").and_then(Value::as_f64),
                    map.get("lng").and_then(Value::as_f64),
                ) {
                    (Some(lat), Some(lng)) => Some(GeoLocation::new(lat, lng)),
                    _ => None,
                }
            }
            _ => None,
        };
        if parsed.is_none() {
            self.reject(field, ErrorKind::MalformedStructure, GEO_LOCATION_SHAPE_MESSAGE);
        }
        parsed
    }

    /// Record an externally detected violation
    pub fn push(&mut self, field: Field, kind: ErrorKind, message: impl Into<String>) {
        self.reject(field, kind, message);
    }

    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Produce the record if nothing was rejected, otherwise every collected error
    pub fn finish<T>(self, build: impl FnOnce() -> Option<T>) -> Result<T, ValidationError> {
        if !self.errors.is_empty() {
            return Err(ValidationError {
                errors: self.errors,
            });
        }
        // A clean checker implies every required field was produced
        build().ok_or_else(|| {
            ValidationError::single(
                BODY_FIELD,
                ErrorKind::MalformedStructure,
                "payload could not be assembled",
            )
        })
    }
}
