//! WebAssembly module for the Farmer Registry
//!
//! Runs the same normalization and validation as the backend inside the
//! registration form, so offline entries can be checked before they are
//! submitted.

use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

/// Outcome handed back to JavaScript as JSON
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Outcome {
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    errors: Vec<shared::FieldError>,
}

impl Outcome {
    fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| r#"{"valid":false}"#.to_string())
    }
}

fn run<T, F>(payload_json: &str, to_data: F) -> String
where
    T: Schema,
    F: FnOnce(&T) -> Value,
{
    let outcome = match serde_json::from_str::<Value>(payload_json) {
        Err(e) => Outcome {
            valid: false,
            data: None,
            errors: vec![shared::FieldError::new(
                BODY_FIELD,
                shared::ErrorKind::MalformedStructure,
                format!("Invalid JSON: {}", e),
            )],
        },
        Ok(payload) => match T::from_payload(&payload) {
            Ok(record) => Outcome {
                valid: true,
                data: Some(to_data(&record)),
                errors: Vec::new(),
            },
            Err(err) => Outcome {
                valid: false,
                data: None,
                errors: err.errors,
            },
        },
    };
    outcome.to_json()
}

/// Validate a registration form; `data` is the normalized camelCase payload
#[wasm_bindgen]
pub fn validate_farmer_registration(payload_json: &str) -> String {
    run::<FarmerRegistration, _>(payload_json, |reg| Value::Object(reg.to_wire()))
}

/// Validate an OTP login form
#[wasm_bindgen]
pub fn validate_otp_login(payload_json: &str) -> String {
    run::<FarmerOtpLogin, _>(payload_json, |login| {
        serde_json::to_value(login).unwrap_or(Value::Null)
    })
}

#[wasm_bindgen]
pub fn is_valid_mobile(mobile: &str) -> bool {
    validate_mobile(mobile).is_ok()
}

#[wasm_bindgen]
pub fn is_valid_otp(otp: &str) -> bool {
    validate_otp(otp).is_ok()
}

/// Blank PIN codes are accepted; the field is optional
#[wasm_bindgen]
pub fn is_valid_pin_code(pin_code: &str) -> bool {
    pin_code.trim().is_empty() || validate_pin_code(pin_code).is_ok()
}
