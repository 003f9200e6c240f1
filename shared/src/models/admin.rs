//! Admin login and profile models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ErrorKind, ValidationError};
use crate::fields;
use crate::validation::{self, Checker, Payload, Schema, FREE_TEXT_RULE};

/// Admin email/password credentials
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdminLogin {
    pub email: String,
    pub password: String,
}

impl Schema for AdminLogin {
    fn from_payload(payload: &Value) -> Result<Self, ValidationError> {
        let payload = Payload::from_value(payload)?;
        let mut checker = Checker::new();

        let email = checker
            .required(&payload, fields::EMAIL, FREE_TEXT_RULE)
            .and_then(|email| match validation::validate_email(&email) {
                Ok(()) => Some(email),
                Err(message) => {
                    checker.push(fields::EMAIL, ErrorKind::InvalidEmailSyntax, message);
                    None
                }
            });
        let password = checker.required(&payload, fields::PASSWORD, FREE_TEXT_RULE);

        checker.finish(|| {
            Some(Self {
                email: email?,
                password: password?,
            })
        })
    }
}

/// Stored admin account as returned by the persistence layer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdminProfile {
    pub id: String,
    pub email: String,
    pub full_name: Option<String>,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub last_login_at: Option<DateTime<Utc>>,
}
