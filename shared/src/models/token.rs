//! Claims handed to the token issuer

use serde::{Deserialize, Serialize};

use crate::types::SubjectKind;

/// Subject data carried in an access token.
///
/// The subject is the mobile number for farmers and the email for admins.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenData {
    pub sub: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<SubjectKind>,
    pub user_id: Option<String>,
}

impl TokenData {
    pub fn farmer(mobile: impl Into<String>, user_id: Option<String>) -> Self {
        Self {
            sub: Some(mobile.into()),
            kind: Some(SubjectKind::Farmer),
            user_id,
        }
    }

    pub fn admin(email: impl Into<String>, user_id: Option<String>) -> Self {
        Self {
            sub: Some(email.into()),
            kind: Some(SubjectKind::Admin),
            user_id,
        }
    }
}
