//! Outbound success envelopes

use serde::{Deserialize, Serialize};

/// Generic operation result
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SuccessResponse {
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "Details")]
    pub details: String,
}

impl SuccessResponse {
    pub fn new(status: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            details: details.into(),
        }
    }
}

/// Result of a completed farmer registration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterSuccessResponse {
    pub success: bool,
    pub farmer_id: String,
}

impl RegisterSuccessResponse {
    pub fn registered(farmer_id: impl Into<String>) -> Self {
        Self {
            success: true,
            farmer_id: farmer_id.into(),
        }
    }
}
