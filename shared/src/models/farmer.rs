//! Farmer registration, OTP login and profile models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ValidationError;
use crate::fields::{self, Field};
use crate::types::GeoLocation;
use crate::validation::{
    Checker, Payload, Schema, APPROXIMATE_PRODUCE_RULE, AADHAAR_NUMBER_RULE, CROP_TYPE_RULE,
    CULTIVATION_AREA_RULE, CULTIVATION_UNIT_RULE, DISTRICT_RULE, FULL_NAME_RULE, MOBILE_RULE,
    OTP_RULE, PIN_CODE_RULE, STATE_RULE, VILLAGE_RULE,
};

/// A validated farmer registration request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FarmerRegistration {
    pub mobile: String,
    pub otp: String,
    pub full_name: String,
    pub aadhaar_number: Option<String>,
    pub crop_type: Option<String>,
    /// Free text on input; the stored profile carries it as a number
    pub cultivation_area: Option<String>,
    pub cultivation_unit: Option<String>,
    pub approximate_produce: Option<String>,
    pub pin_code: Option<String>,
    pub village: Option<String>,
    pub district: Option<String>,
    pub state: Option<String>,
    pub geo_location: Option<GeoLocation>,
}

impl Schema for FarmerRegistration {
    fn from_payload(payload: &Value) -> Result<Self, ValidationError> {
        let payload = Payload::from_value(payload)?;
        let mut checker = Checker::new();

        let mobile = checker.required(&payload, fields::MOBILE, MOBILE_RULE);
        let otp = checker.required(&payload, fields::OTP, OTP_RULE);
        let full_name = checker.required(&payload, fields::FULL_NAME, FULL_NAME_RULE);

        let aadhaar_number = checker.optional(&payload, fields::AADHAAR_NUMBER, AADHAAR_NUMBER_RULE);
        let crop_type = checker.optional(&payload, fields::CROP_TYPE, CROP_TYPE_RULE);
        let cultivation_area =
            checker.optional(&payload, fields::CULTIVATION_AREA, CULTIVATION_AREA_RULE);
        let cultivation_unit =
            checker.optional(&payload, fields::CULTIVATION_UNIT, CULTIVATION_UNIT_RULE);
        let approximate_produce =
            checker.optional(&payload, fields::APPROXIMATE_PRODUCE, APPROXIMATE_PRODUCE_RULE);
        let pin_code = checker.optional(&payload, fields::PIN_CODE, PIN_CODE_RULE);
        let village = checker.optional(&payload, fields::VILLAGE, VILLAGE_RULE);
        let district = checker.optional(&payload, fields::DISTRICT, DISTRICT_RULE);
        let state = checker.optional(&payload, fields::STATE, STATE_RULE);
        let geo_location = checker.geo_location(&payload, fields::GEO_LOCATION);

        checker.finish(|| {
            Some(Self {
                mobile: mobile?,
                otp: otp?,
                full_name: full_name?,
                aadhaar_number,
                crop_type,
                cultivation_area,
                cultivation_unit,
                approximate_produce,
                pin_code,
                village,
                district,
                state,
                geo_location,
            })
        })
    }
}

impl FarmerRegistration {
    fn wire_values(&self) -> [(Field, Option<Value>); 13] {
        let text = |v: &Option<String>| v.clone().map(Value::String);
        [
            (fields::MOBILE, Some(Value::String(self.mobile.clone()))),
            (fields::OTP, Some(Value::String(self.otp.clone()))),
            (fields::FULL_NAME, Some(Value::String(self.full_name.clone()))),
            (fields::AADHAAR_NUMBER, text(&self.aadhaar_number)),
            (fields::CROP_TYPE, text(&self.crop_type)),
            (fields::CULTIVATION_AREA, text(&self.cultivation_area)),
            (fields::CULTIVATION_UNIT, text(&self.cultivation_unit)),
            (fields::APPROXIMATE_PRODUCE, text(&self.approximate_produce)),
            (fields::PIN_CODE, text(&self.pin_code)),
            (fields::VILLAGE, text(&self.village)),
            (fields::DISTRICT, text(&self.district)),
            (fields::STATE, text(&self.state)),
            (
                fields::GEO_LOCATION,
                self.geo_location.and_then(|g| serde_json::to_value(g).ok()),
            ),
        ]
    }

    /// Camel-case wire form containing only the fields that are present
    pub fn to_wire(&self) -> Map<String, Value> {
        self.wire_values()
            .into_iter()
            .filter_map(|(field, value)| value.map(|v| (field.alias.to_string(), v)))
            .collect()
    }

    /// Mobile and OTP pair, as handed to the OTP verifier
    pub fn otp_login(&self) -> FarmerOtpLogin {
        FarmerOtpLogin {
            mobile: self.mobile.clone(),
            otp: self.otp.clone(),
        }
    }
}

/// A validated OTP login request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FarmerOtpLogin {
    pub mobile: String,
    pub otp: String,
}

impl Schema for FarmerOtpLogin {
    fn from_payload(payload: &Value) -> Result<Self, ValidationError> {
        let payload = Payload::from_value(payload)?;
        let mut checker = Checker::new();

        let mobile = checker.required(&payload, fields::MOBILE, MOBILE_RULE);
        let otp = checker.required(&payload, fields::OTP, OTP_RULE);

        checker.finish(|| {
            Some(Self {
                mobile: mobile?,
                otp: otp?,
            })
        })
    }
}

/// A request for a one-time code to be sent to a mobile number
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PhoneInput {
    pub mobile_number: String,
}

impl Schema for PhoneInput {
    fn from_payload(payload: &Value) -> Result<Self, ValidationError> {
        let payload = Payload::from_value(payload)?;
        let mut checker = Checker::new();

        let mobile_number = checker.required(&payload, fields::MOBILE_NUMBER, MOBILE_RULE);

        checker.finish(|| {
            Some(Self {
                mobile_number: mobile_number?,
            })
        })
    }
}

/// Stored farmer record as returned by the persistence layer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FarmerProfile {
    pub id: String,
    pub full_name: String,
    pub mobile_number: String,
    pub aadhaar_number: Option<String>,
    pub crop_type: Option<String>,
    pub village: Option<String>,
    pub district: Option<String>,
    pub state: Option<String>,
    pub pin_code: Option<String>,
    pub cultivation_area: Option<f64>,
    pub cultivation_unit: Option<String>,
    pub approximate_produce: Option<String>,
    pub geo_location: Option<GeoLocation>,
    pub registered_at: DateTime<Utc>,
    pub status: Option<String>,
    pub role: Option<String>,
}
