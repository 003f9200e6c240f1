//! Field-name table mapping internal snake_case names to camelCase wire aliases
//!
//! Inbound payloads are keyed by alias; records built from an internal
//! source may use the snake_case name instead. When both keys are present
//! the alias wins.

/// One field of an input schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Field {
    pub name: &'static str,
    pub alias: &'static str,
}

impl Field {
    const fn new(name: &'static str, alias: &'static str) -> Self {
        Self { name, alias }
    }
}

pub const MOBILE: Field = Field::new("mobile", "mobile");
pub const OTP: Field = Field::new("otp", "otp");
pub const FULL_NAME: Field = Field::new("full_name", "fullName");
pub const AADHAAR_NUMBER: Field = Field::new("aadhaar_number", "aadhaarNumber");
pub const CROP_TYPE: Field = Field::new("crop_type", "cropType");
pub const CULTIVATION_AREA: Field = Field::new("cultivation_area", "cultivationArea");
pub const CULTIVATION_UNIT: Field = Field::new("cultivation_unit", "cultivationUnit");
pub const APPROXIMATE_PRODUCE: Field = Field::new("approximate_produce", "approximateProduce");
pub const PIN_CODE: Field = Field::new("pin_code", "pinCode");
pub const VILLAGE: Field = Field::new("village", "village");
pub const DISTRICT: Field = Field::new("district", "district");
pub const STATE: Field = Field::new("state", "state");
pub const GEO_LOCATION: Field = Field::new("geo_location", "geoLocation");

pub const MOBILE_NUMBER: Field = Field::new("mobile_number", "mobileNumber");
pub const EMAIL: Field = Field::new("email", "email");
pub const PASSWORD: Field = Field::new("password", "password");

/// Farmer registration fields in wire order
pub const FARMER_REGISTRATION_FIELDS: &[Field] = &[
    MOBILE,
    OTP,
    FULL_NAME,
    AADHAAR_NUMBER,
    CROP_TYPE,
    CULTIVATION_AREA,
    CULTIVATION_UNIT,
    APPROXIMATE_PRODUCE,
    PIN_CODE,
    VILLAGE,
    DISTRICT,
    STATE,
    GEO_LOCATION,
];

/// Optional free-text registration fields subject to blank-to-absent normalization
pub const OPTIONAL_TEXT_FIELDS: &[Field] = &[
    AADHAAR_NUMBER,
    CROP_TYPE,
    CULTIVATION_AREA,
    CULTIVATION_UNIT,
    APPROXIMATE_PRODUCE,
    PIN_CODE,
    VILLAGE,
    DISTRICT,
    STATE,
];

const ALL_FIELDS: &[Field] = &[
    MOBILE,
    OTP,
    FULL_NAME,
    AADHAAR_NUMBER,
    CROP_TYPE,
    CULTIVATION_AREA,
    CULTIVATION_UNIT,
    APPROXIMATE_PRODUCE,
    PIN_CODE,
    VILLAGE,
    DISTRICT,
    STATE,
    GEO_LOCATION,
    MOBILE_NUMBER,
    EMAIL,
    PASSWORD,
];

/// Wire alias for an internal field name
pub fn alias_for(name: &str) -> Option<&'static str> {
    ALL_FIELDS.iter().find(|f| f.name == name).map(|f| f.alias)
}

/// Internal field name for a wire alias
pub fn name_for(alias: &str) -> Option<&'static str> {
    ALL_FIELDS.iter().find(|f| f.alias == alias).map(|f| f.name)
}
