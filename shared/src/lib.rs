//! Shared schemas for the Farmer Registry
//!
//! Field constraints, camelCase/snake_case aliasing and response envelopes
//! used by the backend and, via WASM, by the registration form.

pub mod error;
pub mod fields;
pub mod models;
pub mod types;
pub mod validation;

pub use error::*;
pub use models::*;
pub use types::*;
pub use validation::*;
