//! Input schemas, output projections and envelopes

mod admin;
mod farmer;
mod response;
mod token;

pub use admin::*;
pub use farmer::*;
pub use response::*;
pub use token::*;
