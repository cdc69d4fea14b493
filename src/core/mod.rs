//! Core contract ID types, field validation and check digit.
//!
//! Everything in here is scheme-agnostic except for the parameters carried
//! by [`Scheme`]. Parsers for concrete textual encodings live in their own
//! feature-gated modules.

mod check_digit;
pub mod codes;
mod contract_id;
mod error;
mod scheme;
mod validation;

pub use check_digit::*;
pub use codes::is_valid_country_code;
pub use contract_id::*;
pub use error::*;
pub use scheme::*;
pub use validation::*;
