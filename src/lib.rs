//! # mobilityid
//!
//! Parsing, validation and canonical formatting of e-mobility contract IDs
//! (eMAIDs) following the DIN SPEC 91286 encoding.
//!
//! A contract ID is made of a 2-letter country code, a 3-character party
//! (provider) code, an instance value and a check digit, e.g. `NL-TNM-012204-5`.
//!
//! ## Quick Start
//!
//! ```rust
//! use mobilityid::din;
//!
//! let id = din::parse("nl*tnm*012204*5").unwrap();
//! assert_eq!(id.to_string(), "NL-TNM-012204-5");
//! assert_eq!(id.party_id(), "NL-TNM");
//!
//! let built = din::new_no_check_digit("NL", "TNM", "012204").unwrap();
//! assert_eq!(built, id);
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `din` (default) | DIN contract ID parser and constructors |
//!
//! The [`core`] module (value object, field validation, check digit,
//! country code table) is always available.

pub mod core;

#[cfg(feature = "din")]
pub mod din;

// Re-export core types at crate root for convenience
pub use crate::core::*;
