//! DIN SPEC 91286 contract IDs.
//!
//! A DIN contract ID has a 6-character alphanumeric instance value. In text
//! the fields may be separated by `-` or `*` (or not at all) and the check
//! digit may be omitted.
//!
//! # Example
//!
//! ```rust
//! use mobilityid::din;
//!
//! let id = din::parse("DE*ABC*1A2B3C*X").unwrap();
//! assert_eq!(id.to_string(), "DE-ABC-1A2B3C-X");
//!
//! // Without a check digit in the input, none is carried.
//! let id = din::parse("DE-ABC-1A2B3C").unwrap();
//! assert_eq!(id.check_digit(), None);
//! assert_eq!(id.computed_check_digit(), 'X');
//! ```

mod parse;

pub use parse::{INSTANCE_MAX_LENGTH, new_no_check_digit, new_with_check_digit, parse};
