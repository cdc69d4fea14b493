use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The contract ID field an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// 2-letter ISO 3166-1 alpha-2 country code.
    CountryCode,
    /// 3-character party (provider) code.
    PartyCode,
    /// Scheme-specific instance value.
    InstanceValue,
}

impl Field {
    /// Snake-case field name, as used in error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::CountryCode => "country_code",
            Field::PartyCode => "party_code",
            Field::InstanceValue => "instance_value",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur while constructing or parsing a contract ID.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ContractIdError {
    /// A field was empty.
    #[error("{field} is required")]
    RequiredFieldMissing {
        /// The empty field.
        field: Field,
    },

    /// A field's length is outside its allowed range.
    #[error("{field} '{value}' must be {} characters long", length_range(.min, .max))]
    InvalidLength {
        /// The offending field.
        field: Field,
        /// The value as supplied.
        value: String,
        /// Minimum allowed length (inclusive).
        min: usize,
        /// Maximum allowed length (inclusive).
        max: usize,
    },

    /// A field contains characters outside its alphabet.
    #[error("{field} '{value}' must only contain ASCII letters and digits")]
    InvalidCharacters {
        /// The offending field.
        field: Field,
        /// The value as supplied.
        value: String,
    },

    /// The country code is not in the ISO 3166-1 alpha-2 table.
    #[error("country code '{value}' is not valid")]
    InvalidCountryCode {
        /// The country code as supplied.
        value: String,
    },

    /// A supplied or parsed check digit differs from the computed one.
    #[error("provided check digit '{provided}' doesn't match computed one '{computed}'")]
    CheckDigitMismatch {
        /// Check digit found in the input.
        provided: char,
        /// Check digit computed from the other fields.
        computed: char,
    },

    /// The input text does not have the shape of a contract ID at all.
    #[error("not a {scheme} contract ID: '{input}'")]
    NotAnIdentifier {
        /// Name of the scheme the input was parsed against.
        scheme: &'static str,
        /// The raw input.
        input: String,
    },
}

impl ContractIdError {
    /// The field this error refers to, if it is about a single field.
    pub fn field(&self) -> Option<Field> {
        match self {
            ContractIdError::RequiredFieldMissing { field }
            | ContractIdError::InvalidLength { field, .. }
            | ContractIdError::InvalidCharacters { field, .. } => Some(*field),
            ContractIdError::InvalidCountryCode { .. } => Some(Field::CountryCode),
            ContractIdError::CheckDigitMismatch { .. }
            | ContractIdError::NotAnIdentifier { .. } => None,
        }
    }
}

fn length_range(min: &usize, max: &usize) -> String {
    if min == max {
        format!("exactly {min}")
    } else {
        format!("between {min} and {max}")
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T, E = ContractIdError> = std::result::Result<T, E>;
