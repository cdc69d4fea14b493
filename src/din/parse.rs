use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Deserializer};

use crate::core::codes::{CHECK_DIGIT_PATTERN, COUNTRY_CODE_PATTERN, PARTY_CODE_PATTERN};
use crate::core::{ContractId, ContractIdError, Result, Scheme, validate_fields};

const SCHEME: Scheme = Scheme::Din;

/// Maximum (and, in text, exact) length of a DIN instance value.
pub const INSTANCE_MAX_LENGTH: usize = SCHEME.instance_max_length();

/// `country sep? party sep? instance (sep? check)?` with `sep` one of `*`, `-`.
static DIN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        "^(?P<country>{COUNTRY_CODE_PATTERN})[*-]?(?P<party>{PARTY_CODE_PATTERN})[*-]?\
         (?P<instance>{})(?:[*-]?(?P<check>{CHECK_DIGIT_PATTERN}))?$",
        SCHEME.instance_pattern()
    ))
    .expect("Failed to compile DIN_REGEX")
});

/// Same layout with an instance value of any length. A check digit must be
/// separated here, otherwise it could not be told apart from the instance.
static DIAGNOSTIC_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        "^(?P<country>{COUNTRY_CODE_PATTERN})[*-]?(?P<party>{PARTY_CODE_PATTERN})[*-]?\
         (?P<instance>[A-Za-z0-9]+)(?:[*-](?P<check>{CHECK_DIGIT_PATTERN}))?$"
    ))
    .expect("Failed to compile DIAGNOSTIC_REGEX")
});

/// Build a DIN contract ID from its fields, computing the check digit.
///
/// Fields are validated as supplied and stored uppercase.
pub fn new_no_check_digit(
    country_code: &str,
    party_code: &str,
    instance_value: &str,
) -> Result<ContractId> {
    ContractId::new(SCHEME, country_code, party_code, instance_value)
}

/// Build a DIN contract ID from its fields and verify the given check digit.
pub fn new_with_check_digit(
    country_code: &str,
    party_code: &str,
    instance_value: &str,
    check_digit: char,
) -> Result<ContractId> {
    ContractId::with_check_digit(SCHEME, country_code, party_code, instance_value, check_digit)
}

/// Parse a DIN contract ID such as `NL-TNM-012204-5`, `nl*tnm*012204` or `NLTNM0122045`.
///
/// Fields are upcased before validation. If the input carries a check digit it
/// must match the computed one (case-insensitive) and is kept, uppercase, on
/// the returned ID; otherwise the returned ID carries none (see
/// [`ContractId::computed_check_digit`]).
///
/// Inputs that are shaped like a contract ID but have an instance value of the
/// wrong length fail with the field error rather than
/// [`ContractIdError::NotAnIdentifier`].
pub fn parse(input: &str) -> Result<ContractId> {
    let Some(caps) = DIN_REGEX.captures(input) else {
        return Err(diagnose(input));
    };

    let country_code = required_group(&caps, "country", input)?;
    let party_code = required_group(&caps, "party", input)?;
    let instance_value = required_group(&caps, "instance", input)?;
    let check_digit = caps.name("check").and_then(|m| m.as_str().chars().next());

    if let Err(err) = validate_fields(
        &country_code,
        &party_code,
        &instance_value,
        INSTANCE_MAX_LENGTH,
    ) {
        tracing::debug!(input, %err, "rejected DIN contract ID");
        return Err(err);
    }

    let id = ContractId::from_validated(SCHEME, country_code, party_code, instance_value);
    let id = match check_digit {
        Some(check_digit) => {
            id.verify_check_digit(check_digit)?;
            id.with_computed_check_digit()
        }
        None => id,
    };

    tracing::trace!(input, %id, "parsed DIN contract ID");
    Ok(id)
}

fn required_group(caps: &Captures<'_>, name: &str, input: &str) -> Result<String> {
    caps.name(name)
        .map(|m| m.as_str().to_ascii_uppercase())
        .ok_or_else(|| not_an_identifier(input))
}

/// Pick the most precise error for input the DIN pattern rejected.
fn diagnose(input: &str) -> ContractIdError {
    if let Some(caps) = DIAGNOSTIC_REGEX.captures(input) {
        let field = |name: &str| {
            caps.name(name)
                .map(|m| m.as_str().to_ascii_uppercase())
                .unwrap_or_default()
        };
        if let Err(err) = validate_fields(
            &field("country"),
            &field("party"),
            &field("instance"),
            INSTANCE_MAX_LENGTH,
        ) {
            tracing::debug!(input, %err, "rejected DIN contract ID");
            return err;
        }
    }

    tracing::debug!(input, "not a DIN contract ID");
    not_an_identifier(input)
}

fn not_an_identifier(input: &str) -> ContractIdError {
    ContractIdError::NotAnIdentifier {
        scheme: SCHEME.name(),
        input: input.to_string(),
    }
}

impl FromStr for ContractId {
    type Err = ContractIdError;

    fn from_str(s: &str) -> Result<Self> {
        parse(s)
    }
}

impl TryFrom<&str> for ContractId {
    type Error = ContractIdError;

    fn try_from(value: &str) -> Result<Self> {
        parse(value)
    }
}

impl TryFrom<String> for ContractId {
    type Error = ContractIdError;

    fn try_from(value: String) -> Result<Self> {
        parse(&value)
    }
}

impl<'de> Deserialize<'de> for ContractId {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse(&s).map_err(serde::de::Error::custom)
    }
}
