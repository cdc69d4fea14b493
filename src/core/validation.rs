use super::codes::is_valid_country_code;
use super::error::{ContractIdError, Field, Result};

/// Length of a country code.
pub const COUNTRY_CODE_LENGTH: usize = 2;

/// Length of a party code.
pub const PARTY_CODE_LENGTH: usize = 3;

/// Validate the three contract ID fields, independent of any check digit.
///
/// Fields are checked in order country, party, instance. Each field must be
/// present and of the right length; the country code must then be in the
/// table, party and instance values must be ASCII alphanumeric.
/// The first failure is returned. Inputs are taken as supplied, so a lowercase
/// country code is rejected by the table lookup.
pub fn validate_fields(
    country_code: &str,
    party_code: &str,
    instance_value: &str,
    instance_max_length: usize,
) -> Result<()> {
    // Anything of the right length that is not in the table, whatever its
    // characters, is an unknown country code.
    validate_length(
        Field::CountryCode,
        country_code,
        COUNTRY_CODE_LENGTH,
        COUNTRY_CODE_LENGTH,
    )?;
    if !is_valid_country_code(country_code) {
        return Err(ContractIdError::InvalidCountryCode {
            value: country_code.to_string(),
        });
    }

    validate_length(
        Field::PartyCode,
        party_code,
        PARTY_CODE_LENGTH,
        PARTY_CODE_LENGTH,
    )?;
    validate_charset(Field::PartyCode, party_code)?;

    validate_length(
        Field::InstanceValue,
        instance_value,
        1,
        instance_max_length,
    )?;
    validate_charset(Field::InstanceValue, instance_value)?;

    Ok(())
}

fn validate_length(field: Field, value: &str, min: usize, max: usize) -> Result<()> {
    if value.is_empty() {
        return Err(ContractIdError::RequiredFieldMissing { field });
    }

    let len = value.chars().count();
    if !(min..=max).contains(&len) {
        return Err(ContractIdError::InvalidLength {
            field,
            value: value.to_string(),
            min,
            max,
        });
    }

    Ok(())
}

fn validate_charset(field: Field, value: &str) -> Result<()> {
    if !value.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ContractIdError::InvalidCharacters {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}
