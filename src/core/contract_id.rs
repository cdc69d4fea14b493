use std::fmt;

use serde::{Serialize, Serializer};

use super::check_digit::compute_check_digit;
use super::error::{ContractIdError, Result};
use super::scheme::Scheme;
use super::validation::validate_fields;

/// An e-mobility contract ID.
///
/// Immutable once built. All fields are stored uppercase. The check digit is
/// optional: IDs built from fields always carry the computed one, parsed IDs
/// carry it only if the input did. When present it is always the computed
/// value. Use [`ContractId::new`] or the scheme parsers (e.g. `din::parse`)
/// to obtain one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContractId {
    scheme: Scheme,
    country_code: String,
    party_code: String,
    instance_value: String,
    check_digit: Option<char>,
}

impl ContractId {
    /// Build a contract ID from separate fields, computing its check digit.
    ///
    /// Fields are validated as supplied (see [`validate_fields`]) and stored
    /// uppercase.
    pub fn new(
        scheme: Scheme,
        country_code: &str,
        party_code: &str,
        instance_value: &str,
    ) -> Result<Self> {
        if let Err(err) = validate_fields(
            country_code,
            party_code,
            instance_value,
            scheme.instance_max_length(),
        ) {
            tracing::debug!(
                %scheme,
                country_code,
                party_code,
                instance_value,
                %err,
                "rejected contract ID fields"
            );
            return Err(err);
        }

        Ok(Self::from_validated(
            scheme,
            country_code.to_ascii_uppercase(),
            party_code.to_ascii_uppercase(),
            instance_value.to_ascii_uppercase(),
        )
        .with_computed_check_digit())
    }

    /// Build a contract ID and verify the supplied check digit against the computed one.
    ///
    /// The comparison is case-insensitive, so `x` is accepted for `X`.
    pub fn with_check_digit(
        scheme: Scheme,
        country_code: &str,
        party_code: &str,
        instance_value: &str,
        check_digit: char,
    ) -> Result<Self> {
        let id = Self::new(scheme, country_code, party_code, instance_value)?;
        id.verify_check_digit(check_digit)?;
        Ok(id)
    }

    /// Assemble an already validated, uppercased set of fields, without check digit.
    pub(crate) fn from_validated(
        scheme: Scheme,
        country_code: String,
        party_code: String,
        instance_value: String,
    ) -> Self {
        Self {
            scheme,
            country_code,
            party_code,
            instance_value,
            check_digit: None,
        }
    }

    /// Fail with [`ContractIdError::CheckDigitMismatch`] unless `candidate`
    /// equals the computed check digit (case-insensitive). The error reports
    /// `candidate` as supplied.
    pub(crate) fn verify_check_digit(&self, candidate: char) -> Result<()> {
        let computed = self.computed_check_digit();
        if candidate.to_ascii_uppercase() != computed {
            tracing::debug!(id = %self, provided = %candidate, %computed, "check digit mismatch");
            return Err(ContractIdError::CheckDigitMismatch {
                provided: candidate,
                computed,
            });
        }
        Ok(())
    }

    /// Same ID carrying its computed check digit.
    pub fn with_computed_check_digit(self) -> Self {
        let check_digit = Some(self.computed_check_digit());
        Self {
            check_digit,
            ..self
        }
    }

    /// Same ID without check digit.
    pub fn without_check_digit(self) -> Self {
        Self {
            check_digit: None,
            ..self
        }
    }

    /// Check digit computed from the other fields, whether or not this ID carries it.
    pub fn computed_check_digit(&self) -> char {
        compute_check_digit(&self.to_compact_string_no_check_digit())
    }

    /// Encoding scheme this ID was built for.
    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    /// 2-letter country code.
    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    /// 3-character party code.
    pub fn party_code(&self) -> &str {
        &self.party_code
    }

    /// Instance value.
    pub fn instance_value(&self) -> &str {
        &self.instance_value
    }

    /// Check digit, if this ID carries one.
    pub fn check_digit(&self) -> Option<char> {
        self.check_digit
    }

    /// Whether this ID (and therefore its string forms) carries a check digit.
    pub fn has_check_digit(&self) -> bool {
        self.check_digit.is_some()
    }

    /// Party ID, e.g. `NL-TNM`.
    pub fn party_id(&self) -> String {
        format!("{}-{}", self.country_code, self.party_code)
    }

    /// Party ID without separator, e.g. `NLTNM`.
    pub fn compact_party_id(&self) -> String {
        format!("{}{}", self.country_code, self.party_code)
    }

    /// Canonical form without separators, e.g. `NLTNM0122045`.
    pub fn to_compact_string(&self) -> String {
        self.to_string().replace('-', "")
    }

    /// Canonical form without separators nor check digit, e.g. `NLTNM012204`.
    ///
    /// Never shortens the instance value, also when no check digit is present.
    pub fn to_compact_string_no_check_digit(&self) -> String {
        format!(
            "{}{}{}",
            self.country_code, self.party_code, self.instance_value
        )
    }
}

impl fmt::Display for ContractId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}",
            self.country_code, self.party_code, self.instance_value
        )?;
        if let Some(check_digit) = self.check_digit {
            write!(f, "-{check_digit}")?;
        }
        Ok(())
    }
}

impl Serialize for ContractId {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
