use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Contract ID encoding scheme.
///
/// Schemes differ in the lexical rules for the instance value; country code,
/// party code and the check digit position are shared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[non_exhaustive]
pub enum Scheme {
    /// DIN SPEC 91286: 6-character alphanumeric instance value.
    #[default]
    Din,
}

impl Scheme {
    /// Maximum length of the instance value.
    pub const fn instance_max_length(&self) -> usize {
        match self {
            Scheme::Din => 6,
        }
    }

    /// Regex fragment matching a complete instance value.
    pub fn instance_pattern(&self) -> &'static str {
        match self {
            Scheme::Din => "[A-Za-z0-9]{6}",
        }
    }

    /// Short human-readable scheme name.
    pub fn name(&self) -> &'static str {
        match self {
            Scheme::Din => "DIN",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown scheme name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown contract ID scheme '{0}'")]
pub struct UnknownSchemeError(pub String);

impl FromStr for Scheme {
    type Err = UnknownSchemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("din") {
            Ok(Scheme::Din)
        } else {
            Err(UnknownSchemeError(s.to_string()))
        }
    }
}
