//! Locale codes for the public site.
//!
//! Every public path is prefixed with exactly one locale. The set of active
//! locales is configuration (`site.locales`), not a module constant, so the
//! revalidation planner can be exercised with arbitrary locale sets.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// A lowercase locale code such as `en` or `pt-br`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Locale(String);

impl Locale {
    /// Validate and construct a locale code.
    ///
    /// Accepts 2 to 8 characters of lowercase ASCII letters and hyphens,
    /// starting with a letter.
    pub fn new(code: &str) -> Result<Self, DomainError> {
        let valid = (2..=8).contains(&code.len())
            && code.starts_with(|c: char| c.is_ascii_lowercase())
            && code
                .chars()
                .all(|c| c.is_ascii_lowercase() || c == '-');
        if !valid {
            return Err(DomainError::invalid_locale(code));
        }
        Ok(Self(code.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Locale {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let code = String::deserialize(deserializer)?;
        Locale::new(&code).map_err(serde::de::Error::custom)
    }
}

/// The default locale set when configuration does not override it.
pub fn default_locales() -> Vec<Locale> {
    vec![
        Locale("en".to_string()),
        Locale("pt".to_string()),
    ]
}
