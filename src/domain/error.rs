use thiserror::Error;

/// Errors raised while constructing domain value types.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("invalid locale code `{code}`")]
    InvalidLocale { code: String },
}

impl DomainError {
    pub fn invalid_locale(code: impl Into<String>) -> Self {
        Self::InvalidLocale { code: code.into() }
    }
}
