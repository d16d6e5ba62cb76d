//! Revalidation configuration.

use serde::Deserialize;

use crate::domain::locale::{Locale, default_locales};

const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:3000/__revalidate";

/// Runtime configuration for the revalidation coordinator.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RevalidationConfig {
    /// Master switch; when false, mutations skip invalidation entirely.
    pub enabled: bool,
    /// Ordered locale set; this order is the plan's emission order.
    pub locales: Vec<Locale>,
    /// The render layer's revalidation endpoint.
    pub endpoint: String,
}

impl Default for RevalidationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            locales: default_locales(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl RevalidationConfig {
    pub fn is_enabled(&self) -> bool {
        self.enabled && !self.locales.is_empty()
    }
}

impl From<&crate::config::RevalidationSettings> for RevalidationConfig {
    fn from(settings: &crate::config::RevalidationSettings) -> Self {
        Self {
            enabled: settings.enabled,
            locales: settings.locales.clone(),
            endpoint: settings.endpoint.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let config = RevalidationConfig::default();
        assert!(config.enabled);
        assert_eq!(config.locales.len(), 2);
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert!(config.is_enabled());
    }

    #[test]
    fn disabled_without_locales() {
        let config = RevalidationConfig {
            locales: Vec::new(),
            ..Default::default()
        };
        assert!(!config.is_enabled());
    }

    #[test]
    fn disabled_by_flag() {
        let config = RevalidationConfig {
            enabled: false,
            ..Default::default()
        };
        assert!(!config.is_enabled());
    }
}
