// File: src/config.rs
// Purpose: Validator configuration, parsed from TOML

use serde::{Deserialize, Serialize};

use crate::error::{Result, ValidationError};
use crate::messages::Lang;
use crate::sanitize::SanitizeOptions;

/// Settings shared by every rule in a batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Language of the built-in messages
    pub lang: Lang,

    /// Fill absent outcome messages from the built-in tables
    #[serde(alias = "localizedDefaults")]
    pub localized_defaults: bool,

    /// Options used by the `string` kind
    pub sanitize: SanitizeOptions,
}

impl ValidatorConfig {
    /// Parse configuration from TOML text
    ///
    /// Empty text yields the defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        toml::from_str(content).map_err(|e| ValidationError::Config(e.to_string()))
    }

    pub fn with_lang(mut self, lang: Lang) -> Self {
        self.lang = lang;
        self
    }

    pub fn with_localized_defaults(mut self, enabled: bool) -> Self {
        self.localized_defaults = enabled;
        self
    }

    pub fn with_sanitize(mut self, sanitize: SanitizeOptions) -> Self {
        self.sanitize = sanitize;
        self
    }
}
