//! Converter configuration

use crate::{Locale, NumberWordsError, Result, ScalePolicy};
use serde::{Deserialize, Serialize};

/// Separator rules applied inside a digit group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleConfig {
    /// Insert "and" between the hundreds word and a following tens/ones word
    pub use_and: bool,
    /// Join tens and ones with a hyphen ("twenty-one")
    pub use_hyphens: bool,
}

impl StyleConfig {
    /// British style: "one hundred and twenty-one"
    pub fn british() -> Self {
        Self {
            use_and: true,
            use_hyphens: true,
        }
    }

    /// American style: "one hundred twenty-one"
    pub fn american() -> Self {
        Self {
            use_and: false,
            use_hyphens: true,
        }
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self::american()
    }
}

/// Full construction-time configuration for a [`crate::WordConverter`]
///
/// ```json
/// { "language": "en-GB", "useHyphens": true, "scalePolicy": "synthesize" }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConverterConfig {
    /// Language tag selecting the word tables
    #[serde(default)]
    pub language: Locale,

    /// Overrides the locale's default for "and" after hundreds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_and: Option<bool>,

    #[serde(default = "default_use_hyphens")]
    pub use_hyphens: bool,

    #[serde(default)]
    pub scale_policy: ScalePolicy,
}

fn default_use_hyphens() -> bool {
    true
}

impl ConverterConfig {
    /// Configuration with the locale's defaults
    pub fn for_locale(language: Locale) -> Self {
        Self {
            language,
            ..Self::default()
        }
    }

    /// Resolve the style, falling back to the locale default for "and"
    pub fn style(&self) -> StyleConfig {
        StyleConfig {
            use_and: self.use_and.unwrap_or(self.language.default_use_and()),
            use_hyphens: self.use_hyphens,
        }
    }
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            language: Locale::default(),
            use_and: None,
            use_hyphens: default_use_hyphens(),
            scale_policy: ScalePolicy::default(),
        }
    }
}

/// Parse a converter configuration from JSON
pub fn parse_config(json: &str) -> Result<ConverterConfig> {
    serde_json::from_str(json).map_err(|e| NumberWordsError::Config(e.to_string()))
}
