//! Number Words - integer to English words conversion
//!
//! This crate provides:
//! - Cardinal words for integers of any size ("one hundred and forty-two")
//! - British and American style rules ("and" after hundreds, hyphenated tens)
//! - Short-scale names with optional Conway-Wechsler synthesis past "duodecillion"
//! - Letter counting (Project Euler 17 style)
//! - JSON configuration loading
//!
//! # Example
//!
//! ```
//! use number_words::{count_letters, WordConverter};
//!
//! let british = WordConverter::british();
//! let words = british.convert(342).unwrap();
//! assert_eq!(words, "three hundred and forty-two");
//! assert_eq!(count_letters(&words), 23);
//!
//! let american = WordConverter::american();
//! assert_eq!(american.convert(-1_000_001).unwrap(), "negative one million one");
//! ```

mod config;
mod converter;
mod locale;
mod scale;

pub use config::{parse_config, ConverterConfig, StyleConfig};
pub use converter::{count_letters, WordConverter};
pub use locale::Locale;
pub use scale::{synthesize_scale_name, ScalePolicy, ScaleTable, SHORT_SCALE};

use thiserror::Error;

/// Errors that can occur during number conversion
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NumberWordsError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unsupported magnitude: {groups} digit groups exceed the {max_groups} known scale names")]
    UnsupportedMagnitude { groups: usize, max_groups: usize },

    #[error("Unknown locale: {0}")]
    UnknownLocale(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Result type for number conversion operations
pub type Result<T> = std::result::Result<T, NumberWordsError>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_error_messages() {
        let err = NumberWordsError::UnsupportedMagnitude {
            groups: 15,
            max_groups: 14,
        };
        assert_eq!(
            err.to_string(),
            "Unsupported magnitude: 15 digit groups exceed the 14 known scale names"
        );
        assert_eq!(
            NumberWordsError::InvalidInput("NaN".into()).to_string(),
            "Invalid input: NaN"
        );
    }

    #[test]
    fn test_reexports() {
        let converter = WordConverter::default();
        assert_eq!(converter.convert(21).unwrap(), "twenty-one");
        assert_eq!(count_letters("twenty-one"), 9);
    }
}
