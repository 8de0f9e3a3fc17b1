//! Locales and their static word tables

use crate::{NumberWordsError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// English words for 0-19 (teens are ordinary entries)
const ENGLISH_UNITS: [&str; 20] = [
    "zero",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

/// English multiples of ten; indices 0 and 1 are never used
const ENGLISH_TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// Supported language variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Locale {
    /// American English: "one hundred one"
    #[default]
    EnUs,
    /// British English: "one hundred and one"
    EnGb,
}

impl Locale {
    /// BCP 47 style tag for this locale
    pub fn tag(self) -> &'static str {
        match self {
            Locale::EnUs => "en-US",
            Locale::EnGb => "en-GB",
        }
    }

    /// Whether this locale writes "and" after hundreds by default
    pub fn default_use_and(self) -> bool {
        matches!(self, Locale::EnGb)
    }

    /// Words for 0-19
    pub fn units(self) -> &'static [&'static str; 20] {
        match self {
            Locale::EnUs | Locale::EnGb => &ENGLISH_UNITS,
        }
    }

    /// Words for each multiple of ten, indexed by the tens digit
    pub fn tens(self) -> &'static [&'static str; 10] {
        match self {
            Locale::EnUs | Locale::EnGb => &ENGLISH_TENS,
        }
    }

    /// The conjunction inserted after hundreds
    pub fn conjunction(self) -> &'static str {
        "and"
    }

    /// The word for the hundreds place
    pub fn hundred(self) -> &'static str {
        "hundred"
    }

    /// Prefix for negative numbers
    pub fn negative(self) -> &'static str {
        "negative"
    }
}

impl FromStr for Locale {
    type Err = NumberWordsError;

    /// Parse a language tag such as `en-GB`, `en_us` or `en`
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().replace('_', "-").to_ascii_lowercase();
        match normalized.as_str() {
            "en" | "en-us" => Ok(Locale::EnUs),
            "en-gb" | "en-uk" => Ok(Locale::EnGb),
            _ => Err(NumberWordsError::UnknownLocale(s.to_string())),
        }
    }
}

impl TryFrom<String> for Locale {
    type Error = NumberWordsError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.tag().to_string()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
