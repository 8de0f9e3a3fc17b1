//! Integer to words conversion

use crate::{
    parse_config, ConverterConfig, Locale, NumberWordsError, Result, ScalePolicy, ScaleTable,
    StyleConfig,
};
use num_bigint::{BigInt, BigUint};
use num_traits::{FromPrimitive, Signed, Zero};
use std::borrow::Cow;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Converts integers of any size to English words
///
/// A converter is immutable after construction and can be shared freely
/// between threads.
///
/// # Examples
/// ```
/// use number_words::WordConverter;
///
/// let converter = WordConverter::british();
/// assert_eq!(converter.convert(0).unwrap(), "zero");
/// assert_eq!(converter.convert(115).unwrap(), "one hundred and fifteen");
/// assert_eq!(converter.convert(1_000_001).unwrap(), "one million one");
/// ```
#[derive(Debug, Clone)]
pub struct WordConverter {
    locale: Locale,
    units: &'static [&'static str; 20],
    tens: &'static [&'static str; 10],
    scales: ScaleTable,
    style: StyleConfig,
}

impl WordConverter {
    /// Create a converter for a locale with explicit style rules
    pub fn new(locale: Locale, style: StyleConfig, policy: ScalePolicy) -> Self {
        Self {
            locale,
            units: locale.units(),
            tens: locale.tens(),
            scales: ScaleTable::new(policy),
            style,
        }
    }

    /// British English with "and" after hundreds
    pub fn british() -> Self {
        Self::from_config(&ConverterConfig::for_locale(Locale::EnGb))
    }

    /// American English without "and"
    pub fn american() -> Self {
        Self::from_config(&ConverterConfig::for_locale(Locale::EnUs))
    }

    /// Create a converter from a resolved configuration
    pub fn from_config(config: &ConverterConfig) -> Self {
        let style = config.style();
        log::debug!(
            "building {} converter (and: {}, hyphens: {}, scales: {:?})",
            config.language,
            style.use_and,
            style.use_hyphens,
            config.scale_policy
        );
        Self::new(config.language, style, config.scale_policy)
    }

    /// Create a converter from a JSON configuration
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(Self::from_config(&parse_config(json)?))
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn style(&self) -> StyleConfig {
        self.style
    }

    pub fn scale_policy(&self) -> ScalePolicy {
        self.scales.policy()
    }

    /// Scale word for a base-1000 group index ("" for the ones group)
    pub fn scale_name(&self, index: usize) -> Option<Cow<'static, str>> {
        self.scales.name(index)
    }

    /// Convert an integer to words
    ///
    /// Fails with [`NumberWordsError::UnsupportedMagnitude`] when the number has
    /// more base-1000 groups than the strict scale table can name.
    pub fn convert<N: Into<BigInt>>(&self, number: N) -> Result<String> {
        self.convert_bigint(&number.into())
    }

    /// Convert an arbitrary-precision integer to words
    pub fn convert_bigint(&self, number: &BigInt) -> Result<String> {
        if number.is_zero() {
            return Ok(self.units[0].to_string());
        }

        let words = self.convert_magnitude(number.magnitude())?;
        if number.is_negative() {
            Ok(format!("{} {words}", self.locale.negative()))
        } else {
            Ok(words)
        }
    }

    /// Convert a decimal integer string such as `"-1234"` to words
    pub fn convert_str(&self, text: &str) -> Result<String> {
        let trimmed = text.trim();
        let digits = trimmed.strip_prefix(['-', '+']).unwrap_or(trimmed);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(NumberWordsError::InvalidInput(format!(
                "not a decimal integer: {text:?}"
            )));
        }

        let magnitude = BigUint::from_str(digits)
            .map_err(|e| NumberWordsError::InvalidInput(e.to_string()))?;
        let number = if trimmed.starts_with('-') {
            -BigInt::from(magnitude)
        } else {
            BigInt::from(magnitude)
        };
        self.convert_bigint(&number)
    }

    /// Convert a float that holds an exact integer value
    pub fn convert_f64(&self, value: f64) -> Result<String> {
        if !value.is_finite() {
            return Err(NumberWordsError::InvalidInput(format!(
                "non-finite value: {value}"
            )));
        }
        if value.fract() != 0.0 {
            return Err(NumberWordsError::InvalidInput(format!(
                "fractional value: {value}"
            )));
        }

        let number = BigInt::from_f64(value)
            .ok_or_else(|| NumberWordsError::InvalidInput(format!("unrepresentable: {value}")))?;
        self.convert_bigint(&number)
    }

    /// Count the letters in the words for `number`
    pub fn letter_count<N: Into<BigInt>>(&self, number: N) -> Result<usize> {
        Ok(count_letters(&self.convert(number)?))
    }

    /// Total letters used writing out every number in `range`
    ///
    /// `letter_total(1..=1000)` on a British converter is the Project Euler 17 answer.
    pub fn letter_total(&self, range: RangeInclusive<i64>) -> Result<usize> {
        range.map(|n| self.letter_count(n)).sum()
    }

    /// Count letters in any string; see [`count_letters`]
    pub fn count_letters(&self, words: &str) -> usize {
        count_letters(words)
    }

    fn convert_magnitude(&self, number: &BigUint) -> Result<String> {
        let groups = digit_groups(number);
        self.scales.ensure_groups(groups.len())?;

        let mut parts = Vec::with_capacity(groups.len());
        for (index, &group) in groups.iter().enumerate().rev() {
            if group == 0 {
                continue;
            }

            let mut words = self.convert_hundreds(group);
            if index > 0 {
                // ensure_groups guarantees a name for every index here
                if let Some(scale) = self.scales.name(index) {
                    words.push(' ');
                    words.push_str(&scale);
                }
            }
            parts.push(words);
        }

        Ok(parts.join(" "))
    }

    /// Words for a single group in 0..=999 (empty for 0)
    fn convert_hundreds(&self, group: u16) -> String {
        let group = usize::from(group);
        let hundreds = group / 100;
        let remainder = group % 100;
        let mut parts: Vec<String> = Vec::with_capacity(3);

        if hundreds > 0 {
            parts.push(format!("{} {}", self.units[hundreds], self.locale.hundred()));
        }

        if remainder > 0 {
            if hundreds > 0 && self.style.use_and {
                parts.push(self.locale.conjunction().to_string());
            }

            if remainder < 20 {
                parts.push(self.units[remainder].to_string());
            } else {
                let tens = self.tens[remainder / 10];
                match remainder % 10 {
                    0 => parts.push(tens.to_string()),
                    ones => {
                        let sep = if self.style.use_hyphens { '-' } else { ' ' };
                        parts.push(format!("{tens}{sep}{}", self.units[ones]));
                    }
                }
            }
        }

        parts.join(" ")
    }
}

impl Default for WordConverter {
    fn default() -> Self {
        Self::american()
    }
}

/// Count ASCII letters, ignoring spaces, hyphens and everything else
///
/// "and" is counted like any other word.
///
/// # Examples
/// ```
/// use number_words::count_letters;
/// assert_eq!(count_letters("three hundred and forty-two"), 23);
/// assert_eq!(count_letters("one hundred and fifteen"), 20);
/// ```
pub fn count_letters(words: &str) -> usize {
    words.chars().filter(char::is_ascii_alphabetic).count()
}

/// Split into base-1000 groups, least significant first
fn digit_groups(number: &BigUint) -> Vec<u16> {
    let thousand = BigUint::from(1000u32);
    let mut groups = Vec::new();
    let mut rest = number.clone();

    while !rest.is_zero() {
        let group = &rest % &thousand;
        groups.push(group.iter_u32_digits().next().unwrap_or(0) as u16);
        rest /= &thousand;
    }

    groups
}
