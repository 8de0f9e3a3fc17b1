//! Scale names for base-1000 digit groups
//!
//! Index 0 is the ones group and has no name, index 1 is "thousand",
//! index `k >= 2` is the `(k - 1)`-th "-illion" of the short scale.

use crate::{NumberWordsError, Result};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Built-in short-scale names, one per base-1000 group
pub const SHORT_SCALE: [&str; 14] = [
    "",
    "thousand",
    "million",
    "billion",
    "trillion",
    "quadrillion",
    "quintillion",
    "sextillion",
    "septillion",
    "octillion",
    "nonillion",
    "decillion",
    "undecillion",
    "duodecillion",
];

/// Stems for the first nine -illions, plus "n" for an empty chunk (1000 -> millinillion)
const SMALL_STEMS: [&str; 10] = [
    "n", "m", "b", "tr", "quadr", "quint", "sext", "sept", "oct", "non",
];

const UNIT_PREFIXES: [&str; 10] = [
    "", "un", "duo", "tre", "quattuor", "quinqua", "se", "septe", "octo", "nove",
];

/// Tens prefixes with the markers that modify a preceding unit prefix
const TENS_PREFIXES: [(&str, &str); 10] = [
    ("", ""),
    ("deci", "N"),
    ("viginti", "MS"),
    ("triginta", "NS"),
    ("quadraginta", "NS"),
    ("quinquaginta", "NS"),
    ("sexaginta", "N"),
    ("septuaginta", "N"),
    ("octoginta", "MX"),
    ("nonaginta", ""),
];

const HUNDREDS_PREFIXES: [(&str, &str); 10] = [
    ("", ""),
    ("centi", "NX"),
    ("ducenti", "N"),
    ("trecenti", "NS"),
    ("quadringenti", "NS"),
    ("quingenti", "NS"),
    ("sescenti", "N"),
    ("septingenti", "N"),
    ("octingenti", "MX"),
    ("nongenti", ""),
];

/// What to do when a number has more digit groups than known scale names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalePolicy {
    /// Fail with [`NumberWordsError::UnsupportedMagnitude`]
    #[default]
    Strict,
    /// Build further names with the Conway-Wechsler system
    Synthesize,
}

/// Ordered scale names with an overflow policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaleTable {
    names: &'static [&'static str],
    policy: ScalePolicy,
}

impl ScaleTable {
    /// Short-scale table ending at "duodecillion"
    pub fn new(policy: ScalePolicy) -> Self {
        Self {
            names: &SHORT_SCALE,
            policy,
        }
    }

    /// Number of built-in names (including the empty ones-group entry)
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn policy(&self) -> ScalePolicy {
        self.policy
    }

    /// Scale word for a group index, or `None` past the table under the strict policy
    pub fn name(&self, index: usize) -> Option<Cow<'static, str>> {
        if let Some(name) = self.names.get(index) {
            return Some(Cow::Borrowed(name));
        }
        match self.policy {
            ScalePolicy::Strict => None,
            ScalePolicy::Synthesize => {
                let name = synthesize_scale_name(index);
                log::trace!("synthesized scale name {name:?} for group {index}");
                Some(name)
            }
        }
    }

    /// Check that a number with `groups` base-1000 groups can be named
    pub fn ensure_groups(&self, groups: usize) -> Result<()> {
        if self.policy == ScalePolicy::Strict && groups > self.names.len() {
            return Err(NumberWordsError::UnsupportedMagnitude {
                groups,
                max_groups: self.names.len(),
            });
        }
        Ok(())
    }
}

impl Default for ScaleTable {
    fn default() -> Self {
        Self::new(ScalePolicy::default())
    }
}

/// Conway-Wechsler name for the scale of group `index`
///
/// # Examples
/// ```
/// use number_words::synthesize_scale_name;
/// assert_eq!(synthesize_scale_name(2), "million");
/// assert_eq!(synthesize_scale_name(21), "vigintillion");
/// assert_eq!(synthesize_scale_name(101), "centillion");
/// ```
pub fn synthesize_scale_name(index: usize) -> Cow<'static, str> {
    match index {
        0 => Cow::Borrowed(""),
        1 => Cow::Borrowed("thousand"),
        _ => Cow::Owned(illion_name(index - 1)),
    }
}

/// Name of the `n`-th -illion (n >= 1)
fn illion_name(n: usize) -> String {
    let mut chunks = Vec::new();
    let mut rest = n;
    while rest > 0 {
        chunks.push(rest % 1000);
        rest /= 1000;
    }

    let mut name = String::new();
    for &chunk in chunks.iter().rev() {
        push_chunk_stem(&mut name, chunk);
        name.push_str("illi");
    }
    name.push_str("on");
    name
}

fn push_chunk_stem(name: &mut String, chunk: usize) {
    if chunk < 10 {
        name.push_str(SMALL_STEMS[chunk]);
        return;
    }

    let (tens, tens_markers) = TENS_PREFIXES[chunk / 10 % 10];
    let (hundreds, hundreds_markers) = HUNDREDS_PREFIXES[chunk / 100];
    let markers = if tens.is_empty() {
        hundreds_markers
    } else {
        tens_markers
    };

    let start = name.len();
    name.push_str(&unit_prefix(chunk % 10, markers));
    name.push_str(tens);
    name.push_str(hundreds);

    // Tens and hundreds prefixes end in a vowel that "illi" replaces
    if name.len() > start && name.ends_with(['a', 'e', 'i', 'o']) {
        name.pop();
    }
}

fn unit_prefix(unit: usize, markers: &str) -> Cow<'static, str> {
    let base = UNIT_PREFIXES[unit];
    let suffix = match unit {
        3 if markers.contains('S') || markers.contains('X') => "s",
        6 if markers.contains('S') => "s",
        6 if markers.contains('X') => "x",
        7 | 9 if markers.contains('M') => "m",
        7 | 9 if markers.contains('N') => "n",
        _ => "",
    };
    if suffix.is_empty() {
        Cow::Borrowed(base)
    } else {
        Cow::Owned(format!("{base}{suffix}"))
    }
}
