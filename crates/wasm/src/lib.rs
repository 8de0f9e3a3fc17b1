//! WASM bindings for number-words
//!
//! This crate provides a JavaScript-friendly API for:
//! - Converting integers (including arbitrarily large decimal strings) to words
//! - Counting letters in the result
//! - Totalling letters over a range (Project Euler 17)
//!
//! # Example (JavaScript)
//!
//! ```javascript
//! import init, { NumberWords } from 'number-words-wasm';
//!
//! await init();
//!
//! const british = NumberWords.british();
//! british.convert("342");          // "three hundred and forty-two"
//! british.convertNumber(115);      // "one hundred and fifteen"
//! british.letterTotal(1n, 1000n);  // 21124
//!
//! // Or configure explicitly
//! const words = NumberWords.fromConfig('{"language":"en-US","scalePolicy":"synthesize"}');
//! words.convert("1" + "0".repeat(63)); // "one vigintillion"
//! ```

use wasm_bindgen::prelude::*;

// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

fn to_js_error(e: number_words::NumberWordsError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Number to words converter
#[wasm_bindgen]
pub struct NumberWords {
    inner: number_words::WordConverter,
}

#[wasm_bindgen]
impl NumberWords {
    /// British English ("one hundred and one")
    pub fn british() -> NumberWords {
        NumberWords {
            inner: number_words::WordConverter::british(),
        }
    }

    /// American English ("one hundred one")
    pub fn american() -> NumberWords {
        NumberWords {
            inner: number_words::WordConverter::american(),
        }
    }

    /// Create converter from a JSON configuration
    ///
    /// @param json - e.g. `{"language":"en-GB","useHyphens":true,"scalePolicy":"strict"}`
    /// @returns NumberWords instance
    #[wasm_bindgen(js_name = fromConfig)]
    pub fn from_config(json: &str) -> Result<NumberWords, JsValue> {
        let inner = number_words::WordConverter::from_json(json).map_err(to_js_error)?;
        Ok(NumberWords { inner })
    }

    /// Language tag of this converter
    #[wasm_bindgen(getter)]
    pub fn language(&self) -> String {
        self.inner.locale().to_string()
    }

    /// Convert a decimal integer string to words
    ///
    /// @param text - Integer such as "-1234" (any number of digits)
    /// @returns Words (e.g., "negative one thousand two hundred thirty-four")
    pub fn convert(&self, text: &str) -> Result<String, JsValue> {
        self.inner.convert_str(text).map_err(to_js_error)
    }

    /// Convert a JavaScript number holding an integer value
    ///
    /// @param n - Integral number (NaN, Infinity and fractions are rejected)
    /// @returns Words
    #[wasm_bindgen(js_name = convertNumber)]
    pub fn convert_number(&self, n: f64) -> Result<String, JsValue> {
        self.inner.convert_f64(n).map_err(to_js_error)
    }

    /// Count letters, ignoring spaces and hyphens
    ///
    /// @param words - Any text
    /// @returns Number of ASCII letters
    #[wasm_bindgen(js_name = countLetters)]
    pub fn count_letters(&self, words: &str) -> usize {
        self.inner.count_letters(words)
    }

    /// Total letters used writing out every number from start to end inclusive
    ///
    /// @param start - First number
    /// @param end - Last number
    /// @returns Letter total
    #[wasm_bindgen(js_name = letterTotal)]
    pub fn letter_total(&self, start: i64, end: i64) -> Result<usize, JsValue> {
        self.inner.letter_total(start..=end).map_err(to_js_error)
    }
}

impl Default for NumberWords {
    fn default() -> Self {
        Self::american()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_british_converter() {
        let words = NumberWords::british();
        assert_eq!(words.language(), "en-GB");
        assert_eq!(words.convert("342").unwrap(), "three hundred and forty-two");
        assert_eq!(words.convert_number(115.0).unwrap(), "one hundred and fifteen");
        assert_eq!(words.count_letters("three hundred and forty-two"), 23);
    }

    #[wasm_bindgen_test]
    fn test_letter_total() {
        assert_eq!(NumberWords::british().letter_total(1, 5).unwrap(), 19);
        assert_eq!(NumberWords::american().letter_total(1, 1000).unwrap(), 18451);
    }

    #[wasm_bindgen_test]
    fn test_from_config() {
        let words = NumberWords::from_config(r#"{"scalePolicy":"synthesize"}"#).unwrap();
        let vigintillion = format!("1{}", "0".repeat(63));
        assert_eq!(words.convert(&vigintillion).unwrap(), "one vigintillion");
    }
}
