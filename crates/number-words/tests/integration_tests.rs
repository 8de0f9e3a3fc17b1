//! Integration tests for number to words conversion

use num_bigint::BigInt;
use number_words::{
    count_letters, Locale, NumberWordsError, ScalePolicy, StyleConfig, WordConverter,
};
use pretty_assertions::assert_eq;

#[test]
fn test_euler_17_british_total() {
    let converter = WordConverter::british();
    assert_eq!(converter.letter_total(1..=1000).unwrap(), 21124);
}

#[test]
fn test_euler_17_american_total() {
    // 891 numbers in 101..=999 lose a three-letter "and"
    let converter = WordConverter::american();
    assert_eq!(converter.letter_total(1..=1000).unwrap(), 21124 - 3 * 891);
}

#[test]
fn test_euler_17_hyphens_do_not_change_count() {
    let hyphenless = WordConverter::new(
        Locale::EnGb,
        StyleConfig {
            use_and: true,
            use_hyphens: false,
        },
        ScalePolicy::Strict,
    );
    assert_eq!(hyphenless.letter_total(1..=1000).unwrap(), 21124);
}

#[test]
fn test_large_numbers() {
    let converter = WordConverter::british();
    assert_eq!(
        converter.convert(1_234_567).unwrap(),
        "one million two hundred and thirty-four thousand five hundred and sixty-seven"
    );
    assert_eq!(converter.convert(1_000_000_000).unwrap(), "one billion");
    assert_eq!(
        converter.convert(999_999_999_999i64).unwrap(),
        "nine hundred and ninety-nine billion nine hundred and ninety-nine million \
         nine hundred and ninety-nine thousand nine hundred and ninety-nine"
    );
}

#[test]
fn test_negative_mirrors_positive() {
    let converter = WordConverter::british();
    for n in (1..=100_000i64).step_by(37) {
        let positive = converter.convert(n).unwrap();
        assert_eq!(converter.convert(-n).unwrap(), format!("negative {positive}"));
    }
}

#[test]
fn test_conversion_is_repeatable() {
    let converter = WordConverter::american();
    let first = converter.convert(4_003_020_001u64).unwrap();
    let second = converter.convert(4_003_020_001u64).unwrap();
    assert_eq!(first, second);
    assert_eq!(first, "four billion three million twenty thousand one");
}

#[test]
fn test_no_empty_or_zero_groups() {
    let converter = WordConverter::american();
    for n in (0..=999_999i64).step_by(997) {
        let words = converter.convert(n).unwrap();
        assert!(!words.is_empty());
        assert!(!words.contains("  "), "{n}: {words:?}");
        if n != 0 {
            assert!(!words.contains("zero"), "{n}: {words:?}");
        }
    }
}

#[test]
fn test_strict_policy_limit() {
    let converter = WordConverter::american();
    let largest_named = BigInt::from(10u32).pow(39);
    assert_eq!(
        converter.convert_bigint(&largest_named).unwrap(),
        "one duodecillion"
    );

    let too_large = BigInt::from(10u32).pow(42);
    assert_eq!(
        converter.convert_bigint(&too_large),
        Err(NumberWordsError::UnsupportedMagnitude {
            groups: 15,
            max_groups: 14
        })
    );
    assert!(converter.convert_bigint(&-too_large).is_err());
}

#[test]
fn test_synthesize_policy() {
    let converter = WordConverter::from_json(r#"{ "scalePolicy": "synthesize" }"#).unwrap();
    let ten = BigInt::from(10u32);

    assert_eq!(
        converter.convert_bigint(&ten.pow(42)).unwrap(),
        "one tredecillion"
    );
    assert_eq!(
        converter.convert_bigint(&ten.pow(63)).unwrap(),
        "one vigintillion"
    );
    assert_eq!(
        converter
            .convert_bigint(&(ten.pow(303) * 5u32 + 21u32))
            .unwrap(),
        "five centillion twenty-one"
    );
}

#[test]
fn test_many_groups() {
    let converter = WordConverter::from_json(r#"{ "scalePolicy": "synthesize" }"#).unwrap();
    let digits = "9".repeat(90);
    let words = converter.convert_str(&digits).unwrap();

    assert!(words.starts_with("nine hundred ninety-nine octovigintillion"));
    assert!(words.ends_with("thousand nine hundred ninety-nine"));
    assert_eq!(words.matches("nine hundred ninety-nine").count(), 30);
}

#[test]
fn test_json_config() {
    let converter = WordConverter::from_json(
        r#"{ "language": "en-GB", "useHyphens": false }"#,
    )
    .unwrap();
    assert_eq!(converter.locale(), Locale::EnGb);
    assert_eq!(converter.convert(342).unwrap(), "three hundred and forty two");

    assert!(matches!(
        WordConverter::from_json(r#"{ "language": 12 }"#),
        Err(NumberWordsError::Config(_))
    ));
}

#[test]
fn test_count_letters_on_output() {
    let converter = WordConverter::british();
    let words = converter.convert(-342).unwrap();
    assert_eq!(count_letters(&words), "negative".len() + 23);
    assert_eq!(converter.count_letters(&words), count_letters(&words));
}

#[test]
fn test_shared_between_threads() {
    let converter = std::sync::Arc::new(WordConverter::british());
    let handles: Vec<_> = (0..4i64)
        .map(|i| {
            let converter = converter.clone();
            std::thread::spawn(move || converter.letter_total(i * 250 + 1..=(i + 1) * 250))
        })
        .collect();

    let total: usize = handles
        .into_iter()
        .map(|h| h.join().unwrap().unwrap())
        .sum();
    assert_eq!(total, 21124);
}
