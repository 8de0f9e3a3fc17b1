//! Number letter counts (Project Euler 17)
//! Run with: cargo run --example euler17
//! Set RUST_LOG=debug to see converter construction.

use number_words::{count_letters, parse_config, WordConverter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("=== Number to Words ===\n");

    let british = WordConverter::british();
    let american = WordConverter::american();

    for n in [342, 115, 1000] {
        let gb = british.convert(n)?;
        let us = american.convert(n)?;
        println!("{n}:");
        println!("  en-GB: {gb} ({} letters)", count_letters(&gb));
        println!("  en-US: {us} ({} letters)", count_letters(&us));
    }
    println!();

    println!("Large numbers:");
    println!("  1234567: {}", british.convert(1_234_567)?);
    println!("  999999999999: {}", british.convert(999_999_999_999i64)?);
    println!("  -1000001: {}", british.convert(-1_000_001)?);

    let huge = format!("7{}", "0".repeat(66));
    match british.convert_str(&huge) {
        Ok(words) => println!("  7e66: {words}"),
        Err(e) => println!("  7e66 (strict): {e}"),
    }
    let synthesizing = WordConverter::from_config(&parse_config(
        r#"{ "language": "en-GB", "scalePolicy": "synthesize" }"#,
    )?);
    println!("  7e66 (synthesize): {}", synthesizing.convert_str(&huge)?);
    println!();

    println!("=== Project Euler #17 ===");
    println!("1..=5 letters: {}", british.letter_total(1..=5)?);
    println!(
        "Total letters 1..=1000 (British): {}",
        british.letter_total(1..=1000)?
    );
    println!(
        "Total letters 1..=1000 (American): {}",
        american.letter_total(1..=1000)?
    );

    Ok(())
}
