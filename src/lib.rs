//! Spell out a floating point number's decimal digits as English words, one word per
//! character: `2.345` becomes `"Two point three four five"`.
//!
//! A number is first rendered to its canonical decimal form — the shortest string that
//! parses back to the same value, as printed by [Ryu](https://docs.rs/ryu/) — and each
//! character of that string is then replaced by its word. A handful of doubles bypass
//! rendering entirely and map to a fixed phrase: NaN, the two infinities, and the
//! smallest positive double.

mod numword;

use numword::{Canonical, expand, special_phrase};
pub use numword::TransformError;

/// Spells out `number` as English words, one word per character of its canonical
/// decimal form, with the first letter upper-cased.
///
/// This is a total function: every double, including NaN and the infinities, maps to a
/// non-empty phrase, and equal inputs always yield byte-identical output.
///
/// ## Example
///
/// ```
/// assert_eq!(numword::transform_to_words(2.345), "Two point three four five");
/// assert_eq!(numword::transform_to_words(-0.0), "Minus zero");
/// assert_eq!(numword::transform_to_words(f64::NEG_INFINITY), "Negative Infinity");
/// ```
pub fn transform_to_words(number: f64) -> String {
    if let Some(phrase) = special_phrase(number) {
        return phrase.to_string();
    }
    // The special phrases cover every non-finite double, so `number` is finite here.
    expand(Canonical::new(number).as_str())
}

/// Spells out every element of `source` with [transform_to_words], preserving order.
///
/// The source is validated before any element is converted: an absent source fails with
/// [TransformError::NullSource], an empty one with [TransformError::EmptySource], and a
/// failing call produces no partial output.
///
/// ## Example
///
/// ```
/// let words = numword::transform(Some(&[2.345, -0.0, 0.0, 0.1])).unwrap();
/// assert_eq!(words, ["Two point three four five", "Minus zero", "Zero", "Zero point one"]);
/// ```
pub fn transform(source: Option<&[f64]>) -> Result<Vec<String>, TransformError> {
    let source = source.ok_or(TransformError::NullSource)?;
    if source.is_empty() {
        return Err(TransformError::EmptySource);
    }
    Ok(source.iter().copied().map(transform_to_words).collect())
}
