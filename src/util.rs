/// Number formatting and conversion helpers.
///
/// This module holds the canonical, locale-independent number formatter used
/// wherever a number turns into text (string concatenation, interpolation,
/// `Display`), plus a checked conversion from `f64` to a count.
pub mod num;
