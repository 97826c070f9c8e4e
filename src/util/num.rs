/// Largest fraction digit count accepted by [`format_fixed`].
pub const MAX_FRACTION_DIGITS: usize = 15;

/// Formats a number the same way everywhere, regardless of locale.
///
/// The output uses `.` as the decimal separator, never groups digits and
/// never switches to exponent notation. It is the shortest text that parses
/// back to the same `f64`, so whole numbers carry no fraction. Negative zero
/// prints as `0`.
///
/// ## Example
/// ```
/// use glint::util::num::format_number;
///
/// assert_eq!(format_number(4.0), "4");
/// assert_eq!(format_number(6.25), "6.25");
/// assert_eq!(format_number(-0.0), "0");
/// assert_eq!(format_number(1234567.5), "1234567.5");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}

/// Formats a number with exactly `digits` fraction digits.
///
/// Like [`format_number`] this is locale-independent, and a result that
/// rounds to zero never carries a minus sign.
///
/// ## Example
/// ```
/// use glint::util::num::format_fixed;
///
/// assert_eq!(format_fixed(3.14159, 2), "3.14");
/// assert_eq!(format_fixed(2.0, 3), "2.000");
/// assert_eq!(format_fixed(-0.001, 1), "0.0");
/// ```
#[must_use]
pub fn format_fixed(value: f64, digits: usize) -> String {
    let text = format!("{value:.digits$}");
    match text.strip_prefix('-') {
        Some(rest) if rest.chars().all(|c| c == '0' || c == '.') => rest.to_string(),
        _ => text,
    }
}

/// Converts an `f64` to a `usize` if and only if it is a whole number in
/// `0..=max`.
///
/// ## Returns
/// - `Some(usize)`: The converted value.
/// - `None`: If the value is fractional, negative, not finite or above
///   `max`.
///
/// ## Example
/// ```
/// use glint::util::num::f64_to_usize_checked;
///
/// assert_eq!(f64_to_usize_checked(2.0, 15), Some(2));
/// assert_eq!(f64_to_usize_checked(2.5, 15), None);
/// assert_eq!(f64_to_usize_checked(-1.0, 15), None);
/// assert_eq!(f64_to_usize_checked(16.0, 15), None);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn f64_to_usize_checked(value: f64, max: usize) -> Option<usize> {
    if !value.is_finite() || value.fract() != 0.0 || value < 0.0 || value > max as f64 {
        return None;
    }
    Some(value as usize)
}
