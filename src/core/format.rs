//! Dashboard number formatting.

/// Formats `value` with en-US digit grouping and at most three fraction digits.
///
/// `20162.0` becomes `"20,162"`, `-1234.5` becomes `"-1,234.5"`.
#[must_use]
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let fixed = format!("{:.3}", value.abs());
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut out = String::with_capacity(fixed.len() + integer.len() / 3 + 1);
    let is_zero = integer.bytes().all(|b| b == b'0') && fraction.is_empty();
    if value.is_sign_negative() && !is_zero {
        out.push('-');
    }
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(fraction);
    }
    out
}
