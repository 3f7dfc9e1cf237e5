// Number formatting and small statistics helpers.
//
// Display formatting is centralized here so the table formatter, the chart
// axis labels, and the console previews all agree on how numbers look.
use num_format::{Locale, ToFormattedString};

/// Arithmetic mean; returns 0 for an empty slice to avoid NaNs.
pub fn mean(v: &[f64]) -> f64 {
    if v.is_empty() {
        return 0.0;
    }
    let sum: f64 = v.iter().copied().sum();
    sum / v.len() as f64
}

/// Round to two decimal places.
///
/// Uses `f64::round`, which rounds half away from zero. The same policy
/// applies to the integer age rounding in the report functions.
pub fn round2(n: f64) -> f64 {
    (n * 100.0).round() / 100.0
}

/// Format a floating-point value with a fixed number of decimal places and
/// thousands separators (e.g., `1,234,567.89`).
pub fn format_number(n: f64, decimals: usize) -> String {
    let neg = n.is_sign_negative();
    let abs_n = n.abs();
    // First, format to a plain fixed-decimal string like `1234567.89`.
    let s = format!("{:.*}", decimals, abs_n);
    let mut parts = s.split('.');
    let int_part = parts.next().unwrap_or("0");
    let frac_part = parts.next();
    // Use `num-format` to insert commas into the integer portion.
    let int_val: i64 = int_part.parse().unwrap_or(0);
    let mut res = int_val.to_formatted_string(&Locale::en);
    if let Some(frac) = frac_part {
        if decimals > 0 {
            res.push('.');
            res.push_str(frac);
        }
    } else if decimals > 0 {
        res.push('.');
        res.push_str(&"0".repeat(decimals));
    }
    if neg {
        format!("-{}", res)
    } else {
        res
    }
}

/// Thousands-separated rendering for integer-like values. Used for chart
/// axis ticks and console row counts.
pub fn format_int<T>(n: T) -> String
where
    T: ToFormattedString,
{
    n.to_formatted_string(&Locale::en)
}
