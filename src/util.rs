// Utility helpers for parsing and number formatting.
//
// This module centralizes the "dirty" number/string handling so the rest of
// the code can assume clean, typed values.
use num_format::{Locale, ToFormattedString};

/// Parse a string-like value into `f64` while being forgiving about
/// formatting issues that are common in CSV exports (commas, spaces, text).
///
/// - Accepts `Option<&str>` so callers can pass through optional fields.
/// - Trims whitespace.
/// - Rejects values that contain alphabetic characters.
/// - Strips thousands separators like `","` before parsing.
/// - Returns `None` for anything that cannot be safely parsed.
pub fn parse_f64_safe(s: Option<&str>) -> Option<f64> {
    let s = s?.trim();
    if s.is_empty() {
        return None;
    }
    if s.chars().any(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    let s = s.replace(",", "");
    s.parse::<f64>().ok()
}

/// Round to one decimal place. Used for efficiency percentages.
pub fn round1(n: f64) -> f64 {
    (n * 10.0).round() / 10.0
}

pub fn format_number(n: f64, decimals: usize) -> String {
    // Format a floating-point value with:
    // - a fixed number of decimal places, and
    // - locale-aware thousands separators (e.g., `1,234,567.89`).
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

/// Render a number the way the upstream dashboard interpolates it into
/// strings: whole values without a decimal point (`1000`, not `1000.0`),
/// fractional values as-is. No separators.
pub fn format_number_plain(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

pub fn format_int<T>(n: T) -> String
where
    T: ToFormattedString,
{
    // Thin wrapper around `num-format` for integer-like values. This is used
    // for counts in console messages (e.g., `9,855 rows loaded`).
    n.to_formatted_string(&Locale::en)
}

/// Turn a display name into a filename-safe slug: whitespace becomes `_`,
/// anything outside `[A-Za-z0-9_-]` becomes `-`.
pub fn file_slug(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| {
            if c.is_whitespace() {
                '_'
            } else if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '-'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_f64_handles_separators_and_junk() {
        assert_eq!(parse_f64_safe(Some("1,250.50")), Some(1250.50));
        assert_eq!(parse_f64_safe(Some("  42 ")), Some(42.0));
        assert_eq!(parse_f64_safe(Some("N/A")), None);
        assert_eq!(parse_f64_safe(Some("")), None);
        assert_eq!(parse_f64_safe(None), None);
    }

    #[test]
    fn round1_single_decimal() {
        assert_eq!(round1(25.04), 25.0);
        assert_eq!(round1(25.05), 25.1);
        assert_eq!(round1(0.0), 0.0);
    }

    #[test]
    fn format_number_thousands() {
        assert_eq!(format_number(1200.0, 0), "1,200");
        assert_eq!(format_number(1234567.891, 2), "1,234,567.89");
        assert_eq!(format_number(-500.0, 0), "-500");
    }

    #[test]
    fn format_number_plain_matches_js_interpolation() {
        assert_eq!(format_number_plain(1000.0), "1000");
        assert_eq!(format_number_plain(1000.5), "1000.5");
        assert_eq!(format_number_plain(0.0), "0");
    }

    #[test]
    fn file_slug_sanitizes() {
        assert_eq!(file_slug("Tower A"), "Tower_A");
        assert_eq!(file_slug("Planta Norte / Fase 2"), "Planta_Norte_-_Fase_2");
    }
}
