//! Lenient numeric coercion.
//!
//! Raw cells carry locale noise: thousands-separator commas, `^` for
//! "not applicable" and a bare dash for zero. Coercion is total — every
//! input yields a finite number, with zero substituted on parse failure —
//! so aggregation downstream never sees a missing row or a non-numeric
//! sentinel. The placeholder check is token-level: only a cell that IS the
//! placeholder becomes zero, so negative numbers survive.

/// Placeholder tokens that denote zero / not applicable.
pub const ZERO_TOKENS: &[&str] = &["^", "-"];

fn cleaned(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || ZERO_TOKENS.contains(&trimmed) {
        return None;
    }
    Some(trimmed.replace(',', ""))
}

/// Coerces a raw cell to `f64`; zero on failure.
pub fn lenient_f64(raw: &str) -> f64 {
    cleaned(raw)
        .and_then(|value| value.parse::<f64>().ok())
        .unwrap_or(0.0)
}

/// Coerces a raw cell to `i64`; zero on failure.
///
/// Decimal text truncates toward zero, matching integer-typed count columns
/// in the source exports.
pub fn lenient_i64(raw: &str) -> i64 {
    let Some(value) = cleaned(raw) else {
        return 0;
    };
    if let Ok(parsed) = value.parse::<i64>() {
        return parsed;
    }
    value.parse::<f64>().map(|parsed| parsed as i64).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commas_are_stripped() {
        assert_eq!(lenient_i64("1,234"), 1234);
        assert_eq!(lenient_f64("12,34,567"), 1_234_567.0);
    }

    #[test]
    fn placeholder_tokens_are_zero() {
        assert_eq!(lenient_i64("^"), 0);
        assert_eq!(lenient_i64("-"), 0);
        assert_eq!(lenient_i64(" - "), 0);
        assert_eq!(lenient_f64("^"), 0.0);
    }

    #[test]
    fn negative_numbers_survive() {
        assert_eq!(lenient_i64("-5"), -5);
        assert_eq!(lenient_f64("-1,000.5"), -1000.5);
    }

    #[test]
    fn garbage_coerces_to_zero() {
        assert_eq!(lenient_i64("NA"), 0);
        assert_eq!(lenient_i64(""), 0);
        assert_eq!(lenient_f64("12abc"), 0.0);
    }

    #[test]
    fn decimal_counts_truncate() {
        assert_eq!(lenient_i64("12.7"), 12);
        assert_eq!(lenient_i64("-3.9"), -3);
    }

    #[test]
    fn coercion_is_total_over_arbitrary_text() {
        for raw in ["", " ", "^", "-", "--", "1,2,3", "\u{feff}", "∞", "1e3"] {
            let value = lenient_f64(raw);
            assert!(value.is_finite(), "{raw:?} must coerce to a finite number");
        }
    }
}
