// src/domain/numbers.rs

use serde::Serializer;

/// Parse a spreadsheet cell as a number. Currency signs and thousands
/// separators are tolerated since formatted values carry them.
pub fn parse_number(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| *c != '$' && *c != ',')
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Counter policy: absent or garbage is zero.
pub fn count(raw: &str) -> f64 {
    parse_number(raw).unwrap_or(0.0)
}

/// Scalar policy: absent or garbage is unknown.
pub fn scalar(raw: &str) -> Option<f64> {
    parse_number(raw)
}

pub fn round2(n: f64) -> f64 {
    (n * 100.0).round() / 100.0
}

/// Guarded division for rates. `None` when the denominator is zero.
pub fn safe_div(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator == 0.0 {
        return None;
    }
    Some(numerator / denominator).filter(|r| r.is_finite())
}

/// Whole numbers go out as JSON integers (`10`, not `10.0`).
pub fn serialize_number<S: Serializer>(n: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if n.fract() == 0.0 && n.abs() < 9.0e15 {
        serializer.serialize_i64(*n as i64)
    } else {
        serializer.serialize_f64(*n)
    }
}

pub fn serialize_opt_number<S: Serializer>(
    n: &Option<f64>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match n {
        Some(n) => serialize_number(n, serializer),
        None => serializer.serialize_none(),
    }
}
