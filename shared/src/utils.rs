// Numeric helpers shared by the rule engine: lenient parsing of loosely-typed
// cells and fixed-place rounding.

use crate::models::{FieldValue, ParsedNumber};
use anyhow::{anyhow, Result};
use std::str::FromStr;

const FULLWIDTH_FULL_STOP: char = '\u{FF0E}';
const MIDDLE_DOT: char = '\u{00B7}';

/// Trims the text, drops thousands-separator commas and maps the full-width
/// full stop and the middle dot onto `.`.
pub fn normalize_decimal_text(s: &str) -> String {
    s.trim()
        .replace(',', "")
        .replace(FULLWIDTH_FULL_STOP, ".")
        .replace(MIDDLE_DOT, ".")
}

/// Strict parse of decimals like "1,234", "12．5" or "3·14".
pub fn parse_decimal(s: &str) -> Result<f64> {
    let normalized = normalize_decimal_text(s);
    if normalized.is_empty() {
        return Err(anyhow!("Empty decimal '{}'", s));
    }

    let value = f64::from_str(&normalized)
        .map_err(|e| anyhow!("Failed to parse decimal '{}': {}", s, e))?;
    if !value.is_finite() {
        return Err(anyhow!("Decimal '{}' is not a finite number", s));
    }
    Ok(value)
}

/// Parse of a row cell that keeps the reason a value was rejected.
pub fn try_parse_number(value: Option<&FieldValue>) -> Result<f64> {
    match value {
        None => Err(anyhow!("Value is absent")),
        // Booleans behave as the integers 1 and 0.
        Some(FieldValue::Bool(b)) => Ok(if *b { 1.0 } else { 0.0 }),
        Some(FieldValue::Integer(i)) => Ok(*i as f64),
        Some(FieldValue::Float(f)) if f.is_finite() => Ok(*f),
        Some(FieldValue::Float(f)) => Err(anyhow!("Number {} is not finite", f)),
        Some(FieldValue::Text(s)) => parse_decimal(s),
    }
}

/// Lenient parse of a row cell. Never fails: anything that is not a finite
/// number comes back as `Unparseable`.
pub fn parse_number(value: Option<&FieldValue>) -> ParsedNumber {
    match try_parse_number(value) {
        Ok(v) => ParsedNumber::Parsed(v),
        Err(_) => ParsedNumber::Unparseable,
    }
}

/// Rounds `value` to `places` decimal places.
///
/// Goes through the correctly-rounded decimal expansion of the binary value,
/// so 2.675 (stored as 2.67499...) rounds down. Exact ties follow the
/// formatter.
pub fn round_to(value: f64, places: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{:.*}", places as usize, value)
        .parse::<f64>()
        .unwrap_or(value)
}
