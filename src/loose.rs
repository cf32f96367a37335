//! Lenient coercion of loosely-typed record fields.
//!
//! Media file records arrive as JSON written by hand or by other tools, so
//! optional fields are frequently the wrong type: `"640"` for a width, `1` for
//! a flag. Nothing here ever fails. Every helper turns the raw value into the
//! typed option it can make sense of, or `None`, and the `MediaFile`
//! constructor applies defaults from there.
//!
//! The `deserialize_with` adapters at the bottom wrap the plain functions for
//! use in `#[serde]` attributes.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// JavaScript-style truthiness of a raw value.
///
/// `false`, `null`, `0`, `NaN`, and `""` are falsy; everything else, including
/// empty arrays and objects, is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Parse the leading base-10 integer of a string.
///
/// Leading whitespace and a single sign are accepted; parsing stops at the
/// first non-digit. Returns `None` if no digit was consumed or the value does
/// not fit in an `i64`.
///
/// # Examples
///
/// ```
/// use mediafile::loose::parse_int_prefix;
///
/// assert_eq!(parse_int_prefix("1920"), Some(1920));
/// assert_eq!(parse_int_prefix("  300px"), Some(300));
/// assert_eq!(parse_int_prefix("-12.9"), Some(-12));
/// assert_eq!(parse_int_prefix("px300"), None);
/// ```
pub fn parse_int_prefix(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let sign_len = match s.as_bytes().first() {
        Some(b'-') | Some(b'+') => 1,
        _ => 0,
    };

    let end = s[sign_len..]
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(s.len() - sign_len);
    if end == 0 {
        return None;
    }

    s[..sign_len + end].parse().ok()
}

/// A string value; anything else is dropped.
pub fn string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Null => None,
        other => {
            tracing::trace!(value = %other, "ignoring non-string value");
            None
        }
    }
}

/// Truthiness of a present value. `null` counts as absent.
pub fn flag(value: &Value) -> Option<bool> {
    match value {
        Value::Null => None,
        other => Some(is_truthy(other)),
    }
}

/// An integer pixel dimension.
///
/// Numbers are truncated toward zero; strings go through [`parse_int_prefix`].
pub fn dimension(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.abs() < i64::MAX as f64)
                .map(|f| f.trunc() as i64)
        }),
        Value::String(s) => parse_int_prefix(s),
        _ => None,
    }
}

/// A floating point quantity such as a frame rate or a duration.
pub fn number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    }
}

/// A non-negative whole count such as a channel count.
pub fn count(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => match n.as_u64() {
            Some(u) => u32::try_from(u).ok(),
            None => n
                .as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f <= f64::from(u32::MAX))
                .map(|f| f as u32),
        },
        Value::String(s) => s.trim().parse::<u32>().ok(),
        _ => None,
    }
}

pub(crate) fn de_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(|v| string(&v))
}

pub(crate) fn de_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(|v| flag(&v))
}

pub(crate) fn de_dimension<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(|v| dimension(&v))
}

pub(crate) fn de_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(|v| number(&v))
}

pub(crate) fn de_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(|v| count(&v))
}
