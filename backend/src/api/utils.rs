//! API utility functions
//!
//! Loose readers for JSON request values. Clients send ids and amounts as
//! numbers or strings; these helpers normalize them or return `None`.

use crate::state::AuthorId;
use serde_json::Value;

/// Read a JSON number as a whole integer
///
/// Floats are accepted only when they have no fractional part.
fn as_whole_number(value: &Value) -> Option<i64> {
    if let Some(n) = value.as_i64() {
        return Some(n);
    }
    let f = value.as_f64()?;
    if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

/// Parse an author id from a request value
///
/// Accepts a whole JSON number or a string holding a decimal integer.
/// Anything else (null, bool, fractions, negative values) yields `None`.
pub fn parse_author_id(value: Option<&Value>) -> Option<AuthorId> {
    match value? {
        Value::String(s) => s.trim().parse().ok(),
        v @ Value::Number(_) => as_whole_number(v).and_then(|n| AuthorId::try_from(n).ok()),
        _ => None,
    }
}

/// Parse a withdrawal amount from a request value
///
/// Only whole JSON numbers are amounts; strings and fractions yield `None`.
pub fn parse_amount(value: Option<&Value>) -> Option<i64> {
    match value? {
        v @ Value::Number(_) => as_whole_number(v),
        _ => None,
    }
}
