//! Lenient field readers for OCO JSON objects.
//!
//! Missing or mistyped fields fall back to the caller's default.

use std::str::FromStr;

use serde_json::Value;

pub(crate) fn f64_or(data: &Value, key: &str, default: f64) -> f64 {
    data.get(key).and_then(Value::as_f64).unwrap_or(default)
}

pub(crate) fn i64_or(data: &Value, key: &str, default: i64) -> i64 {
    match data.get(key) {
        Some(value) => value
            .as_i64()
            .or_else(|| value.as_f64().map(|f| f.round() as i64))
            .unwrap_or(default),
        None => default,
    }
}

pub(crate) fn bool_or(data: &Value, key: &str, default: bool) -> bool {
    data.get(key).and_then(Value::as_bool).unwrap_or(default)
}

pub(crate) fn string_or(data: &Value, key: &str, default: &str) -> String {
    data.get(key).and_then(Value::as_str).unwrap_or(default).to_owned()
}

/// Reads a two-number array.
pub(crate) fn pair_or(data: &Value, key: &str, default: [f64; 2]) -> [f64; 2] {
    match data.get(key).and_then(Value::as_array).map(Vec::as_slice) {
        Some([a, b]) => match (a.as_f64(), b.as_f64()) {
            (Some(a), Some(b)) => [a, b],
            _ => default,
        },
        _ => default,
    }
}

/// Reads an enum stored as a string, using its default when absent or unknown.
pub(crate) fn enum_or_default<T>(data: &Value, key: &str) -> T
where
    T: FromStr + Default,
{
    match data.get(key).and_then(Value::as_str) {
        Some(s) => s.parse().unwrap_or_else(|_| {
            tracing::warn!(field = key, value = s, "unknown value, using the default");
            T::default()
        }),
        None => T::default(),
    }
}

/// The array stored under `key`, or an empty slice.
pub(crate) fn array<'a>(data: &'a Value, key: &str) -> &'a [Value] {
    data.get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::rig::types::Side;

    #[test]
    fn test_defaults_for_missing_and_mistyped() {
        let data = json!({ "x": "12", "zIndex": 3.6, "attached": 1, "pair": [1, "b"] });
        assert_eq!(f64_or(&data, "x", 0.5), 0.5);
        assert_eq!(i64_or(&data, "zIndex", 0), 4);
        assert!(!bool_or(&data, "attached", false));
        assert_eq!(pair_or(&data, "pair", [9.0, 9.0]), [9.0, 9.0]);
        assert_eq!(string_or(&data, "name", "Bone"), "Bone");
        assert!(array(&data, "children").is_empty());
    }

    #[test]
    fn test_enum_fallback() {
        let data = json!({ "side": "R", "other": "Q" });
        assert_eq!(enum_or_default::<Side>(&data, "side"), Side::Right);
        assert_eq!(enum_or_default::<Side>(&data, "other"), Side::None);
        assert_eq!(enum_or_default::<Side>(&json!(null), "side"), Side::None);
    }
}
