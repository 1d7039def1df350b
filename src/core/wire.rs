use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Remove every `null` member from the objects in `value`, recursively.
///
/// Upstream serves `null` for fields it has no data for. With the members
/// gone, `#[serde(default)]` models fall back to their zero values instead of
/// failing on a type mismatch. `null` array elements are left as they are.
pub(crate) fn drop_nulls(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.retain(|_, v| !v.is_null());
            map.values_mut().for_each(drop_nulls);
        }
        Value::Array(items) => items.iter_mut().for_each(drop_nulls),
        _ => {}
    }
}

/// Accepts a JSON number, a numeric string, an empty string or `null`.
///
/// The detail payload serves the same counters as numbers on some records and
/// as strings (`"12345"`, `""`) on others. Anything absent or blank is `0`.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn de_i64_lenient<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum AnyNumber {
        I64(i64),
        F64(f64),
        Str(String),
    }

    match Option::<AnyNumber>::deserialize(deserializer)? {
        Some(AnyNumber::I64(n)) => Ok(n),
        Some(AnyNumber::F64(f)) => Ok(f.round() as i64),
        Some(AnyNumber::Str(s)) => {
            let s = s.trim();
            if s.is_empty() {
                return Ok(0);
            }
            s.parse::<i64>()
                .or_else(|_| s.parse::<f64>().map(|f| f.round() as i64))
                .map_err(|_| serde::de::Error::custom(format!("cannot convert {s:?} to a number")))
        }
        None => Ok(0),
    }
}

/// Accepts a string, a number (rendered as text) or `null` (empty string).
pub(crate) fn de_string_lenient<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum AnyText {
        Str(String),
        I64(i64),
        F64(f64),
    }

    Ok(match Option::<AnyText>::deserialize(deserializer)? {
        Some(AnyText::Str(s)) => s,
        Some(AnyText::I64(n)) => n.to_string(),
        Some(AnyText::F64(f)) => f.to_string(),
        None => String::new(),
    })
}
