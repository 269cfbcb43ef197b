//! Request body for create and update, and its validation.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use store::NewContact;

use crate::error::{ApiError, INVALID_AGE, MISSING_FIELDS};

/// Loosely-typed contact body as sent by clients.
///
/// Every field is optional so that absence is reported as a validation error rather than
/// a decode failure. `age` keeps its raw JSON value for coercion; an explicit `null` age
/// counts as present (and then fails coercion).
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPayload {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub age: Option<Value>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

fn non_empty(field: Option<String>) -> Option<String> {
    field.filter(|s| !s.is_empty())
}

impl ContactPayload {
    /// Check required fields, then coerce `age`.
    pub fn validate(self) -> Result<NewContact, ApiError> {
        let (Some(first_name), Some(last_name), Some(email), Some(phone_number), Some(age)) = (
            non_empty(self.first_name),
            non_empty(self.last_name),
            non_empty(self.email),
            non_empty(self.phone_number),
            self.age,
        ) else {
            return Err(ApiError::validation(MISSING_FIELDS));
        };

        let age = coerce_age(&age)
            .filter(|age| *age >= 0)
            .ok_or_else(|| ApiError::validation(INVALID_AGE))?;

        Ok(NewContact {
            first_name,
            last_name,
            email,
            phone_number,
            age,
        })
    }
}

/// Integer value of a JSON age, or `None` for not-a-number.
///
/// Integers pass through, floats truncate toward zero, strings are read as an optional
/// sign followed by leading digits (`"42abc"` is 42).
pub fn coerce_age(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
        Value::String(s) => parse_leading_int(s),
        _ => None,
    }
}

fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if len == 0 {
        return None;
    }
    let value: i64 = rest[..len].parse().ok()?;
    Some(if negative { -value } else { value })
}
