//! Bind parameter values.
//!
//! Values bound to a query travel with a [`QueryResultError`] so that a
//! rendered error shows exactly what the query was executed with.
//!
//! [`QueryResultError`]: crate::QueryResultError

use serde::Serialize;
use serde_json::Value;

/// A SQL value that can be bound as a query parameter.
///
/// Serializes untagged, so `Int(1)` becomes `1`, `Text("a")` becomes `"a"`
/// and `Null` becomes `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SqlValue {
    /// NULL value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Float value.
    Float(f64),
    /// Text value.
    Text(String),
    /// Binary blob value.
    Blob(Vec<u8>),
}

impl SqlValue {
    /// Returns the JSON form of this value.
    #[must_use]
    pub fn to_json(&self) -> Value {
        match self {
            Self::Null => Value::Null,
            Self::Bool(b) => Value::Bool(*b),
            Self::Int(n) => Value::from(*n),
            // Non-finite floats have no JSON form
            Self::Float(f) => serde_json::Number::from_f64(*f).map_or(Value::Null, Value::Number),
            Self::Text(s) => Value::String(s.clone()),
            Self::Blob(b) => Value::Array(b.iter().map(|byte| Value::from(*byte)).collect()),
        }
    }
}

/// Converts a parameter list into the JSON array carried as error values.
#[must_use]
pub fn values_to_json(values: &[SqlValue]) -> Value {
    Value::Array(values.iter().map(SqlValue::to_json).collect())
}

/// Trait for types that can be converted to SQL values.
pub trait ToSqlValue {
    /// Converts the value to a `SqlValue`.
    fn to_sql_value(self) -> SqlValue;
}

impl ToSqlValue for SqlValue {
    fn to_sql_value(self) -> SqlValue {
        self
    }
}

impl ToSqlValue for bool {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Bool(self)
    }
}

impl ToSqlValue for i64 {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Int(self)
    }
}

impl ToSqlValue for i32 {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Int(i64::from(self))
    }
}

impl ToSqlValue for u32 {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Int(i64::from(self))
    }
}

impl ToSqlValue for f64 {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Float(self)
    }
}

impl ToSqlValue for String {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Text(self)
    }
}

impl ToSqlValue for &str {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Text(String::from(self))
    }
}

impl ToSqlValue for Vec<u8> {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Blob(self)
    }
}

impl<T: ToSqlValue> ToSqlValue for Option<T> {
    fn to_sql_value(self) -> SqlValue {
        match self {
            Some(v) => v.to_sql_value(),
            None => SqlValue::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_to_json_scalars() {
        assert_eq!(SqlValue::Null.to_json(), Value::Null);
        assert_eq!(SqlValue::Bool(true).to_json(), json!(true));
        assert_eq!(SqlValue::Int(-7).to_json(), json!(-7));
        assert_eq!(SqlValue::Float(1.5).to_json(), json!(1.5));
        assert_eq!(SqlValue::Text("it's".into()).to_json(), json!("it's"));
        assert_eq!(SqlValue::Blob(vec![1, 255]).to_json(), json!([1, 255]));
    }

    #[test]
    fn test_non_finite_float_is_null() {
        assert_eq!(SqlValue::Float(f64::NAN).to_json(), Value::Null);
    }

    #[test]
    fn test_serialize_matches_to_json() {
        let values = vec![
            SqlValue::Int(1),
            SqlValue::Text("a".into()),
            SqlValue::Null,
        ];
        assert_eq!(serde_json::to_value(&values).unwrap(), values_to_json(&values));
    }

    #[test]
    fn test_values_to_json_empty() {
        assert_eq!(values_to_json(&[]).to_string(), "[]");
    }

    #[test]
    fn test_option_to_sql_value() {
        assert_eq!(Some(5_i64).to_sql_value(), SqlValue::Int(5));
        assert_eq!(None::<String>.to_sql_value(), SqlValue::Null);
        assert_eq!("x".to_sql_value(), SqlValue::Text("x".into()));
    }
}
