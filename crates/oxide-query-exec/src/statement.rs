//! Statements and their bound parameters.

use oxide_query_result::{values_to_json, SqlValue, ToSqlValue};
use serde_json::Value;

/// A SQL statement ready to run.
///
/// A statement built with [`Statement::raw`] has no separate values: whatever
/// it needs is already in the text. A statement built with
/// [`Statement::new`] carries a parameter list, possibly empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    /// SQL text, with `?` placeholders for parameters.
    pub sql: String,
    /// Bound parameters, `None` for raw statements.
    pub params: Option<Vec<SqlValue>>,
}

impl Statement {
    /// Creates a statement with an empty parameter list.
    #[must_use]
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            params: Some(Vec::new()),
        }
    }

    /// Creates a statement whose values are already in the text.
    #[must_use]
    pub fn raw(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            params: None,
        }
    }

    /// Binds the next parameter.
    #[must_use]
    pub fn bind(mut self, value: impl ToSqlValue) -> Self {
        self.params
            .get_or_insert_with(Vec::new)
            .push(value.to_sql_value());
        self
    }

    /// Returns the parameters as the JSON values carried by errors.
    #[must_use]
    pub fn values_json(&self) -> Option<Value> {
        self.params.as_deref().map(values_to_json)
    }
}

/// Parses a command-line parameter.
///
/// `null`, `true` and `false` map to their SQL values, integers and finite
/// floats to numbers, anything else (including `""`, `nan` and `inf`) to
/// text.
#[must_use]
pub fn parse_param(input: &str) -> SqlValue {
    match input {
        "null" => SqlValue::Null,
        "true" => SqlValue::Bool(true),
        "false" => SqlValue::Bool(false),
        _ => {
            if let Ok(n) = input.parse::<i64>() {
                SqlValue::Int(n)
            } else {
                match input.parse::<f64>() {
                    Ok(f) if f.is_finite() => SqlValue::Float(f),
                    _ => SqlValue::Text(input.to_string()),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_raw_has_no_values() {
        let stmt = Statement::raw("SELECT 1");
        assert!(stmt.params.is_none());
        assert!(stmt.values_json().is_none());
    }

    #[test]
    fn test_new_has_empty_values() {
        let stmt = Statement::new("SELECT 1");
        assert_eq!(stmt.values_json(), Some(json!([])));
    }

    #[test]
    fn test_bind() {
        let stmt = Statement::new("SELECT * FROM t WHERE a = ? AND b = ?")
            .bind(1_i64)
            .bind("x");
        assert_eq!(stmt.values_json(), Some(json!([1, "x"])));
    }

    #[test]
    fn test_bind_on_raw_adds_values() {
        let stmt = Statement::raw("SELECT ?").bind(true);
        assert_eq!(stmt.params, Some(vec![SqlValue::Bool(true)]));
    }

    #[test]
    fn test_parse_param() {
        assert_eq!(parse_param("null"), SqlValue::Null);
        assert_eq!(parse_param("42"), SqlValue::Int(42));
        assert_eq!(parse_param("-1.5"), SqlValue::Float(-1.5));
        assert_eq!(parse_param("false"), SqlValue::Bool(false));
        assert_eq!(parse_param("alice"), SqlValue::Text("alice".to_string()));
    }

    #[test]
    fn test_parse_param_empty_is_text() {
        assert_eq!(parse_param(""), SqlValue::Text(String::new()));
    }

    #[test]
    fn test_parse_param_non_finite_is_text() {
        for input in ["Nan", "nan", "inf", "-inf", "Infinity"] {
            assert_eq!(parse_param(input), SqlValue::Text(input.to_string()));
        }

        let stmt = Statement::new("SELECT * FROM users WHERE name = ?").bind(parse_param("Nan"));
        assert_eq!(stmt.values_json(), Some(json!(["Nan"])));
    }
}
