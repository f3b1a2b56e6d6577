//! The query a result was produced by.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

/// The query that was executed.
///
/// Usually plain SQL text. Prepared statements and other query objects are
/// kept in their structured form and rendered as JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// SQL text, possibly a template whose values are bound separately.
    Text(String),
    /// A structured query object.
    Structured(Value),
}

impl Query {
    /// Creates a structured query from any serializable query object.
    ///
    /// # Errors
    ///
    /// Returns the serialization error if `query` cannot be represented as
    /// JSON.
    pub fn structured<T: Serialize>(query: &T) -> Result<Self, serde_json::Error> {
        serde_json::to_value(query).map(Self::Structured)
    }

    /// Returns the SQL text, if this is a text query.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(sql) => Some(sql),
            Self::Structured(_) => None,
        }
    }
}

/// Text queries are quoted verbatim, without escaping.
impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(sql) => write!(f, "\"{sql}\""),
            Self::Structured(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for Query {
    fn from(sql: &str) -> Self {
        Self::Text(sql.to_owned())
    }
}

impl From<String> for Query {
    fn from(sql: String) -> Self {
        Self::Text(sql)
    }
}

impl From<Value> for Query {
    fn from(value: Value) -> Self {
        Self::Structured(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    struct PreparedStatement<'a> {
        name: &'a str,
        text: &'a str,
    }

    #[test]
    fn test_text_renders_quoted_verbatim() {
        let query = Query::from(r#"SELECT "id" FROM t"#);
        assert_eq!(query.to_string(), r#""SELECT "id" FROM t""#);
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(Query::from("").to_string(), "\"\"");
    }

    #[test]
    fn test_structured_renders_json() {
        let query = Query::structured(&PreparedStatement {
            name: "find-user",
            text: "SELECT * FROM users WHERE id = ?",
        })
        .unwrap();
        assert_eq!(
            query.to_string(),
            r#"{"name":"find-user","text":"SELECT * FROM users WHERE id = ?"}"#
        );
        assert!(query.as_text().is_none());
    }

    #[test]
    fn test_from_value() {
        let query = Query::from(json!({"text": "SELECT 1"}));
        assert_eq!(query, Query::Structured(json!({"text": "SELECT 1"})));
    }
}
