//! Query results as returned by an executor.

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

/// A returned row: column name to value.
pub type Row = Map<String, Value>;

/// Returned when a JSON row is not an object.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("row {index} is not a JSON object: {value}")]
pub struct InvalidRowError {
    /// Position of the row in the input.
    pub index: usize,
    /// The rejected value.
    pub value: Value,
}

/// The rows a query returned, with the command that produced them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QueryResult {
    /// Leading SQL verb, upper-cased (`SELECT`, `DELETE`, ...).
    pub command: String,
    /// Column names of the returned rows, taken from the first row.
    ///
    /// Empty whenever no rows were returned, even if the statement does
    /// produce columns.
    pub columns: Vec<String>,
    /// The returned rows.
    pub rows: Vec<Row>,
}

impl QueryResult {
    /// Creates a result, deriving the column names from the first row.
    #[must_use]
    pub fn new(command: impl Into<String>, rows: Vec<Row>) -> Self {
        let columns = rows
            .first()
            .map(|row| row.keys().cloned().collect())
            .unwrap_or_default();
        Self {
            command: command.into(),
            columns,
            rows,
        }
    }

    /// Creates a `SELECT` result from rows.
    #[must_use]
    pub fn from_rows(rows: Vec<Row>) -> Self {
        Self::new("SELECT", rows)
    }

    /// Creates a result from JSON values, one object per row.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRowError`] for the first value that is not an
    /// object.
    pub fn from_json_rows(
        command: impl Into<String>,
        rows: Vec<Value>,
    ) -> Result<Self, InvalidRowError> {
        let rows = rows
            .into_iter()
            .enumerate()
            .map(|(index, row)| match row {
                Value::Object(map) => Ok(map),
                value => Err(InvalidRowError { index, value }),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(command, rows))
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns whether no rows were returned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the rows.
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Returns the first row, if any.
    #[must_use]
    pub fn first(&self) -> Option<&Row> {
        self.rows.first()
    }

    /// Consumes the result, returning its rows.
    #[must_use]
    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }
}

/// Extracts the command verb from SQL text.
#[must_use]
pub fn command_of(sql: &str) -> String {
    sql.split_whitespace()
        .next()
        .map(str::to_ascii_uppercase)
        .unwrap_or_default()
}
