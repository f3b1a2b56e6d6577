//! Query execution against SQLite with cardinality checks.

use oxide_query_result::{command_of, QueryResult, QueryResultMask, Row, SqlValue};
use serde_json::Value;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::{Column, Row as _, TypeInfo, ValueRef};
use tracing::{debug, warn};

use crate::config::DatabaseConfig;
use crate::error::{ExecError, Result};
use crate::statement::Statement;

/// A SQLite database with query helpers that enforce row counts.
///
/// # Example
///
/// ```ignore
/// use oxide_query_exec::{Database, DatabaseConfig, Statement};
///
/// let db = Database::connect(&DatabaseConfig::default()).await?;
///
/// // Exactly one row, or a QueryResultError
/// let user = db
///     .one(&Statement::new("SELECT * FROM users WHERE id = ?").bind(1_i64))
///     .await?;
///
/// // No rows
/// db.none(&Statement::raw("DELETE FROM sessions")).await?;
/// ```
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Wraps an existing pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Opens a pool from the configuration.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.url)
            .await?;
        Ok(Self::new(pool))
    }

    /// Returns the underlying pool.
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Runs a statement and returns its rows without any check.
    pub async fn execute(&self, statement: &Statement) -> Result<QueryResult> {
        debug!(sql = %statement.sql, params = ?statement.params, "Executing SQL");

        let mut query = sqlx::query(&statement.sql);
        for param in statement.params.iter().flatten() {
            query = bind_param(query, param.clone());
        }

        let rows = query.fetch_all(&self.pool).await?;
        let rows = rows.iter().map(decode_row).collect::<Result<Vec<_>>>()?;
        Ok(QueryResult::new(command_of(&statement.sql), rows))
    }

    /// Runs a statement and checks its row count against `mask`.
    pub async fn query(&self, statement: &Statement, mask: QueryResultMask) -> Result<QueryResult> {
        let result = self.execute(statement).await?;
        mask.check(result, statement.sql.as_str(), statement.values_json())
            .map_err(|err| {
                warn!(
                    code = %err.code(),
                    received = err.received(),
                    expected = %mask,
                    "{err}"
                );
                ExecError::from(err)
            })
    }

    /// Expects no rows.
    pub async fn none(&self, statement: &Statement) -> Result<()> {
        self.query(statement, QueryResultMask::NONE).await?;
        Ok(())
    }

    /// Expects exactly one row.
    pub async fn one(&self, statement: &Statement) -> Result<Row> {
        let result = self.query(statement, QueryResultMask::ONE).await?;
        Ok(result.into_rows().swap_remove(0))
    }

    /// Expects zero or one row.
    pub async fn one_or_none(&self, statement: &Statement) -> Result<Option<Row>> {
        let result = self
            .query(statement, QueryResultMask::ONE | QueryResultMask::NONE)
            .await?;
        Ok(result.into_rows().into_iter().next())
    }

    /// Expects one or more rows.
    pub async fn many(&self, statement: &Statement) -> Result<Vec<Row>> {
        let result = self.query(statement, QueryResultMask::MANY).await?;
        Ok(result.into_rows())
    }

    /// Accepts any number of rows.
    pub async fn many_or_none(&self, statement: &Statement) -> Result<Vec<Row>> {
        let result = self.query(statement, QueryResultMask::ANY).await?;
        Ok(result.into_rows())
    }

    /// Alias for [`Self::many_or_none`].
    pub async fn any(&self, statement: &Statement) -> Result<Vec<Row>> {
        self.many_or_none(statement).await
    }
}

/// Decodes a SQLite row by the storage class of each value.
fn decode_row(row: &SqliteRow) -> Result<Row> {
    let mut decoded = Row::new();
    for (idx, column) in row.columns().iter().enumerate() {
        let raw = row.try_get_raw(idx)?;
        let value = if raw.is_null() {
            Value::Null
        } else {
            let type_name = raw.type_info().name().to_string();
            match type_name.as_str() {
                "INTEGER" | "BOOLEAN" => Value::from(row.try_get_unchecked::<i64, _>(idx)?),
                "REAL" | "NUMERIC" => Value::from(row.try_get_unchecked::<f64, _>(idx)?),
                "BLOB" => Value::from(row.try_get_unchecked::<Vec<u8>, _>(idx)?),
                _ => Value::from(row.try_get_unchecked::<String, _>(idx)?),
            }
        };
        decoded.insert(column.name().to_string(), value);
    }
    Ok(decoded)
}

/// Binds a SqlValue parameter to a raw query.
fn bind_param<'q>(
    query: sqlx::query::Query<'q, sqlx::Sqlite, sqlx::sqlite::SqliteArguments<'q>>,
    value: SqlValue,
) -> sqlx::query::Query<'q, sqlx::Sqlite, sqlx::sqlite::SqliteArguments<'q>> {
    match value {
        SqlValue::Null => query.bind(Option::<i64>::None),
        SqlValue::Bool(b) => query.bind(b),
        SqlValue::Int(i) => query.bind(i),
        SqlValue::Float(f) => query.bind(f),
        SqlValue::Text(s) => query.bind(s),
        SqlValue::Blob(b) => query.bind(b),
    }
}
