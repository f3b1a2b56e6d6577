//! The query result error.
//!
//! A [`QueryResultError`] is created by a caller that executed a query and
//! found that the number of returned rows violates what it required. The
//! error keeps the whole execution context (result, query, bound values) and
//! renders it as a multi-line block:
//!
//! ```text
//! QueryResultError {
//!     code: queryResultErrorCode.noData
//!     message: "No data returned from the query."
//!     received: 0
//!     query: "SELECT * FROM users WHERE id = ?"
//!     values: [42]
//! }
//! ```
//!
//! The `values` line is left out when the query was executed without
//! separately bound values.

use std::backtrace::Backtrace;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::code::QueryResultErrorCode;
use crate::query::Query;
use crate::result::QueryResult;

/// Platform line ending used to join rendered lines.
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";

/// Platform line ending used to join rendered lines.
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Indentation per nesting level.
const GAP: &str = "    ";

/// A query returned a number of rows its caller did not accept.
///
/// # Example
///
/// ```
/// use oxide_query_result::{QueryResult, QueryResultError, QueryResultErrorCode};
///
/// let err = QueryResultError::new(
///     QueryResultErrorCode::NoData,
///     QueryResult::from_rows(vec![]),
///     "SELECT * FROM t WHERE id=1",
///     None,
/// );
///
/// assert_eq!(err.code(), QueryResultErrorCode::NoData);
/// assert_eq!(err.message(), "No data returned from the query.");
/// assert_eq!(err.received(), 0);
/// assert!(!err.to_string().contains("values:"));
/// ```
pub struct QueryResultError {
    code: QueryResultErrorCode,
    received: usize,
    result: Arc<QueryResult>,
    query: Query,
    values: Option<Value>,
    backtrace: Backtrace,
}

impl QueryResultError {
    /// Name identifying this error type.
    pub const NAME: &'static str = "QueryResultError";

    /// Creates an error from a code and the execution context.
    ///
    /// `received` is taken from the row count of `result` here and never
    /// recomputed. `values` is `None` when the values were already
    /// substituted into the query text.
    #[must_use]
    pub fn new(
        code: QueryResultErrorCode,
        result: impl Into<Arc<QueryResult>>,
        query: impl Into<Query>,
        values: Option<Value>,
    ) -> Self {
        let result = result.into();
        Self {
            code,
            received: result.len(),
            result,
            query: query.into(),
            values,
            backtrace: Backtrace::capture(),
        }
    }

    /// Returns the error type name, always [`Self::NAME`].
    #[must_use]
    pub const fn name(&self) -> &'static str {
        Self::NAME
    }

    /// Returns the violation code.
    #[must_use]
    pub const fn code(&self) -> QueryResultErrorCode {
        self.code
    }

    /// Returns the canonical message of the code.
    #[must_use]
    pub fn message(&self) -> &'static str {
        self.code.message()
    }

    /// Returns the number of rows the query returned.
    #[must_use]
    pub const fn received(&self) -> usize {
        self.received
    }

    /// Returns the result the error was created from.
    #[must_use]
    pub fn result(&self) -> &QueryResult {
        &self.result
    }

    /// Returns a shared handle to the result.
    #[must_use]
    pub fn shared_result(&self) -> Arc<QueryResult> {
        Arc::clone(&self.result)
    }

    /// Returns the executed query.
    #[must_use]
    pub const fn query(&self) -> &Query {
        &self.query
    }

    /// Returns the bound values, if the query had any.
    #[must_use]
    pub const fn values(&self) -> Option<&Value> {
        self.values.as_ref()
    }

    /// Returns the backtrace captured at construction.
    ///
    /// Only populated when backtraces are enabled, see
    /// [`Backtrace::capture`].
    #[must_use]
    pub const fn backtrace(&self) -> &Backtrace {
        &self.backtrace
    }

    /// Renders the error indented for the given nesting level.
    ///
    /// Level 0 is the same text as [`Display`](fmt::Display).
    #[must_use]
    pub fn render(&self, level: usize) -> String {
        let gap0 = GAP.repeat(level);
        let gap1 = GAP.repeat(level + 1);
        let mut lines = vec![
            format!("{} {{", Self::NAME),
            format!("{gap1}code: queryResultErrorCode.{}", self.code.name()),
            format!("{gap1}message: \"{}\"", self.message()),
            format!("{gap1}received: {}", self.received),
            format!("{gap1}query: {}", self.query),
        ];
        if let Some(values) = &self.values {
            lines.push(format!("{gap1}values: {values}"));
        }
        lines.push(format!("{gap0}}}"));
        lines.join(LINE_ENDING)
    }

    /// Returns the same rendering as [`Display`](fmt::Display).
    #[must_use]
    pub fn inspect(&self) -> String {
        self.render(0)
    }
}

impl fmt::Display for QueryResultError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(0))
    }
}

/// Debug output matches `Display`, so `{:?}` and panics show the full block.
impl fmt::Debug for QueryResultError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl std::error::Error for QueryResultError {}
