//! # oxide-query-result
//!
//! Structured errors for queries that return an unexpected number of rows.
//!
//! This crate provides:
//! - [`QueryResultErrorCode`], the closed set of cardinality violations
//! - [`QueryResultError`], the error value carrying the result, query and
//!   bound values, with a deterministic multi-line rendering
//! - [`QueryResultMask`] for checking a result against an expected row count
//!
//! ## Example
//!
//! ```rust
//! use oxide_query_result::{QueryResult, QueryResultErrorCode, QueryResultMask};
//! use serde_json::json;
//!
//! let result =
//!     QueryResult::from_json_rows("SELECT", vec![json!({"id": 1}), json!({"id": 2})]).unwrap();
//!
//! let err = QueryResultMask::ONE
//!     .check(result, "SELECT * FROM t", Some(json!([])))
//!     .unwrap_err();
//!
//! assert_eq!(err.code(), QueryResultErrorCode::Multiple);
//! assert_eq!(err.received(), 2);
//! println!("{err}");
//! ```

pub mod code;
mod error;
pub mod mask;
mod query;
mod result;
pub mod value;

pub use code::{CodeEntry, InvalidCodeError, QueryResultErrorCode, CODES};
pub use error::{QueryResultError, LINE_ENDING};
pub use mask::{InvalidMaskError, QueryResultMask};
pub use query::Query;
pub use result::{command_of, InvalidRowError, QueryResult, Row};
pub use value::{values_to_json, SqlValue, ToSqlValue};
