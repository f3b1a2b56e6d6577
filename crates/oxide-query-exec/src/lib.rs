//! SQLite query helpers that enforce result cardinality.
//!
//! `oxide-query-exec` runs statements through sqlx and checks how many rows
//! came back. When the count is wrong the helpers fail with a
//! [`QueryResultError`] that carries the result, the SQL and its parameters:
//!
//! | Helper | Accepts |
//! |---|---|
//! | [`Database::none`] | no rows |
//! | [`Database::one`] | exactly one row |
//! | [`Database::one_or_none`] | zero or one row |
//! | [`Database::many`] | one or more rows |
//! | [`Database::many_or_none`], [`Database::any`] | any number of rows |
//!
//! # Example
//!
//! ```rust,ignore
//! use oxide_query_exec::{Database, DatabaseConfig, Statement};
//!
//! let db = Database::connect(&DatabaseConfig::new("sqlite:app.db")).await?;
//!
//! match db.one(&Statement::new("SELECT * FROM users WHERE id = ?").bind(7_i64)).await {
//!     Ok(user) => println!("{}", user["name"]),
//!     Err(err) => match err.query_result() {
//!         Some(cardinality) => eprintln!("{cardinality}"),
//!         None => return Err(err),
//!     },
//! }
//! ```
//!
//! # CLI Usage
//!
//! ```bash
//! # Exactly one row expected
//! oxide-query --database sqlite:app.db --param 7 "SELECT * FROM users WHERE id = ?"
//!
//! # No rows expected
//! oxide-query --expect none "DELETE FROM sessions"
//! ```
//!
//! [`QueryResultError`]: oxide_query_result::QueryResultError

pub mod config;
mod database;
pub mod error;
mod statement;

pub use config::DatabaseConfig;
pub use database::Database;
pub use error::{ExecError, Result};
pub use statement::{parse_param, Statement};
