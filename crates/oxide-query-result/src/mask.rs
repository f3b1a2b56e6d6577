//! Cardinality masks.
//!
//! A mask states how many rows a caller accepts from a query. Masks combine
//! with `|`: `ONE | NONE` accepts zero or one row, `MANY | NONE` (that is,
//! [`QueryResultMask::ANY`]) accepts any number of rows.

use std::fmt;
use std::ops::BitOr;
use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;

use crate::code::QueryResultErrorCode;
use crate::error::QueryResultError;
use crate::query::Query;
use crate::result::QueryResult;

/// Accepted row counts for a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QueryResultMask(u8);

/// Returned for a bit pattern that is not a valid mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid query result mask: {0:#04x}")]
pub struct InvalidMaskError(pub u8);

impl QueryResultMask {
    /// Exactly one row.
    pub const ONE: Self = Self(1);
    /// One or more rows.
    pub const MANY: Self = Self(2);
    /// No rows.
    pub const NONE: Self = Self(4);
    /// Any number of rows.
    pub const ANY: Self = Self(2 | 4);

    const ALL_BITS: u8 = 1 | 2 | 4;

    /// Creates a mask from raw bits.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMaskError`] for zero or for unknown bits.
    pub const fn from_bits(bits: u8) -> Result<Self, InvalidMaskError> {
        if bits == 0 || bits & !Self::ALL_BITS != 0 {
            Err(InvalidMaskError(bits))
        } else {
            Ok(Self(bits))
        }
    }

    /// Returns the raw bits.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Returns whether every bit of `other` is set in `self`.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns the violation a result with `rows` rows would cause, if any.
    #[must_use]
    pub const fn violation(self, rows: usize) -> Option<QueryResultErrorCode> {
        let one = self.contains(Self::ONE);
        let many = self.contains(Self::MANY);
        match rows {
            0 if !self.contains(Self::NONE) => Some(QueryResultErrorCode::NoData),
            0 => None,
            _ if !one && !many => Some(QueryResultErrorCode::NotEmpty),
            1 => None,
            _ if !many => Some(QueryResultErrorCode::Multiple),
            _ => None,
        }
    }

    /// Checks a result against this mask.
    ///
    /// # Errors
    ///
    /// Returns a [`QueryResultError`] carrying the result, the query and its
    /// values when the row count is not accepted.
    pub fn check(
        self,
        result: QueryResult,
        query: impl Into<Query>,
        values: Option<Value>,
    ) -> Result<QueryResult, QueryResultError> {
        match self.violation(result.len()) {
            None => Ok(result),
            Some(code) => Err(QueryResultError::new(
                code,
                Arc::new(result),
                query,
                values,
            )),
        }
    }
}

impl BitOr for QueryResultMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl fmt::Display for QueryResultMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = [(Self::ONE, "one"), (Self::MANY, "many"), (Self::NONE, "none")]
            .into_iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| name)
            .collect();
        f.write_str(&names.join("|"))
    }
}
