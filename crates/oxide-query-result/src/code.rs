//! Query result error codes.
//!
//! The set of codes is closed: every cardinality violation is one of
//! [`QueryResultErrorCode::NoData`], [`QueryResultErrorCode::NotEmpty`] or
//! [`QueryResultErrorCode::Multiple`]. Each code maps to a symbolic name and a
//! canonical message through the read-only [`CODES`] table.

use std::fmt;

use thiserror::Error;

/// The kind of cardinality violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum QueryResultErrorCode {
    /// No data returned from the query, when at least one row was required.
    NoData = 0,
    /// Rows were returned, when none were expected.
    NotEmpty = 1,
    /// More than one row was returned, when at most one was expected.
    Multiple = 2,
}

/// A registry entry: the symbolic name and canonical message of a code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeEntry {
    /// The code this entry describes.
    pub code: QueryResultErrorCode,
    /// Symbolic name, as it appears in rendered errors.
    pub name: &'static str,
    /// Canonical human-readable message.
    pub message: &'static str,
}

/// Registry of all codes, indexed by code value.
pub static CODES: [CodeEntry; 3] = [
    CodeEntry {
        code: QueryResultErrorCode::NoData,
        name: "noData",
        message: "No data returned from the query.",
    },
    CodeEntry {
        code: QueryResultErrorCode::NotEmpty,
        name: "notEmpty",
        message: "No return data was expected.",
    },
    CodeEntry {
        code: QueryResultErrorCode::Multiple,
        name: "multiple",
        message: "Multiple rows were not expected.",
    },
];

/// Returned when an integer does not name a registry code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid query result error code: {0}")]
pub struct InvalidCodeError(pub i64);

impl QueryResultErrorCode {
    /// All codes, in registry order.
    pub const ALL: [Self; 3] = [Self::NoData, Self::NotEmpty, Self::Multiple];

    /// Returns the registry entry for this code.
    #[must_use]
    pub fn entry(self) -> &'static CodeEntry {
        &CODES[self as usize]
    }

    /// Returns the symbolic name, e.g. `noData`.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.entry().name
    }

    /// Returns the canonical message.
    #[must_use]
    pub fn message(self) -> &'static str {
        self.entry().message
    }

    /// Returns the numeric value of the code.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

/// Looks up the registry entry for a raw code.
///
/// # Errors
///
/// Returns [`InvalidCodeError`] if `code` is not a registry code.
pub fn lookup(code: i64) -> Result<&'static CodeEntry, InvalidCodeError> {
    QueryResultErrorCode::try_from(code).map(QueryResultErrorCode::entry)
}

impl TryFrom<i64> for QueryResultErrorCode {
    type Error = InvalidCodeError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::NoData),
            1 => Ok(Self::NotEmpty),
            2 => Ok(Self::Multiple),
            other => Err(InvalidCodeError(other)),
        }
    }
}

impl TryFrom<u8> for QueryResultErrorCode {
    type Error = InvalidCodeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_from(i64::from(value))
    }
}

impl From<QueryResultErrorCode> for u8 {
    fn from(code: QueryResultErrorCode) -> Self {
        code.as_u8()
    }
}

impl fmt::Display for QueryResultErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
