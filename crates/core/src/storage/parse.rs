//! Row value helpers for the client state table

use chrono::{DateTime, Utc};
use rusqlite::types::Type;
use rusqlite::Error as SqlError;

/// Read back an `updated_at` column written with `to_rfc3339`
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, SqlError> {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(stamp) => Ok(stamp.with_timezone(&Utc)),
        Err(e) => Err(SqlError::FromSqlConversionFailure(2, Type::Text, Box::new(e))),
    }
}

/// `QueryReturnedNoRows` becomes `None`; other errors pass through
pub trait OptionalExt<T> {
    fn optional(self) -> Result<Option<T>, SqlError>;
}

impl<T> OptionalExt<T> for Result<T, SqlError> {
    fn optional(self) -> Result<Option<T>, SqlError> {
        match self {
            Err(SqlError::QueryReturnedNoRows) => Ok(None),
            other => other.map(Some),
        }
    }
}
