//! Record store layer: one table-backed store per entity kind.
//!
//! # Responsibility
//! - Define the record shapes persisted per table (primitive fields only).
//! - Define store contracts and their SQLite implementations.
//!
//! # Invariants
//! - Ids are assigned by the store on insert, never by callers.
//! - `delete_*_by_id` on an absent id is a no-op, not an error.
//! - SQL stays inside this module; layers above see records and errors.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod exercise_store;
pub mod sleep_store;
pub mod user_store;

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence error surfaced by the record stores.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    /// An operation that targets one existing row found none.
    RowNotFound { table: &'static str, id: i64 },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::RowNotFound { table, id } => {
                write!(f, "no row with id {id} in table `{table}`")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::RowNotFound { .. } => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}
