//! Repository layer: domain-typed data access, one repository per entity.
//!
//! # Responsibility
//! - Wrap a record store and the domain mapper behind domain-typed
//!   operations.
//! - Enforce the persisted-identity precondition before delete/update ever
//!   reaches the store.
//!
//! # Invariants
//! - Any mapping failure on a read path aborts the whole fetch; corrupt
//!   rows are rejected, not skipped.

use crate::model::MappingError;
use crate::store::StoreError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod exercise_repo;
pub mod sleep_repo;
pub mod user_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error: persistence transport or record/domain mapping.
#[derive(Debug)]
pub enum RepoError {
    Store(StoreError),
    Mapping(MappingError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::Mapping(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::Mapping(err) => Some(err),
        }
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<MappingError> for RepoError {
    fn from(value: MappingError) -> Self {
        Self::Mapping(value)
    }
}
