//! Domain model and record mapping for the fitness log.
//!
//! # Responsibility
//! - Define the in-memory shapes used by business logic: typed instants,
//!   a closed exercise category enum, optional store-assigned ids.
//! - Convert between domain objects and the primitive-field records held by
//!   the record stores.
//!
//! # Invariants
//! - Conversions are pure; no conversion touches storage.
//! - Categories round-trip exactly through their textual form.
//! - Stored and in-memory timestamps are both absolute instants; wall-clock
//!   rendering is a presentation concern.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod exercise;
pub mod sleep;
pub mod user;

/// Failure conditions of the record/domain mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MappingError {
    /// A conversion that requires a persisted identity was attempted on a
    /// domain object the store has never assigned an id to.
    MissingId { entity: &'static str },
    /// A stored category string is outside the closed category set.
    /// Treated as data corruption, not user input.
    UnrecognizedCategory(String),
    /// A stored epoch-millis value cannot be represented as a typed instant.
    InvalidTimestamp(i64),
}

impl Display for MappingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingId { entity } => {
                write!(f, "{entity} has no store-assigned id")
            }
            Self::UnrecognizedCategory(value) => {
                write!(f, "unrecognized exercise category `{value}` in storage")
            }
            Self::InvalidTimestamp(ms) => {
                write!(f, "stored timestamp {ms} is outside the representable range")
            }
        }
    }
}

impl Error for MappingError {}
