//! Exercise domain model.
//!
//! # Invariants
//! - `category` belongs to a closed set and round-trips exactly through its
//!   textual storage form (case-sensitive).
//! - `id` is `None` until the store assigns one on insert.

use crate::model::MappingError;
use crate::store::exercise_store::{ExerciseRecord, NewExerciseRecord};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Closed set of tracked exercise kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExerciseCategory {
    Running,
    Swimming,
    Football,
    Walking,
    Riding,
}

impl ExerciseCategory {
    /// Textual form persisted in the `exercise.category` column.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::Swimming => "Swimming",
            Self::Football => "Football",
            Self::Walking => "Walking",
            Self::Riding => "Riding",
        }
    }

    /// Parses the persisted textual form. `None` for anything outside the
    /// closed set; callers decide whether that is corruption.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Running" => Some(Self::Running),
            "Swimming" => Some(Self::Swimming),
            "Football" => Some(Self::Football),
            "Walking" => Some(Self::Walking),
            "Riding" => Some(Self::Riding),
            _ => None,
        }
    }
}

/// One logged exercise session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    /// Store-assigned id; `None` for records not yet inserted.
    pub id: Option<i64>,
    /// Absolute start instant.
    pub start_time: DateTime<Utc>,
    /// Session length in minutes.
    pub duration_min: u32,
    pub category: ExerciseCategory,
    /// Perceived effort; the use-case layer holds it to `1..=10`.
    pub intensity: u32,
}

impl Exercise {
    /// Creates a not-yet-persisted exercise.
    pub fn new(
        start_time: DateTime<Utc>,
        duration_min: u32,
        category: ExerciseCategory,
        intensity: u32,
    ) -> Self {
        Self {
            id: None,
            start_time,
            duration_min,
            category,
            intensity,
        }
    }

    /// Maps a stored record into the domain shape.
    ///
    /// Rejects corrupt persisted state: an out-of-set category string or a
    /// non-representable timestamp.
    pub fn from_record(record: &ExerciseRecord) -> Result<Self, MappingError> {
        let category = ExerciseCategory::parse(&record.category)
            .ok_or_else(|| MappingError::UnrecognizedCategory(record.category.clone()))?;
        let start_time = DateTime::<Utc>::from_timestamp_millis(record.start_time_ms)
            .ok_or(MappingError::InvalidTimestamp(record.start_time_ms))?;

        Ok(Self {
            id: Some(record.id),
            start_time,
            duration_min: record.duration_min,
            category,
            intensity: record.intensity,
        })
    }

    /// Maps into the insertable record shape (no id; the store assigns one).
    pub fn to_new_record(&self) -> NewExerciseRecord {
        NewExerciseRecord {
            start_time_ms: self.start_time.timestamp_millis(),
            duration_min: self.duration_min,
            category: self.category.as_str().to_string(),
            intensity: self.intensity,
        }
    }

    /// Returns the store-assigned id, or `MissingId` when this object was
    /// never persisted. Delete paths call this before touching the store.
    pub fn persisted_id(&self) -> Result<i64, MappingError> {
        self.id.ok_or(MappingError::MissingId {
            entity: "exercise",
        })
    }
}
