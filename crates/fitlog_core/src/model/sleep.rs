//! Sleep domain model.

use crate::model::MappingError;
use crate::store::sleep_store::{NewSleepRecord, SleepRecord};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One logged sleep session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sleep {
    /// Store-assigned id; `None` for records not yet inserted.
    pub id: Option<i64>,
    /// Absolute instant the session began.
    pub start_time: DateTime<Utc>,
    /// Session length in minutes.
    pub duration_min: u32,
    /// Subjective quality score; the data layer enforces no range.
    pub quality: u32,
}

impl Sleep {
    /// Creates a not-yet-persisted sleep session.
    pub fn new(start_time: DateTime<Utc>, duration_min: u32, quality: u32) -> Self {
        Self {
            id: None,
            start_time,
            duration_min,
            quality,
        }
    }

    /// Maps a stored record into the domain shape, rejecting timestamps the
    /// typed representation cannot hold.
    pub fn from_record(record: &SleepRecord) -> Result<Self, MappingError> {
        let start_time = DateTime::<Utc>::from_timestamp_millis(record.start_time_ms)
            .ok_or(MappingError::InvalidTimestamp(record.start_time_ms))?;

        Ok(Self {
            id: Some(record.id),
            start_time,
            duration_min: record.duration_min,
            quality: record.quality,
        })
    }

    /// Maps into the insertable record shape (no id; the store assigns one).
    pub fn to_new_record(&self) -> NewSleepRecord {
        NewSleepRecord {
            start_time_ms: self.start_time.timestamp_millis(),
            duration_min: self.duration_min,
            quality: self.quality,
        }
    }

    /// Returns the store-assigned id, or `MissingId` when this object was
    /// never persisted.
    pub fn persisted_id(&self) -> Result<i64, MappingError> {
        self.id.ok_or(MappingError::MissingId { entity: "sleep" })
    }
}
