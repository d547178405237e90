//! User profile domain model.
//!
//! The store holds a single profile row; multi-user storage is not a goal.

use crate::model::MappingError;
use crate::store::user_store::{NewUserRecord, UserRecord};
use serde::{Deserialize, Serialize};

/// The tracked person's profile.
///
/// The password travels and persists in clear; credential hardening is the
/// embedding application's concern, not the data layer's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Store-assigned id; `None` for a profile not yet created.
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
    pub password: String,
}

impl User {
    /// Creates a not-yet-persisted profile.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    /// Maps a stored record into the domain shape. Field-for-field; the
    /// profile has no typed columns.
    pub fn from_record(record: &UserRecord) -> Self {
        Self {
            id: Some(record.id),
            name: record.name.clone(),
            email: record.email.clone(),
            password: record.password.clone(),
        }
    }

    /// Maps into the insertable record shape (no id; the store assigns one).
    pub fn to_new_record(&self) -> NewUserRecord {
        NewUserRecord {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }

    /// Maps into the full row shape used by update. Fails with `MissingId`
    /// when the profile was never persisted.
    pub fn to_record(&self) -> Result<UserRecord, MappingError> {
        Ok(UserRecord {
            id: self.persisted_id()?,
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }

    /// Returns the store-assigned id, or `MissingId` when this profile was
    /// never persisted.
    pub fn persisted_id(&self) -> Result<i64, MappingError> {
        self.id.ok_or(MappingError::MissingId { entity: "user" })
    }
}
