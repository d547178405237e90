//! User profile use-case service.
//!
//! # Invariants
//! - A malformed email never reaches the repository, on create or update.
//! - Create and update are distinct operations; create never overwrites an
//!   existing row.

use crate::model::user::User;
use crate::repo::user_repo::UserRepository;
use crate::repo::{RepoError, RepoResult};
use crate::store::user_store::UserStore;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email regex"));

/// Service error for profile use-cases.
#[derive(Debug)]
pub enum UserServiceError {
    /// Email does not look like `local@domain.tld`.
    InvalidEmail(String),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for UserServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidEmail(value) => write!(f, "malformed email address: `{value}`"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for UserServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::InvalidEmail(_) => None,
        }
    }
}

impl From<RepoError> for UserServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Use-case entry points for the profile.
pub struct UserService<S: UserStore> {
    repo: UserRepository<S>,
}

impl<S: UserStore> UserService<S> {
    pub fn new(repo: UserRepository<S>) -> Self {
        Self { repo }
    }

    /// Fetches the profile. `Ok(None)` when none has been created yet.
    pub fn get_user(&self) -> RepoResult<Option<User>> {
        self.repo.get()
    }

    /// Creates the profile and returns its store-assigned id.
    pub fn create_user(&self, user: &User) -> Result<i64, UserServiceError> {
        validate_email(&user.email)?;
        Ok(self.repo.create(user)?)
    }

    /// Replaces the persisted profile fields.
    pub fn update_user(&self, user: &User) -> Result<(), UserServiceError> {
        validate_email(&user.email)?;
        Ok(self.repo.update(user)?)
    }

    /// Deletes the profile.
    pub fn delete_user(&self, user: &User) -> RepoResult<()> {
        self.repo.delete(user)
    }
}

fn validate_email(email: &str) -> Result<(), UserServiceError> {
    if !EMAIL_RE.is_match(email) {
        return Err(UserServiceError::InvalidEmail(email.to_string()));
    }
    Ok(())
}
