//! Sleep use-case service.
//!
//! Pure delegation: the sleep log carries no business rule (quality is an
//! unconstrained score in the data layer), so every operation maps to
//! exactly one repository call.

use crate::model::sleep::Sleep;
use crate::repo::sleep_repo::SleepRepository;
use crate::repo::RepoResult;
use crate::store::sleep_store::SleepStore;

/// Use-case entry points for the sleep log.
pub struct SleepService<S: SleepStore> {
    repo: SleepRepository<S>,
}

impl<S: SleepStore> SleepService<S> {
    pub fn new(repo: SleepRepository<S>) -> Self {
        Self { repo }
    }

    /// Fetches every logged sleep session.
    pub fn get_all_sleeps(&self) -> RepoResult<Vec<Sleep>> {
        self.repo.get_all()
    }

    /// Logs one sleep session.
    pub fn add_sleep(&self, sleep: &Sleep) -> RepoResult<()> {
        self.repo.add(sleep)
    }

    /// Removes one previously fetched sleep session.
    pub fn delete_sleep(&self, sleep: &Sleep) -> RepoResult<()> {
        self.repo.delete(sleep)
    }
}
