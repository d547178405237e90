//! Sleep repository.

use crate::model::sleep::Sleep;
use crate::model::MappingError;
use crate::repo::RepoResult;
use crate::store::sleep_store::SleepStore;

/// Domain-typed access to the sleep log.
pub struct SleepRepository<S: SleepStore> {
    store: S,
}

impl<S: SleepStore> SleepRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Fetches the full sleep log in store order.
    pub fn get_all(&self) -> RepoResult<Vec<Sleep>> {
        let records = self.store.get_all_sleeps()?;
        let sleeps = records
            .iter()
            .map(Sleep::from_record)
            .collect::<Result<Vec<_>, MappingError>>()?;
        Ok(sleeps)
    }

    /// Inserts one session. The store-assigned id stays with the store;
    /// callers observe it through the next fetch.
    pub fn add(&self, sleep: &Sleep) -> RepoResult<()> {
        self.store.insert_sleep(&sleep.to_new_record())?;
        Ok(())
    }

    /// Deletes one session by its persisted id.
    ///
    /// Fails with `MissingId` before any store call when the session was
    /// never persisted. Deleting an id no longer present is a no-op.
    pub fn delete(&self, sleep: &Sleep) -> RepoResult<()> {
        let id = sleep.persisted_id()?;
        self.store.delete_sleep_by_id(id)?;
        Ok(())
    }
}
