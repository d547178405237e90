//! User profile repository.

use crate::model::user::User;
use crate::repo::RepoResult;
use crate::store::user_store::UserStore;

/// Domain-typed access to the single profile row.
pub struct UserRepository<S: UserStore> {
    store: S,
}

impl<S: UserStore> UserRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Fetches the profile. `Ok(None)` when none has been created yet.
    pub fn get(&self) -> RepoResult<Option<User>> {
        let record = self.store.get_user()?;
        Ok(record.as_ref().map(User::from_record))
    }

    /// Creates the profile and returns its store-assigned id.
    pub fn create(&self, user: &User) -> RepoResult<i64> {
        let id = self.store.insert_user(&user.to_new_record())?;
        Ok(id)
    }

    /// Replaces the persisted profile row. Fails with `MissingId` before
    /// any store call when the profile was never persisted.
    pub fn update(&self, user: &User) -> RepoResult<()> {
        let record = user.to_record()?;
        self.store.update_user(&record)?;
        Ok(())
    }

    /// Deletes the profile by its persisted id; same identity precondition
    /// as [`Self::update`]. Deleting an id no longer present is a no-op.
    pub fn delete(&self, user: &User) -> RepoResult<()> {
        let id = user.persisted_id()?;
        self.store.delete_user_by_id(id)?;
        Ok(())
    }
}
