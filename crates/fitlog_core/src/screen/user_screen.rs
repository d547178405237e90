//! User profile screen state holder.
//!
//! Publishes `Loaded(None)` when no profile exists yet; an absent profile
//! is a value, never a fault.

use crate::model::user::User;
use crate::repo::RepoResult;
use crate::screen::ScreenState;
use crate::service::user_service::{UserService, UserServiceError};
use crate::store::user_store::UserStore;
use tokio::sync::watch;

/// Holds the latest fetched profile and republishes it after every
/// mutation.
pub struct UserScreen<S: UserStore> {
    service: UserService<S>,
    slot: watch::Sender<ScreenState<Option<User>>>,
}

impl<S: UserStore> UserScreen<S> {
    /// Creates the screen and immediately runs the initial fetch.
    pub fn new(service: UserService<S>) -> RepoResult<Self> {
        let (slot, _) = watch::channel(ScreenState::Uninitialized);
        let screen = Self { service, slot };
        screen.refresh()?;
        Ok(screen)
    }

    /// Subscribes to the published slot. The receiver observes the current
    /// value immediately.
    pub fn subscribe(&self) -> watch::Receiver<ScreenState<Option<User>>> {
        self.slot.subscribe()
    }

    /// Re-fetches the profile and publishes it.
    pub fn refresh(&self) -> RepoResult<()> {
        self.slot.send_replace(ScreenState::Loading);
        let user = self.service.get_user()?;
        self.slot.send_replace(ScreenState::Loaded(user));
        Ok(())
    }

    /// Creates the profile, then republishes the refreshed state.
    pub fn create_user(&self, user: &User) -> Result<(), UserServiceError> {
        self.service.create_user(user)?;
        Ok(self.refresh()?)
    }

    /// Updates the profile, then republishes the refreshed state.
    pub fn update_user(&self, user: &User) -> Result<(), UserServiceError> {
        self.service.update_user(user)?;
        Ok(self.refresh()?)
    }

    /// Deletes the profile, then republishes the refreshed state.
    pub fn delete_user(&self, user: &User) -> RepoResult<()> {
        self.service.delete_user(user)?;
        self.refresh()
    }
}
