//! Sleep screen state holder.

use crate::model::sleep::Sleep;
use crate::repo::RepoResult;
use crate::screen::ScreenState;
use crate::service::sleep_service::SleepService;
use crate::store::sleep_store::SleepStore;
use log::info;
use tokio::sync::watch;

/// Holds the latest fetched sleep log and republishes it after every
/// mutation.
pub struct SleepScreen<S: SleepStore> {
    service: SleepService<S>,
    slot: watch::Sender<ScreenState<Vec<Sleep>>>,
}

impl<S: SleepStore> SleepScreen<S> {
    /// Creates the screen and immediately runs the initial fetch.
    pub fn new(service: SleepService<S>) -> RepoResult<Self> {
        let (slot, _) = watch::channel(ScreenState::Uninitialized);
        let screen = Self { service, slot };
        screen.refresh()?;
        Ok(screen)
    }

    /// Subscribes to the published slot. The receiver observes the current
    /// value immediately.
    pub fn subscribe(&self) -> watch::Receiver<ScreenState<Vec<Sleep>>> {
        self.slot.subscribe()
    }

    /// Re-fetches the full sleep log and publishes it.
    pub fn refresh(&self) -> RepoResult<()> {
        self.slot.send_replace(ScreenState::Loading);
        let sleeps = self.service.get_all_sleeps()?;
        info!(
            "event=screen_refresh module=screen screen=sleep count={}",
            sleeps.len()
        );
        self.slot.send_replace(ScreenState::Loaded(sleeps));
        Ok(())
    }

    /// Logs one session, then republishes the refreshed log.
    pub fn add_sleep(&self, sleep: &Sleep) -> RepoResult<()> {
        self.service.add_sleep(sleep)?;
        self.refresh()
    }

    /// Removes one session, then republishes the refreshed log.
    pub fn delete_sleep(&self, sleep: &Sleep) -> RepoResult<()> {
        self.service.delete_sleep(sleep)?;
        self.refresh()
    }
}
