//! Exercise screen state holder.

use crate::model::exercise::Exercise;
use crate::screen::ScreenState;
use crate::service::exercise_service::{ExerciseService, ExerciseServiceError};
use crate::store::exercise_store::ExerciseStore;
use log::info;
use tokio::sync::watch;

/// Holds the latest fetched exercise log and republishes it after every
/// mutation.
pub struct ExerciseScreen<S: ExerciseStore> {
    service: ExerciseService<S>,
    slot: watch::Sender<ScreenState<Vec<Exercise>>>,
}

impl<S: ExerciseStore> ExerciseScreen<S> {
    /// Creates the screen and immediately runs the initial fetch.
    pub fn new(service: ExerciseService<S>) -> Result<Self, ExerciseServiceError> {
        let (slot, _) = watch::channel(ScreenState::Uninitialized);
        let screen = Self { service, slot };
        screen.refresh()?;
        Ok(screen)
    }

    /// Subscribes to the published slot. The receiver observes the current
    /// value immediately.
    pub fn subscribe(&self) -> watch::Receiver<ScreenState<Vec<Exercise>>> {
        self.slot.subscribe()
    }

    /// Re-fetches the full exercise log and publishes it.
    pub fn refresh(&self) -> Result<(), ExerciseServiceError> {
        self.slot.send_replace(ScreenState::Loading);
        let exercises = self.service.get_all_exercises()?;
        info!(
            "event=screen_refresh module=screen screen=exercise count={}",
            exercises.len()
        );
        self.slot.send_replace(ScreenState::Loaded(exercises));
        Ok(())
    }

    /// Logs one session, then republishes the refreshed log.
    pub fn add_exercise(&self, exercise: &Exercise) -> Result<(), ExerciseServiceError> {
        self.service.add_exercise(exercise)?;
        self.refresh()
    }

    /// Removes one session, then republishes the refreshed log.
    pub fn delete_exercise(&self, exercise: &Exercise) -> Result<(), ExerciseServiceError> {
        self.service.delete_exercise(exercise)?;
        self.refresh()
    }
}
