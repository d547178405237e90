//! Exercise repository.

use crate::model::exercise::Exercise;
use crate::model::MappingError;
use crate::repo::RepoResult;
use crate::store::exercise_store::ExerciseStore;

/// Domain-typed access to the exercise log.
pub struct ExerciseRepository<S: ExerciseStore> {
    store: S,
}

impl<S: ExerciseStore> ExerciseRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Fetches the full exercise log in store order. A row whose category
    /// or timestamp cannot be mapped fails the whole fetch.
    pub fn get_all(&self) -> RepoResult<Vec<Exercise>> {
        let records = self.store.get_all_exercises()?;
        let exercises = records
            .iter()
            .map(Exercise::from_record)
            .collect::<Result<Vec<_>, MappingError>>()?;
        Ok(exercises)
    }

    /// Inserts one session. The store-assigned id stays with the store;
    /// callers observe it through the next fetch.
    pub fn add(&self, exercise: &Exercise) -> RepoResult<()> {
        self.store.insert_exercise(&exercise.to_new_record())?;
        Ok(())
    }

    /// Deletes one session by its persisted id.
    ///
    /// Fails with `MissingId` before any store call when the session was
    /// never persisted. Deleting an id no longer present is a no-op.
    pub fn delete(&self, exercise: &Exercise) -> RepoResult<()> {
        let id = exercise.persisted_id()?;
        self.store.delete_exercise_by_id(id)?;
        Ok(())
    }
}
