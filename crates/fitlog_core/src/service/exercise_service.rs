//! Exercise use-case service.
//!
//! # Invariants
//! - Intensity outside `1..=10` never reaches the repository.

use crate::model::exercise::Exercise;
use crate::repo::exercise_repo::ExerciseRepository;
use crate::repo::RepoError;
use crate::store::exercise_store::ExerciseStore;
use std::error::Error;
use std::fmt::{Display, Formatter};

const INTENSITY_MIN: u32 = 1;
const INTENSITY_MAX: u32 = 10;

/// Service error for exercise use-cases.
#[derive(Debug)]
pub enum ExerciseServiceError {
    /// Intensity outside the accepted `1..=10` scale.
    InvalidIntensity(u32),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for ExerciseServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidIntensity(value) => write!(
                f,
                "intensity {value} is outside the accepted range {INTENSITY_MIN}..={INTENSITY_MAX}"
            ),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ExerciseServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::InvalidIntensity(_) => None,
        }
    }
}

impl From<RepoError> for ExerciseServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Use-case entry points for the exercise log.
pub struct ExerciseService<S: ExerciseStore> {
    repo: ExerciseRepository<S>,
}

impl<S: ExerciseStore> ExerciseService<S> {
    pub fn new(repo: ExerciseRepository<S>) -> Self {
        Self { repo }
    }

    /// Fetches every logged exercise session.
    pub fn get_all_exercises(&self) -> Result<Vec<Exercise>, ExerciseServiceError> {
        Ok(self.repo.get_all()?)
    }

    /// Logs one exercise session after validating its intensity.
    pub fn add_exercise(&self, exercise: &Exercise) -> Result<(), ExerciseServiceError> {
        validate_intensity(exercise.intensity)?;
        Ok(self.repo.add(exercise)?)
    }

    /// Removes one previously fetched exercise session.
    pub fn delete_exercise(&self, exercise: &Exercise) -> Result<(), ExerciseServiceError> {
        Ok(self.repo.delete(exercise)?)
    }
}

fn validate_intensity(intensity: u32) -> Result<(), ExerciseServiceError> {
    if !(INTENSITY_MIN..=INTENSITY_MAX).contains(&intensity) {
        return Err(ExerciseServiceError::InvalidIntensity(intensity));
    }
    Ok(())
}
