//! Local persistence and use-case core for a fitness log: user profile,
//! sleep log, exercise log.
//!
//! Layering, bottom up: record stores (SQLite, primitive-field records),
//! domain mapper (typed instants, closed category enum), repositories
//! (domain-typed operations), use-case services (one method per operation,
//! business rules), and per-screen state holders publishing through a
//! single-slot watch channel.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod screen;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging};
pub use model::exercise::{Exercise, ExerciseCategory};
pub use model::sleep::Sleep;
pub use model::user::User;
pub use model::MappingError;
pub use repo::exercise_repo::ExerciseRepository;
pub use repo::sleep_repo::SleepRepository;
pub use repo::user_repo::UserRepository;
pub use repo::{RepoError, RepoResult};
pub use screen::exercise_screen::ExerciseScreen;
pub use screen::sleep_screen::SleepScreen;
pub use screen::user_screen::UserScreen;
pub use screen::{local_wall_clock, ScreenState};
pub use service::exercise_service::{ExerciseService, ExerciseServiceError};
pub use service::sleep_service::SleepService;
pub use service::user_service::{UserService, UserServiceError};
pub use store::exercise_store::{ExerciseStore, SqliteExerciseStore};
pub use store::sleep_store::{SleepStore, SqliteSleepStore};
pub use store::user_store::{SqliteUserStore, UserStore};
pub use store::{StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
