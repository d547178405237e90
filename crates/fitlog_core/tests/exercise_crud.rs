use chrono::{DateTime, Utc};
use fitlog_core::{
    Exercise, ExerciseCategory, ExerciseRepository, ExerciseService, ExerciseServiceError,
    MappingError, RepoError, SqliteExerciseStore,
};
use fitlog_core::db::open_db_in_memory;

fn service(conn: &rusqlite::Connection) -> ExerciseService<SqliteExerciseStore<'_>> {
    ExerciseService::new(ExerciseRepository::new(SqliteExerciseStore::new(conn)))
}

fn start_instant() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp_millis(1_700_000_000_000).unwrap()
}

#[test]
fn get_all_on_empty_table_returns_empty_list() {
    let conn = open_db_in_memory().unwrap();
    assert!(service(&conn).get_all_exercises().unwrap().is_empty());
}

#[test]
fn added_session_comes_back_with_exact_category_text() {
    let conn = open_db_in_memory().unwrap();
    let service = service(&conn);

    let session = Exercise::new(start_instant(), 20, ExerciseCategory::Swimming, 3);
    service.add_exercise(&session).unwrap();

    let exercises = service.get_all_exercises().unwrap();
    assert_eq!(exercises.len(), 1);
    assert_eq!(exercises[0].category, ExerciseCategory::Swimming);
    assert_eq!(exercises[0].duration_min, 20);
    assert_eq!(exercises[0].intensity, 3);
    assert!(exercises[0].id.is_some());

    // Stored text is the category's exact form, case-sensitive.
    let stored: String = conn
        .query_row("SELECT category FROM exercise;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(stored, "Swimming");
}

#[test]
fn every_category_round_trips_through_storage() {
    let conn = open_db_in_memory().unwrap();
    let service = service(&conn);

    let categories = [
        ExerciseCategory::Running,
        ExerciseCategory::Swimming,
        ExerciseCategory::Football,
        ExerciseCategory::Walking,
        ExerciseCategory::Riding,
    ];
    for category in categories {
        service
            .add_exercise(&Exercise::new(start_instant(), 30, category, 5))
            .unwrap();
    }

    let loaded: Vec<_> = service
        .get_all_exercises()
        .unwrap()
        .into_iter()
        .map(|e| e.category)
        .collect();
    assert_eq!(loaded, categories);
}

#[test]
fn out_of_range_intensity_is_rejected_before_storage() {
    let conn = open_db_in_memory().unwrap();
    let service = service(&conn);

    for intensity in [0, 11] {
        let err = service
            .add_exercise(&Exercise::new(
                start_instant(),
                30,
                ExerciseCategory::Running,
                intensity,
            ))
            .unwrap_err();
        assert!(matches!(
            err,
            ExerciseServiceError::InvalidIntensity(value) if value == intensity
        ));
    }

    // Boundary values pass.
    for intensity in [1, 10] {
        service
            .add_exercise(&Exercise::new(
                start_instant(),
                30,
                ExerciseCategory::Running,
                intensity,
            ))
            .unwrap();
    }

    let rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM exercise;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 2);
}

#[test]
fn deleted_session_no_longer_appears() {
    let conn = open_db_in_memory().unwrap();
    let service = service(&conn);

    service
        .add_exercise(&Exercise::new(start_instant(), 35, ExerciseCategory::Running, 2))
        .unwrap();
    service
        .add_exercise(&Exercise::new(start_instant(), 60, ExerciseCategory::Walking, 7))
        .unwrap();

    let exercises = service.get_all_exercises().unwrap();
    let doomed = exercises
        .iter()
        .find(|e| e.category == ExerciseCategory::Running)
        .unwrap()
        .clone();
    service.delete_exercise(&doomed).unwrap();

    let remaining = service.get_all_exercises().unwrap();
    assert_eq!(remaining.len(), 1);
    assert!(remaining.iter().all(|e| e.id != doomed.id));
}

#[test]
fn deleting_an_unpersisted_session_fails_with_missing_id() {
    let conn = open_db_in_memory().unwrap();
    let service = service(&conn);

    let err = service
        .delete_exercise(&Exercise::new(start_instant(), 20, ExerciseCategory::Riding, 4))
        .unwrap_err();
    assert!(matches!(
        err,
        ExerciseServiceError::Repo(RepoError::Mapping(MappingError::MissingId {
            entity: "exercise"
        }))
    ));
}

#[test]
fn corrupt_category_text_fails_the_whole_fetch() {
    let conn = open_db_in_memory().unwrap();
    let service = service(&conn);

    service
        .add_exercise(&Exercise::new(start_instant(), 30, ExerciseCategory::Running, 5))
        .unwrap();
    conn.execute(
        "INSERT INTO exercise (start_time, duration, category, intensity)
         VALUES (0, 15, 'Yoga', 5);",
        [],
    )
    .unwrap();

    let err = service.get_all_exercises().unwrap_err();
    assert!(matches!(
        err,
        ExerciseServiceError::Repo(RepoError::Mapping(MappingError::UnrecognizedCategory(
            value
        ))) if value == "Yoga"
    ));
}
