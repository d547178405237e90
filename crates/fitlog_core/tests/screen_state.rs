use chrono::{DateTime, Utc};
use fitlog_core::db::{open_db_in_memory, populate_demo_data};
use fitlog_core::{
    Exercise, ExerciseCategory, ExerciseRepository, ExerciseScreen, ExerciseService, ScreenState,
    Sleep, SleepRepository, SleepScreen, SleepService, SqliteExerciseStore, SqliteSleepStore,
    SqliteUserStore, User, UserRepository, UserScreen, UserService,
};

fn exercise_screen(conn: &rusqlite::Connection) -> ExerciseScreen<SqliteExerciseStore<'_>> {
    ExerciseScreen::new(ExerciseService::new(ExerciseRepository::new(
        SqliteExerciseStore::new(conn),
    )))
    .unwrap()
}

fn start_instant() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp_millis(1_700_000_000_000).unwrap()
}

#[test]
fn screen_creation_publishes_the_initial_fetch() {
    let conn = open_db_in_memory().unwrap();
    let screen = exercise_screen(&conn);

    let rx = screen.subscribe();
    let state = rx.borrow().clone();
    assert_eq!(state, ScreenState::Loaded(Vec::new()));
}

#[test]
fn mutations_republish_the_refreshed_collection() {
    let conn = open_db_in_memory().unwrap();
    let screen = exercise_screen(&conn);
    let mut rx = screen.subscribe();

    screen
        .add_exercise(&Exercise::new(start_instant(), 20, ExerciseCategory::Swimming, 3))
        .unwrap();

    assert!(rx.has_changed().unwrap());
    let added = rx.borrow_and_update().clone();
    let items = added.loaded().unwrap().clone();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].category, ExerciseCategory::Swimming);

    screen.delete_exercise(&items[0]).unwrap();
    let after_delete = rx.borrow_and_update().clone();
    assert_eq!(after_delete, ScreenState::Loaded(Vec::new()));
}

#[test]
fn late_subscribers_observe_the_latest_value_immediately() {
    let conn = open_db_in_memory().unwrap();
    let screen = exercise_screen(&conn);

    screen
        .add_exercise(&Exercise::new(start_instant(), 45, ExerciseCategory::Running, 7))
        .unwrap();
    screen
        .add_exercise(&Exercise::new(start_instant(), 30, ExerciseCategory::Walking, 4))
        .unwrap();

    // Subscribed after both mutations: only the current value is visible,
    // with no replay of earlier publications.
    let rx = screen.subscribe();
    let state = rx.borrow().clone();
    assert_eq!(state.loaded().unwrap().len(), 2);
}

#[test]
fn sleep_screen_reflects_out_of_band_writes_on_refresh() {
    let conn = open_db_in_memory().unwrap();
    let service = SleepService::new(SleepRepository::new(SqliteSleepStore::new(&conn)));
    let screen = SleepScreen::new(SleepService::new(SleepRepository::new(
        SqliteSleepStore::new(&conn),
    )))
    .unwrap();

    assert_eq!(
        screen.subscribe().borrow().clone(),
        ScreenState::Loaded(Vec::new())
    );

    // Written behind the screen's back; visible after the next refresh
    // (last fetch wins).
    service.add_sleep(&Sleep::new(start_instant(), 480, 4)).unwrap();
    screen.refresh().unwrap();

    let state = screen.subscribe().borrow().clone();
    assert_eq!(state.loaded().unwrap().len(), 1);
}

#[test]
fn user_screen_publishes_absent_profile_as_a_value() {
    let conn = open_db_in_memory().unwrap();
    let screen = UserScreen::new(UserService::new(UserRepository::new(SqliteUserStore::new(
        &conn,
    ))))
    .unwrap();

    assert_eq!(
        screen.subscribe().borrow().clone(),
        ScreenState::Loaded(None)
    );

    screen
        .create_user(&User::new("Jean", "jean@free.fr", "password"))
        .unwrap();
    let state = screen.subscribe().borrow().clone();
    let user = state.loaded().unwrap().clone().unwrap();
    assert_eq!(user.name, "Jean");
    assert!(user.id.is_some());
}

#[test]
fn demo_seeded_database_loads_through_the_sleep_screen() {
    let conn = open_db_in_memory().unwrap();
    populate_demo_data(&conn).unwrap();

    let screen = SleepScreen::new(SleepService::new(SleepRepository::new(
        SqliteSleepStore::new(&conn),
    )))
    .unwrap();

    let state = screen.subscribe().borrow().clone();
    let sleeps = state.loaded().unwrap().clone();
    assert_eq!(sleeps.len(), 2);
    assert!(sleeps.iter().any(|s| s.duration_min == 480 && s.quality == 4));
    assert!(sleeps.iter().any(|s| s.duration_min == 450 && s.quality == 3));
}
