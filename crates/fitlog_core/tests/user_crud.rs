use fitlog_core::db::open_db_in_memory;
use fitlog_core::{
    MappingError, RepoError, SqliteUserStore, StoreError, User, UserRepository, UserService,
    UserServiceError,
};

fn service(conn: &rusqlite::Connection) -> UserService<SqliteUserStore<'_>> {
    UserService::new(UserRepository::new(SqliteUserStore::new(conn)))
}

#[test]
fn fetching_an_absent_profile_returns_none() {
    let conn = open_db_in_memory().unwrap();
    assert_eq!(service(&conn).get_user().unwrap(), None);
}

#[test]
fn created_profile_comes_back_with_assigned_id() {
    let conn = open_db_in_memory().unwrap();
    let service = service(&conn);

    let id = service
        .create_user(&User::new("Jean", "jean@free.fr", "password"))
        .unwrap();

    let user = service.get_user().unwrap().unwrap();
    assert_eq!(user.id, Some(id));
    assert_eq!(user.name, "Jean");
    assert_eq!(user.email, "jean@free.fr");
    assert_eq!(user.password, "password");
}

#[test]
fn malformed_email_never_reaches_the_store() {
    let conn = open_db_in_memory().unwrap();
    let service = service(&conn);

    let err = service
        .create_user(&User::new("Jean", "not-an-email", "password"))
        .unwrap_err();
    assert!(matches!(
        err,
        UserServiceError::InvalidEmail(value) if value == "not-an-email"
    ));

    let rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM user;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 0);
}

#[test]
fn update_replaces_the_persisted_fields() {
    let conn = open_db_in_memory().unwrap();
    let service = service(&conn);

    service
        .create_user(&User::new("Jean", "jean@free.fr", "password"))
        .unwrap();
    let mut user = service.get_user().unwrap().unwrap();

    user.name = "Jeanne".to_string();
    user.email = "jeanne@free.fr".to_string();
    service.update_user(&user).unwrap();

    let reloaded = service.get_user().unwrap().unwrap();
    assert_eq!(reloaded.id, user.id);
    assert_eq!(reloaded.name, "Jeanne");
    assert_eq!(reloaded.email, "jeanne@free.fr");
}

#[test]
fn update_requires_a_persisted_profile() {
    let conn = open_db_in_memory().unwrap();
    let service = service(&conn);

    // Never persisted: rejected by the mapper, not the store.
    let err = service
        .update_user(&User::new("Jean", "jean@free.fr", "password"))
        .unwrap_err();
    assert!(matches!(
        err,
        UserServiceError::Repo(RepoError::Mapping(MappingError::MissingId { entity: "user" }))
    ));

    // Persisted id that no longer exists: row-not-found from the store.
    let mut ghost = User::new("Jean", "jean@free.fr", "password");
    ghost.id = Some(99);
    let err = service.update_user(&ghost).unwrap_err();
    assert!(matches!(
        err,
        UserServiceError::Repo(RepoError::Store(StoreError::RowNotFound {
            table: "user",
            id: 99
        }))
    ));
}

#[test]
fn deleted_profile_is_absent_afterwards() {
    let conn = open_db_in_memory().unwrap();
    let service = service(&conn);

    service
        .create_user(&User::new("Jean", "jean@free.fr", "password"))
        .unwrap();
    let user = service.get_user().unwrap().unwrap();

    service.delete_user(&user).unwrap();
    assert_eq!(service.get_user().unwrap(), None);

    // Idempotent: the id is already gone.
    service.delete_user(&user).unwrap();
}
