//! User record store: contract and SQLite implementation.
//!
//! The `user` table is expected to hold at most one profile row. Create and
//! update are distinct operations; insert never doubles as update.

use crate::store::{StoreError, StoreResult};
use rusqlite::{params, Connection, Row};

/// Row shape of the `user` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Insertable shape: everything but the store-assigned id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUserRecord {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Store contract for the profile row.
pub trait UserStore {
    fn insert_user(&self, record: &NewUserRecord) -> StoreResult<i64>;
    /// Returns the single profile row, or `None` when none exists yet.
    fn get_user(&self) -> StoreResult<Option<UserRecord>>;
    /// Full-row update. Updating an id with no row is `RowNotFound`.
    fn update_user(&self, record: &UserRecord) -> StoreResult<()>;
    fn delete_user_by_id(&self, id: i64) -> StoreResult<()>;
}

/// SQLite-backed user store.
pub struct SqliteUserStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteUserStore<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl UserStore for SqliteUserStore<'_> {
    fn insert_user(&self, record: &NewUserRecord) -> StoreResult<i64> {
        self.conn.execute(
            "INSERT INTO user (name, email, password) VALUES (?1, ?2, ?3);",
            params![
                record.name.as_str(),
                record.email.as_str(),
                record.password.as_str(),
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    fn get_user(&self) -> StoreResult<Option<UserRecord>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, email, password FROM user LIMIT 1;")?;
        let mut rows = stmt.query([])?;

        if let Some(row) = rows.next()? {
            return Ok(Some(parse_user_row(row)?));
        }

        Ok(None)
    }

    fn update_user(&self, record: &UserRecord) -> StoreResult<()> {
        let changed = self.conn.execute(
            "UPDATE user SET name = ?1, email = ?2, password = ?3 WHERE id = ?4;",
            params![
                record.name.as_str(),
                record.email.as_str(),
                record.password.as_str(),
                record.id,
            ],
        )?;

        if changed == 0 {
            return Err(StoreError::RowNotFound {
                table: "user",
                id: record.id,
            });
        }

        Ok(())
    }

    fn delete_user_by_id(&self, id: i64) -> StoreResult<()> {
        self.conn
            .execute("DELETE FROM user WHERE id = ?1;", params![id])?;
        Ok(())
    }
}

fn parse_user_row(row: &Row<'_>) -> StoreResult<UserRecord> {
    Ok(UserRecord {
        id: row.get("id")?,
        name: row.get("name")?,
        email: row.get("email")?,
        password: row.get("password")?,
    })
}
