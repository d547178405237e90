//! Demo data seeding for a freshly created database.
//!
//! # Invariants
//! - Seeding only runs when no profile row exists yet.
//! - Seeding goes through the record stores, never raw SQL.

use crate::store::sleep_store::{NewSleepRecord, SleepStore, SqliteSleepStore};
use crate::store::user_store::{NewUserRecord, SqliteUserStore, UserStore};
use crate::store::StoreResult;
use chrono::{Duration, Utc};
use log::info;
use rusqlite::Connection;

/// Populates a fresh database with the default profile and two sleep rows.
///
/// No-op when a profile row already exists, so callers can run this
/// unconditionally after [`super::open_db`].
pub fn populate_demo_data(conn: &Connection) -> StoreResult<()> {
    let users = SqliteUserStore::new(conn);
    if users.get_user()?.is_some() {
        return Ok(());
    }

    let sleeps = SqliteSleepStore::new(conn);
    let now = Utc::now();

    sleeps.insert_sleep(&NewSleepRecord {
        start_time_ms: (now - Duration::days(1)).timestamp_millis(),
        duration_min: 480,
        quality: 4,
    })?;
    sleeps.insert_sleep(&NewSleepRecord {
        start_time_ms: (now - Duration::days(2)).timestamp_millis(),
        duration_min: 450,
        quality: 3,
    })?;

    users.insert_user(&NewUserRecord {
        name: "Jean".to_string(),
        email: "jean@free.fr".to_string(),
        password: "password".to_string(),
    })?;

    info!("event=seed_demo_data module=db status=ok sleep_rows=2 user_rows=1");
    Ok(())
}
