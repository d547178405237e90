//! Sleep record store: contract and SQLite implementation.

use crate::store::StoreResult;
use rusqlite::{params, Connection, Row};

/// Row shape of the `sleep` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SleepRecord {
    pub id: i64,
    /// Absolute start instant, Unix epoch milliseconds.
    pub start_time_ms: i64,
    pub duration_min: u32,
    pub quality: u32,
}

/// Insertable shape: everything but the store-assigned id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSleepRecord {
    pub start_time_ms: i64,
    pub duration_min: u32,
    pub quality: u32,
}

/// Store contract for sleep rows. No update operation exists; sleep rows
/// are appended and removed, never edited in place.
pub trait SleepStore {
    fn insert_sleep(&self, record: &NewSleepRecord) -> StoreResult<i64>;
    fn get_all_sleeps(&self) -> StoreResult<Vec<SleepRecord>>;
    fn delete_sleep_by_id(&self, id: i64) -> StoreResult<()>;
}

/// SQLite-backed sleep store.
pub struct SqliteSleepStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSleepStore<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl SleepStore for SqliteSleepStore<'_> {
    fn insert_sleep(&self, record: &NewSleepRecord) -> StoreResult<i64> {
        self.conn.execute(
            "INSERT INTO sleep (start_time, duration, quality) VALUES (?1, ?2, ?3);",
            params![record.start_time_ms, record.duration_min, record.quality],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    fn get_all_sleeps(&self) -> StoreResult<Vec<SleepRecord>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, start_time, duration, quality FROM sleep;")?;
        let mut rows = stmt.query([])?;
        let mut records = Vec::new();

        while let Some(row) = rows.next()? {
            records.push(parse_sleep_row(row)?);
        }

        Ok(records)
    }

    fn delete_sleep_by_id(&self, id: i64) -> StoreResult<()> {
        self.conn
            .execute("DELETE FROM sleep WHERE id = ?1;", params![id])?;
        Ok(())
    }
}

fn parse_sleep_row(row: &Row<'_>) -> StoreResult<SleepRecord> {
    Ok(SleepRecord {
        id: row.get("id")?,
        start_time_ms: row.get("start_time")?,
        duration_min: row.get("duration")?,
        quality: row.get("quality")?,
    })
}
