//! Exercise record store: contract and SQLite implementation.
//!
//! The category column holds the domain enum's exact textual form; this
//! layer stores and returns it verbatim and leaves interpretation to the
//! mapper.

use crate::store::StoreResult;
use rusqlite::{params, Connection, Row};

/// Row shape of the `exercise` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseRecord {
    pub id: i64,
    /// Absolute start instant, Unix epoch milliseconds.
    pub start_time_ms: i64,
    pub duration_min: u32,
    pub category: String,
    pub intensity: u32,
}

/// Insertable shape: everything but the store-assigned id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExerciseRecord {
    pub start_time_ms: i64,
    pub duration_min: u32,
    pub category: String,
    pub intensity: u32,
}

/// Store contract for exercise rows. Append and delete only.
pub trait ExerciseStore {
    fn insert_exercise(&self, record: &NewExerciseRecord) -> StoreResult<i64>;
    fn get_all_exercises(&self) -> StoreResult<Vec<ExerciseRecord>>;
    fn delete_exercise_by_id(&self, id: i64) -> StoreResult<()>;
}

/// SQLite-backed exercise store.
pub struct SqliteExerciseStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteExerciseStore<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ExerciseStore for SqliteExerciseStore<'_> {
    fn insert_exercise(&self, record: &NewExerciseRecord) -> StoreResult<i64> {
        self.conn.execute(
            "INSERT INTO exercise (start_time, duration, category, intensity)
             VALUES (?1, ?2, ?3, ?4);",
            params![
                record.start_time_ms,
                record.duration_min,
                record.category.as_str(),
                record.intensity,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    fn get_all_exercises(&self) -> StoreResult<Vec<ExerciseRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, start_time, duration, category, intensity FROM exercise;",
        )?;
        let mut rows = stmt.query([])?;
        let mut records = Vec::new();

        while let Some(row) = rows.next()? {
            records.push(parse_exercise_row(row)?);
        }

        Ok(records)
    }

    fn delete_exercise_by_id(&self, id: i64) -> StoreResult<()> {
        self.conn
            .execute("DELETE FROM exercise WHERE id = ?1;", params![id])?;
        Ok(())
    }
}

fn parse_exercise_row(row: &Row<'_>) -> StoreResult<ExerciseRecord> {
    Ok(ExerciseRecord {
        id: row.get("id")?,
        start_time_ms: row.get("start_time")?,
        duration_min: row.get("duration")?,
        category: row.get("category")?,
        intensity: row.get("intensity")?,
    })
}
