//! SQLite-backed pitch persistence.
//!
//! The store is the single writer for pitch records. Concurrent edits fall
//! back to SQLite's default isolation (last write wins on the mutable
//! fields), which is all the application needs.

use chrono::Utc;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use sqlx::FromRow;

use super::error::{Result, StoreError};
use super::types::{ListFilter, NewPitch, Pitch, MAX_PITCH_LEN, MAX_TERM_LEN};

/// SQLite-based pitch store.
pub struct PitchStore {
    pool: SqlitePool,
}

impl PitchStore {
    /// Create a new store with the given connection URL.
    ///
    /// # Example URLs
    /// - `sqlite::memory:` - In-memory database (ephemeral)
    /// - `sqlite:pitchforge.db?mode=rwc` - File, created if absent
    pub async fn new(database_url: &str) -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await
            .map_err(StoreError::database)?;

        let store = Self { pool };
        store.run_migrations().await?;
        Ok(store)
    }

    /// Create an in-memory store (for testing).
    pub async fn in_memory() -> Result<Self> {
        Self::new("sqlite::memory:").await
    }

    /// Run database migrations.
    async fn run_migrations(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS pitches (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                prompt TEXT NOT NULL,
                one TEXT NOT NULL,
                two TEXT NOT NULL,
                three TEXT NOT NULL,
                pitch TEXT NOT NULL,
                created_at TEXT NOT NULL,
                deleted INTEGER NOT NULL DEFAULT 0
            );

            CREATE INDEX IF NOT EXISTS idx_pitches_deleted ON pitches(deleted);
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(StoreError::database)?;

        Ok(())
    }

    /// Get the underlying connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    fn check_bounds(new: &NewPitch) -> Result<()> {
        let term_fields: [(&'static str, &str); 4] = [
            ("prompt", &new.prompt),
            ("one", &new.one),
            ("two", &new.two),
            ("three", &new.three),
        ];
        for (field, value) in term_fields {
            if value.chars().count() > MAX_TERM_LEN {
                return Err(StoreError::FieldTooLong {
                    field,
                    max: MAX_TERM_LEN,
                });
            }
        }
        if new.pitch.chars().count() > MAX_PITCH_LEN {
            return Err(StoreError::FieldTooLong {
                field: "pitch",
                max: MAX_PITCH_LEN,
            });
        }
        Ok(())
    }

    /// Insert a new record with `deleted = false` and the current time.
    pub async fn create(&self, new: NewPitch) -> Result<Pitch> {
        Self::check_bounds(&new)?;

        let created_at = Utc::now();
        let result = sqlx::query(
            r#"
            INSERT INTO pitches (prompt, one, two, three, pitch, created_at, deleted)
            VALUES (?, ?, ?, ?, ?, ?, 0)
            "#,
        )
        .bind(&new.prompt)
        .bind(&new.one)
        .bind(&new.two)
        .bind(&new.three)
        .bind(&new.pitch)
        .bind(created_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(StoreError::database)?;

        Ok(Pitch {
            id: result.last_insert_rowid(),
            prompt: new.prompt,
            one: new.one,
            two: new.two,
            three: new.three,
            pitch: new.pitch,
            created_at,
            deleted: false,
        })
    }

    /// List records ordered by creation time ascending (id breaks ties,
    /// so the order is deterministic even within one timestamp).
    pub async fn list(&self, filter: ListFilter) -> Result<Vec<Pitch>> {
        let where_clause = match filter {
            ListFilter::Active => "WHERE deleted = 0",
            ListFilter::Trashed => "WHERE deleted = 1",
            ListFilter::All => "",
        };
        let query = format!(
            "SELECT id, prompt, one, two, three, pitch, created_at, deleted \
             FROM pitches {where_clause} ORDER BY created_at ASC, id ASC"
        );

        let rows = sqlx::query_as::<_, PitchRow>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(StoreError::database)?;

        rows.into_iter().map(|r| r.into_pitch()).collect()
    }

    /// Fetch one record by id.
    pub async fn get(&self, id: i64) -> Result<Pitch> {
        let row = sqlx::query_as::<_, PitchRow>(
            "SELECT id, prompt, one, two, three, pitch, created_at, deleted \
             FROM pitches WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(StoreError::database)?;

        match row {
            Some(r) => r.into_pitch(),
            None => Err(StoreError::NotFound { id }),
        }
    }

    /// Replace the pitch text. The only other mutable field is the
    /// deleted flag.
    pub async fn update_text(&self, id: i64, new_text: &str) -> Result<()> {
        if new_text.chars().count() > MAX_PITCH_LEN {
            return Err(StoreError::FieldTooLong {
                field: "pitch",
                max: MAX_PITCH_LEN,
            });
        }

        let result = sqlx::query("UPDATE pitches SET pitch = ? WHERE id = ?")
            .bind(new_text)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(StoreError::database)?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound { id });
        }
        Ok(())
    }

    /// Flip the soft-delete flag.
    pub async fn toggle_deleted(&self, id: i64) -> Result<()> {
        let result = sqlx::query("UPDATE pitches SET deleted = NOT deleted WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(StoreError::database)?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound { id });
        }
        Ok(())
    }

    /// Irreversibly remove a record.
    pub async fn purge(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM pitches WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(StoreError::database)?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound { id });
        }
        Ok(())
    }
}

// Row type for sqlx queries
#[derive(Debug, FromRow)]
struct PitchRow {
    id: i64,
    prompt: String,
    one: String,
    two: String,
    three: String,
    pitch: String,
    created_at: String,
    deleted: bool,
}

impl PitchRow {
    fn into_pitch(self) -> Result<Pitch> {
        let created_at = chrono::DateTime::parse_from_rfc3339(&self.created_at)
            .map_err(|e| StoreError::Database(format!("Invalid date: {}", e).into()))?
            .with_timezone(&chrono::Utc);

        Ok(Pitch {
            id: self.id,
            prompt: self.prompt,
            one: self.one,
            two: self.two,
            three: self.three,
            pitch: self.pitch,
            created_at,
            deleted: self.deleted,
        })
    }
}
