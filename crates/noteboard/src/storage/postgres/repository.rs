//! Postgres repository implementation.
//!
//! Implements [`NoteRepository`] on a `sqlx` connection pool.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::postgres::{PgPool, PgPoolOptions};

use noteboard_core::note::{NewNote, Note};
use noteboard_core::storage::{NoteRepository, Result};

use super::conversions::NoteRow;
use super::error::{is_already_applied, map_sqlx_error};
use super::schema;

/// Postgres-based note repository.
pub struct PostgresRepository {
    pool: PgPool,
}

impl PostgresRepository {
    /// Connects to `database_url` and makes sure the schema exists.
    ///
    /// The pool holds a single connection that is dropped after 20 seconds
    /// idle; connecting gives up after 10 seconds.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(1)
            .acquire_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(20))
            .connect(database_url)
            .await
            .map_err(|e| map_sqlx_error(e, "Note"))?;

        Self::from_pool(pool).await
    }

    /// Wraps an existing pool, initializing the schema.
    pub async fn from_pool(pool: PgPool) -> Result<Self> {
        Self::init_schema(&pool).await?;
        Ok(Self { pool })
    }

    async fn init_schema(pool: &PgPool) -> Result<()> {
        for statement in [
            schema::CREATE_TABLE,
            schema::ADD_TYPE_COLUMN,
            schema::CREATE_UPDATED_AT_INDEX,
        ] {
            if let Err(e) = sqlx::query(statement).execute(pool).await {
                if is_already_applied(&e) {
                    continue;
                }
                let mapped = map_sqlx_error(e, "Note");
                if mapped.is_configuration() {
                    return Err(mapped);
                }
                tracing::warn!(error = %mapped, "Schema statement failed");
            }
        }
        Ok(())
    }
}

#[async_trait]
impl NoteRepository for PostgresRepository {
    async fn list_notes(&self, note_type: Option<&str>) -> Result<Vec<Note>> {
        let rows = match note_type {
            Some(note_type) => {
                sqlx::query_as::<_, NoteRow>(&schema::select_notes_by_type())
                    .bind(note_type)
                    .fetch_all(&self.pool)
                    .await
            }
            None => {
                sqlx::query_as::<_, NoteRow>(&schema::select_all_notes())
                    .fetch_all(&self.pool)
                    .await
            }
        }
        .map_err(|e| map_sqlx_error(e, "Note"))?;

        Ok(rows.into_iter().map(Note::from).collect())
    }

    async fn get_note(&self, id: i64) -> Result<Option<Note>> {
        let Some(id) = to_serial(id) else {
            return Ok(None);
        };

        let row = sqlx::query_as::<_, NoteRow>(&schema::select_note_by_id())
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "Note"))?;

        Ok(row.map(Note::from))
    }

    async fn create_note(&self, note: &NewNote) -> Result<Note> {
        let row = sqlx::query_as::<_, NoteRow>(&schema::insert_note())
            .bind(&note.title)
            .bind(&note.content)
            .bind(&note.note_type)
            .bind(Utc::now().naive_utc())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "Note"))?;

        Ok(row.into())
    }

    async fn update_note(&self, id: i64, title: &str, content: &str) -> Result<Option<Note>> {
        let Some(id) = to_serial(id) else {
            return Ok(None);
        };

        let row = sqlx::query_as::<_, NoteRow>(&schema::update_note())
            .bind(id)
            .bind(title)
            .bind(content)
            .bind(Utc::now().naive_utc())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "Note"))?;

        Ok(row.map(Note::from))
    }

    async fn delete_note(&self, id: i64) -> Result<()> {
        let Some(id) = to_serial(id) else {
            return Ok(());
        };

        sqlx::query(schema::DELETE_NOTE)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "Note"))?;

        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "postgres"
    }
}

/// Narrows an id to the `SERIAL` column type. Ids outside its range cannot exist.
fn to_serial(id: i64) -> Option<i32> {
    i32::try_from(id).ok()
}
