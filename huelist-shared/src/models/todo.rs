/// Todo model and database operations
///
/// A todo is a single to-do item: a description, a finished flag, a color
/// token picked from the fixed palette at creation, a human-readable creation
/// date, and an optional owner. Listing is always owner-scoped; a todo with no
/// owner (created through the public add form) is listed for nobody.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE todos (
///     id INTEGER PRIMARY KEY AUTOINCREMENT,
///     description TEXT NOT NULL,
///     finished INTEGER NOT NULL DEFAULT 0,
///     color TEXT NOT NULL,
///     created_on TEXT NOT NULL,
///     author_id INTEGER REFERENCES users (id)
/// );
/// ```
///
/// # Lifecycle
///
/// Created on submission of a non-empty description; mutated once (`finished`
/// flips to true) on completion; removed on delete. No other mutation occurs.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::palette;

/// Todo model representing one to-do item
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Todo {
    /// Unique todo ID (assigned by the database)
    pub id: i64,

    /// Task description text
    pub description: String,

    /// Whether the task has been marked finished
    pub finished: bool,

    /// CSS style token drawn from the fixed palette at creation
    pub color: String,

    /// Creation date as a human-readable string, e.g. "June 05, 2024"
    pub created_on: String,

    /// Owning user, if any (NULL for todos from the public add form)
    pub author_id: Option<i64>,
}

/// Input for creating a new todo
///
/// Color and date are derived at creation time, not supplied by the caller.
#[derive(Debug, Clone)]
pub struct CreateTodo {
    /// Task description (must be non-empty; enforced at the form boundary)
    pub description: String,

    /// Owning user, or `None` for an owner-less todo
    pub author_id: Option<i64>,
}

/// Formats a creation date the way it is stored and displayed
///
/// ```
/// use chrono::NaiveDate;
/// use huelist_shared::models::todo::creation_date_stamp;
///
/// let date = NaiveDate::from_ymd_opt(2024, 6, 5).unwrap();
/// assert_eq!(creation_date_stamp(date), "June 05, 2024");
/// ```
pub fn creation_date_stamp(date: NaiveDate) -> String {
    date.format("%B %d, %Y").to_string()
}

impl Todo {
    /// Creates a new todo, stamping it with a random palette color and
    /// today's date
    ///
    /// The new row starts unfinished.
    pub async fn create(pool: &SqlitePool, data: CreateTodo) -> Result<Self, sqlx::Error> {
        let color = palette::random_color(&mut rand::thread_rng());
        let created_on = creation_date_stamp(Local::now().date_naive());

        sqlx::query_as::<_, Todo>(
            r#"
            INSERT INTO todos (description, finished, color, created_on, author_id)
            VALUES (?1, 0, ?2, ?3, ?4)
            RETURNING id, description, finished, color, created_on, author_id
            "#,
        )
        .bind(data.description)
        .bind(color)
        .bind(created_on)
        .bind(data.author_id)
        .fetch_one(pool)
        .await
    }

    /// Finds a todo by ID
    ///
    /// Returns the todo if found, `None` otherwise. Handlers must branch on
    /// the `None` case explicitly and surface a not-found failure instead of
    /// operating on a missing record.
    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Todo>(
            r#"
            SELECT id, description, finished, color, created_on, author_id
            FROM todos
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Lists the todos owned by one user, in creation (insertion) order
    pub async fn list_for_author(
        pool: &SqlitePool,
        author_id: i64,
    ) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Todo>(
            r#"
            SELECT id, description, finished, color, created_on, author_id
            FROM todos
            WHERE author_id = ?1
            ORDER BY id
            "#,
        )
        .bind(author_id)
        .fetch_all(pool)
        .await
    }

    /// Marks a todo finished
    ///
    /// Returns `true` if a row with the given id existed. Re-invoking on an
    /// already-finished todo succeeds with no observable effect.
    pub async fn mark_finished(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE todos SET finished = 1 WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Permanently removes a todo
    ///
    /// Returns `true` if a row was deleted, `false` when the id did not exist
    /// (e.g. a repeated delete), so callers can report not-found cleanly.
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM todos WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
