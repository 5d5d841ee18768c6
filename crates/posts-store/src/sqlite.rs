//! SQLite-backed post store

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::Row;
use tracing::debug;

use crate::error::StoreResult;
use crate::models::{Post, PostDraft, PostFilter};
use crate::traits::PostStore;

/// SQLite post store
///
/// Holds a connection pool over a single `posts` table. Ids come from an
/// `AUTOINCREMENT` primary key, so they are strictly increasing and are not
/// reused after a delete.
pub struct SqlitePostStore {
    pool: SqlitePool,
}

impl SqlitePostStore {
    /// Connect to a SQLite database and bootstrap the schema
    ///
    /// `url` is a sqlx SQLite URL such as `sqlite:posts.db`. The database
    /// file is created if it does not exist.
    pub async fn connect(url: &str) -> StoreResult<Self> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new().connect_with(options).await?;
        let store = Self { pool };
        store.init_schema().await?;
        Ok(store)
    }

    /// Open a private in-memory database
    ///
    /// The pool is capped at one connection that is never recycled; an
    /// in-memory SQLite database lives exactly as long as its connection.
    pub async fn in_memory() -> StoreResult<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;
        let store = Self { pool };
        store.init_schema().await?;
        Ok(store)
    }

    async fn init_schema(&self) -> StoreResult<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS posts (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                body TEXT NOT NULL
            )",
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    fn row_to_post(row: &SqliteRow) -> Result<Post, sqlx::Error> {
        Ok(Post {
            id: row.try_get("id")?,
            title: row.try_get("title")?,
            body: row.try_get("body")?,
        })
    }
}

#[async_trait::async_trait]
impl PostStore for SqlitePostStore {
    async fn query(&self, filter: &PostFilter) -> StoreResult<Vec<Post>> {
        // Containment goes through instr() so needles holding LIKE
        // wildcards still mean literal substrings.
        let (sql, needles) = match (&filter.title_like, &filter.body_like) {
            (Some(title), Some(body)) => (
                "SELECT id, title, body FROM posts \
                 WHERE instr(title, ?1) > 0 AND instr(body, ?2) > 0 ORDER BY id",
                vec![title.as_str(), body.as_str()],
            ),
            (Some(title), None) => (
                "SELECT id, title, body FROM posts WHERE instr(title, ?1) > 0 ORDER BY id",
                vec![title.as_str()],
            ),
            (None, Some(body)) => (
                "SELECT id, title, body FROM posts WHERE instr(body, ?1) > 0 ORDER BY id",
                vec![body.as_str()],
            ),
            (None, None) => ("SELECT id, title, body FROM posts ORDER BY id", Vec::new()),
        };

        let mut query = sqlx::query(sql);
        for needle in needles {
            query = query.bind(needle);
        }

        let rows = query.fetch_all(&self.pool).await?;
        rows.iter()
            .map(|row| Self::row_to_post(row).map_err(Into::into))
            .collect()
    }

    async fn get(&self, id: i64) -> StoreResult<Option<Post>> {
        let row = sqlx::query("SELECT id, title, body FROM posts WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.map(|row| Self::row_to_post(&row))
            .transpose()
            .map_err(Into::into)
    }

    async fn create(&self, draft: PostDraft) -> StoreResult<Post> {
        let result = sqlx::query("INSERT INTO posts (title, body) VALUES (?1, ?2)")
            .bind(&draft.title)
            .bind(&draft.body)
            .execute(&self.pool)
            .await?;
        let id = result.last_insert_rowid();
        debug!(id, "created post");
        Ok(Post {
            id,
            title: draft.title,
            body: draft.body,
        })
    }

    async fn update(&self, id: i64, draft: PostDraft) -> StoreResult<Option<Post>> {
        let result = sqlx::query("UPDATE posts SET title = ?1, body = ?2 WHERE id = ?3")
            .bind(&draft.title)
            .bind(&draft.body)
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Ok(None);
        }
        debug!(id, "updated post");
        Ok(Some(Post {
            id,
            title: draft.title,
            body: draft.body,
        }))
    }

    async fn delete(&self, id: i64) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM posts WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        let deleted = result.rows_affected() > 0;
        if deleted {
            debug!(id, "deleted post");
        }
        Ok(deleted)
    }
}
