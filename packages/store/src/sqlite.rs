//! SQLite-backed [`ContactStore`].
//!
//! One connection per process: the pool is capped at a single connection that never
//! idles out, so every request shares it (and `sqlite::memory:` databases survive for the
//! lifetime of the store). The schema is created on open if absent.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::error::StoreError;
use crate::models::Contact;
use crate::repo::ContactStore;

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS contacts (
    id TEXT PRIMARY KEY,
    firstName TEXT NOT NULL,
    lastName TEXT NOT NULL,
    email TEXT NOT NULL,
    phoneNumber TEXT NOT NULL,
    age INTEGER NOT NULL
)";

const SELECT_COLUMNS: &str = "SELECT id, firstName, lastName, email, phoneNumber, age FROM contacts";

/// Shared handle to the contacts database.
#[derive(Clone, Debug)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open (creating if missing) the database at `url` and ensure the table exists.
    ///
    /// `url` is any sqlx SQLite URL, e.g. `sqlite://contacts.db` or `sqlite::memory:`.
    pub async fn open(url: &str) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        sqlx::query(CREATE_TABLE).execute(&pool).await?;
        tracing::info!(url, "Connected to SQLite database");

        Ok(Self { pool })
    }

    /// Close the shared connection. Later operations fail with a storage error.
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("Closed SQLite database");
    }

    pub fn is_closed(&self) -> bool {
        self.pool.is_closed()
    }
}

impl ContactStore for SqliteStore {
    async fn all(&self) -> Result<Vec<Contact>, StoreError> {
        let rows = sqlx::query_as::<_, Contact>(SELECT_COLUMNS)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn find(&self, id: &str) -> Result<Option<Contact>, StoreError> {
        let row = sqlx::query_as::<_, Contact>(&format!("{SELECT_COLUMNS} WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn insert(&self, contact: &Contact) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO contacts (id, firstName, lastName, email, phoneNumber, age) VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&contact.id)
        .bind(&contact.first_name)
        .bind(&contact.last_name)
        .bind(&contact.email)
        .bind(&contact.phone_number)
        .bind(contact.age)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn update(&self, contact: &Contact) -> Result<u64, StoreError> {
        let result = sqlx::query(
            "UPDATE contacts SET firstName = ?, lastName = ?, email = ?, phoneNumber = ?, age = ? WHERE id = ?",
        )
        .bind(&contact.first_name)
        .bind(&contact.last_name)
        .bind(&contact.email)
        .bind(&contact.phone_number)
        .bind(contact.age)
        .bind(&contact.id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, id: &str) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
