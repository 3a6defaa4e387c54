use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

/// User record in the database.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,                   // unique user ID
    pub email: String,              // user email, unique
    #[serde(skip_serializing)]
    pub password_hash: String,      // Argon2 hash, not exposed in JSON
    pub created_at: OffsetDateTime, // creation timestamp
}

/// Outcome of an insert-if-absent on the users table.
#[derive(Debug)]
pub enum InsertOutcome {
    Created(User),
    EmailTaken,
}

impl User {
    /// Find a user by email.
    pub async fn find_by_email(db: &PgPool, email: &str) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password_hash, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    /// Insert a new user unless the email is already registered.
    ///
    /// Duplicates are resolved in the database via `ON CONFLICT DO NOTHING`
    /// on the unique email index, so a lost race never surfaces as a driver
    /// error that would need code matching.
    pub async fn insert_if_absent(
        db: &PgPool,
        email: &str,
        password_hash: &str,
    ) -> anyhow::Result<InsertOutcome> {
        let inserted = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, password_hash)
            VALUES ($1, $2)
            ON CONFLICT (email) DO NOTHING
            RETURNING id, email, password_hash, created_at
            "#,
        )
        .bind(email)
        .bind(password_hash)
        .fetch_optional(db)
        .await?;

        Ok(match inserted {
            Some(user) => InsertOutcome::Created(user),
            None => InsertOutcome::EmailTaken,
        })
    }
}
