//! User repository for centralized database operations

use sqlx::PgPool;

use super::utils::USER_COLUMNS;
use crate::error::DbResult;
use crate::models::{NewUser, User};

/// Repository for user database operations
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new UserRepository instance
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a user by their email address (case-insensitive)
    ///
    /// Fetches the whole users table and matches in application code. This
    /// mirrors the behavior the HTTP layer was built against; the email
    /// column carries no functional lowercase index, so the scan is the
    /// compatible way to get case-insensitive matching.
    pub async fn find_by_email(&self, email: &str) -> DbResult<Option<User>> {
        let sql = format!("SELECT {} FROM users", USER_COLUMNS);
        let users = sqlx::query_as::<_, User>(&sql).fetch_all(&self.pool).await?;

        let wanted = email.to_lowercase();
        Ok(users
            .into_iter()
            .find(|user| user.email.to_lowercase() == wanted))
    }

    /// Find a user by their unique ID
    ///
    /// Same full-table fetch and linear scan as [`Self::find_by_email`],
    /// kept for behavioral parity.
    pub async fn find_by_id(&self, user_id: i32) -> DbResult<Option<User>> {
        let sql = format!("SELECT {} FROM users", USER_COLUMNS);
        let users = sqlx::query_as::<_, User>(&sql).fetch_all(&self.pool).await?;

        Ok(users.into_iter().find(|user| user.id == user_id))
    }

    /// Create a new user
    ///
    /// The password is stored exactly as given and uniqueness is left to
    /// the database constraint.
    pub async fn create(&self, new_user: &NewUser) -> DbResult<User> {
        let sql = format!(
            "INSERT INTO users (name, email, password) VALUES ($1, $2, $3) RETURNING {}",
            USER_COLUMNS
        );
        let user = sqlx::query_as::<_, User>(&sql)
            .bind(&new_user.name)
            .bind(&new_user.email)
            .bind(&new_user.password)
            .fetch_one(&self.pool)
            .await?;
        Ok(user)
    }
}
