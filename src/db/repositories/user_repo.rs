//! User repository

use sqlx::PgPool;

use crate::{
    error::AppResult,
    models::{User, UserProfile},
};

/// Repository for user database operations
pub struct UserRepository;

impl UserRepository {
    /// Find user by ID
    pub async fn find_by_id(pool: &PgPool, id: i64) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(r#"SELECT * FROM users WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(user)
    }

    /// Find the profile attached to a user
    pub async fn find_profile(pool: &PgPool, user_id: i64) -> AppResult<Option<UserProfile>> {
        let profile =
            sqlx::query_as::<_, UserProfile>(r#"SELECT * FROM user_profile WHERE user_id = $1"#)
                .bind(user_id)
                .fetch_optional(pool)
                .await?;

        Ok(profile)
    }

    /// Update real name; `None` when the user has no profile
    pub async fn update_real_name(
        pool: &PgPool,
        user_id: i64,
        real_name: &str,
    ) -> AppResult<Option<UserProfile>> {
        let profile = sqlx::query_as::<_, UserProfile>(
            r#"
            UPDATE user_profile
            SET real_name = $2, update_time = NOW()
            WHERE user_id = $1
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(real_name)
        .fetch_optional(pool)
        .await?;

        Ok(profile)
    }
}
