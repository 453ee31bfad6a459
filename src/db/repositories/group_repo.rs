//! Group repository

use sqlx::PgPool;

use crate::{
    error::AppResult,
    models::{Group, UserGroup},
};

/// Repository for groups and memberships
pub struct GroupRepository;

impl GroupRepository {
    /// Find group by ID
    pub async fn find_by_id(pool: &PgPool, id: i64) -> AppResult<Option<Group>> {
        let group = sqlx::query_as::<_, Group>(r#"SELECT * FROM "group" WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(group)
    }

    /// Membership that has been accepted into the group
    pub async fn find_registered_membership(
        pool: &PgPool,
        user_id: i64,
        group_id: i64,
    ) -> AppResult<Option<UserGroup>> {
        let membership = sqlx::query_as::<_, UserGroup>(
            r#"
            SELECT * FROM user_group
            WHERE user_id = $1 AND group_id = $2 AND is_registered
            "#,
        )
        .bind(user_id)
        .bind(group_id)
        .fetch_optional(pool)
        .await?;

        Ok(membership)
    }

    /// Check if user manages the group
    pub async fn is_group_manager(pool: &PgPool, user_id: i64, group_id: i64) -> AppResult<bool> {
        let manager: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM user_group
                WHERE user_id = $1 AND group_id = $2 AND is_registered AND is_group_manager
            )
            "#,
        )
        .bind(user_id)
        .bind(group_id)
        .fetch_one(pool)
        .await?;

        Ok(manager)
    }
}
