//! Group service

use sqlx::PgPool;
use tracing::debug;

use crate::{
    admission::ContestStore,
    db::repositories::GroupRepository,
    error::{AppError, AppResult},
    models::{Group, UserGroup},
};

/// Group lookups and membership checks
pub struct GroupService;

impl GroupService {
    /// Get group by ID
    pub async fn get_group(pool: &PgPool, id: i64) -> AppResult<Group> {
        GroupRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Group".to_string()))
    }

    /// Registered membership of the user, or `Forbidden`
    pub async fn ensure_member(
        store: &dyn ContestStore,
        user_id: i64,
        group_id: i64,
    ) -> AppResult<UserGroup> {
        store
            .find_membership(user_id, group_id)
            .await?
            .ok_or_else(|| {
                debug!(user_id, group_id, "Not a registered member of the group");
                AppError::Forbidden(format!("User {} is not a member of Group {}", user_id, group_id))
            })
    }

    /// `Forbidden` unless the user manages the group
    pub async fn ensure_manager(pool: &PgPool, user_id: i64, group_id: i64) -> AppResult<()> {
        if GroupRepository::is_group_manager(pool, user_id, group_id).await? {
            Ok(())
        } else {
            Err(AppError::Forbidden(format!(
                "User {} does not manage Group {}",
                user_id, group_id
            )))
        }
    }
}
