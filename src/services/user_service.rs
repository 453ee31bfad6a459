//! User service

use sqlx::PgPool;

use crate::{
    db::repositories::UserRepository,
    error::{AppError, AppResult},
    handlers::users::response::{ProfileResponse, UserProfileResponse},
};

/// User service for business logic
pub struct UserService;

impl UserService {
    /// Account and profile of the user
    pub async fn get_profile(pool: &PgPool, user_id: i64) -> AppResult<UserProfileResponse> {
        let (user, profile) = futures::try_join!(
            UserRepository::find_by_id(pool, user_id),
            UserRepository::find_profile(pool, user_id),
        )?;
        let user = user.ok_or_else(|| AppError::NotFound("User".to_string()))?;

        Ok(UserProfileResponse {
            id: user.id,
            username: user.username,
            email: user.email,
            role: user.role,
            last_login: user.last_login,
            create_time: user.create_time,
            profile: profile.map(ProfileResponse::from),
        })
    }

    /// Update real name
    pub async fn update_real_name(
        pool: &PgPool,
        user_id: i64,
        real_name: &str,
    ) -> AppResult<ProfileResponse> {
        let profile = UserRepository::update_real_name(pool, user_id, real_name)
            .await?
            .ok_or_else(|| AppError::NotFound("User profile".to_string()))?;

        Ok(profile.into())
    }
}
