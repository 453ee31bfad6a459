//! User handler implementations

use axum::{extract::State, Json};
use validator::Validate;

use crate::{
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    services::UserService,
    state::AppState,
};

use super::{
    request::UpdateRealNameRequest,
    response::{ProfileResponse, UserProfileResponse},
};

/// Get own profile
pub async fn get_profile(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<UserProfileResponse>> {
    let profile = UserService::get_profile(state.db(), auth_user.id).await?;

    Ok(Json(profile))
}

/// Update own real name
pub async fn update_real_name(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<UpdateRealNameRequest>,
) -> AppResult<Json<ProfileResponse>> {
    payload.validate()?;

    let profile =
        UserService::update_real_name(state.db(), auth_user.id, &payload.real_name).await?;

    Ok(Json(profile))
}
