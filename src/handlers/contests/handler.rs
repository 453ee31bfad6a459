//! Contest handler implementations

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    services::{ContestService, GroupService},
    state::AppState,
};

use super::{
    request::{CreateContestRequest, UpdateContestRequest},
    response::{ContestResponse, ContestsListResponse},
};

/// Join a contest reached through a group
pub async fn participate(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path((group_id, id)): Path<(i64, i64)>,
) -> AppResult<StatusCode> {
    GroupService::ensure_member(state.store().as_ref(), auth_user.id, group_id).await?;

    state.admission().admit(auth_user.id, id, group_id).await?;

    Ok(StatusCode::CREATED)
}

/// Create a new contest
pub async fn create_contest(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<CreateContestRequest>,
) -> AppResult<(StatusCode, Json<ContestResponse>)> {
    payload.validate()?;

    let contest = ContestService::create_contest(state.db(), auth_user.id, payload).await?;

    Ok((StatusCode::CREATED, Json(contest)))
}

/// Update a contest
pub async fn update_contest(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateContestRequest>,
) -> AppResult<Json<ContestResponse>> {
    payload.validate()?;

    let contest = ContestService::update_contest(state.db(), auth_user.id, id, payload).await?;

    Ok(Json(contest))
}

/// Delete a contest
pub async fn delete_contest(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    ContestService::delete_contest(state.db(), auth_user.id, id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Contests of every group the caller manages
pub async fn list_admin_contests(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<ContestsListResponse>> {
    let contests = ContestService::list_admin_contests(state.db(), auth_user.id).await?;

    Ok(Json(ContestsListResponse { contests }))
}

/// Running contests of every group the caller manages
pub async fn list_ongoing_contests(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<ContestsListResponse>> {
    let contests = ContestService::list_ongoing_contests(state.db(), auth_user.id).await?;

    Ok(Json(ContestsListResponse { contests }))
}

/// One contest the caller manages
pub async fn get_admin_contest(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<i64>,
) -> AppResult<Json<ContestResponse>> {
    let contest = ContestService::get_admin_contest(state.db(), auth_user.id, id).await?;

    Ok(Json(contest))
}
