//! Notice handler implementations

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    constants::PUBLIC_GROUP_ID,
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    models::Notice,
    services::{GroupService, NoticeService},
    state::AppState,
};

use super::{
    request::{NoticeRequest, OffsetQuery},
    response::{DeleteResponse, NoticeDetail, NoticeSummary, OwnNoticeSummary, UserNoticePage},
};

/// Public board
pub async fn list_public_notices(
    State(state): State<AppState>,
    Query(query): Query<OffsetQuery>,
) -> AppResult<Json<Vec<NoticeSummary>>> {
    let notices = NoticeService::list_notices(state.db(), PUBLIC_GROUP_ID, query.offset).await?;

    Ok(Json(notices))
}

pub async fn get_public_notice(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<UserNoticePage>> {
    let notice = NoticeService::get_notice(state.db(), id, PUBLIC_GROUP_ID).await?;

    Ok(Json(notice))
}

/// Board of a group the caller belongs to
pub async fn list_group_notices(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(group_id): Path<i64>,
    Query(query): Query<OffsetQuery>,
) -> AppResult<Json<Vec<NoticeSummary>>> {
    GroupService::ensure_member(state.store().as_ref(), auth_user.id, group_id).await?;

    let notices = NoticeService::list_notices(state.db(), group_id, query.offset).await?;

    Ok(Json(notices))
}

pub async fn get_group_notice(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path((group_id, id)): Path<(i64, i64)>,
) -> AppResult<Json<UserNoticePage>> {
    GroupService::ensure_member(state.store().as_ref(), auth_user.id, group_id).await?;

    let notice = NoticeService::get_notice(state.db(), id, group_id).await?;

    Ok(Json(notice))
}

/// Create a notice in a group the caller manages
pub async fn create_notice(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<NoticeRequest>,
) -> AppResult<(StatusCode, Json<Notice>)> {
    payload.validate()?;

    let notice = NoticeService::create_notice(state.db(), auth_user.id, payload).await?;

    Ok((StatusCode::CREATED, Json(notice)))
}

/// Notices written by the caller
pub async fn list_own_notices(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Query(query): Query<OffsetQuery>,
) -> AppResult<Json<Vec<OwnNoticeSummary>>> {
    let notices = NoticeService::list_own_notices(state.db(), auth_user.id, query.offset).await?;

    Ok(Json(notices))
}

pub async fn get_notice_detail(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<i64>,
) -> AppResult<Json<NoticeDetail>> {
    let notice = NoticeService::get_notice_detail(state.db(), auth_user.id, id).await?;

    Ok(Json(notice))
}

pub async fn update_notice(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<i64>,
    Json(payload): Json<NoticeRequest>,
) -> AppResult<Json<Notice>> {
    payload.validate()?;

    let notice = NoticeService::update_notice(state.db(), auth_user.id, id, payload).await?;

    Ok(Json(notice))
}

pub async fn delete_notice(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<i64>,
) -> AppResult<Json<DeleteResponse>> {
    NoticeService::delete_notice(state.db(), auth_user.id, id).await?;

    Ok(Json(DeleteResponse { success: true }))
}
