//! Contest service

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::info;

use crate::{
    db::repositories::ContestRepository,
    error::{AppError, AppResult},
    handlers::contests::{
        request::{CreateContestRequest, UpdateContestRequest},
        response::ContestResponse,
    },
    models::Contest,
    utils::now_utc,
};

use super::GroupService;

/// Contest service for business logic
pub struct ContestService;

impl ContestService {
    /// A contest may start and end at the same instant, never end first
    pub fn is_valid_period(start_time: DateTime<Utc>, end_time: DateTime<Utc>) -> bool {
        start_time <= end_time
    }

    fn check_period(start_time: DateTime<Utc>, end_time: DateTime<Utc>) -> AppResult<()> {
        if Self::is_valid_period(start_time, end_time) {
            Ok(())
        } else {
            Err(AppError::UnprocessableData(
                "start time must be earlier than end time".to_string(),
            ))
        }
    }

    /// Create a new contest in a group the caller manages
    pub async fn create_contest(
        pool: &PgPool,
        user_id: i64,
        payload: CreateContestRequest,
    ) -> AppResult<ContestResponse> {
        let group = GroupService::get_group(pool, payload.group_id).await?;
        GroupService::ensure_manager(pool, user_id, group.id).await?;
        Self::check_period(payload.start_time, payload.end_time)?;

        let contest = ContestRepository::create(
            pool,
            group.id,
            user_id,
            &payload.title,
            &payload.description,
            &payload.description_summary,
            payload.start_time,
            payload.end_time,
            payload.contest_type,
            payload.visibility,
            payload.is_rank_visible,
        )
        .await?;

        info!(contest_id = contest.id, group_id = group.id, user_id, "Contest created");

        Ok(ContestResponse::at(contest, now_utc()))
    }

    /// Update a contest
    pub async fn update_contest(
        pool: &PgPool,
        user_id: i64,
        id: i64,
        payload: UpdateContestRequest,
    ) -> AppResult<ContestResponse> {
        let contest = Self::find_managed(pool, user_id, id).await?;

        Self::check_period(
            payload.start_time.unwrap_or(contest.start_time),
            payload.end_time.unwrap_or(contest.end_time),
        )?;

        let updated = ContestRepository::update(
            pool,
            id,
            payload.title.as_deref(),
            payload.description.as_deref(),
            payload.description_summary.as_deref(),
            payload.start_time,
            payload.end_time,
            payload.contest_type,
            payload.visibility,
            payload.is_rank_visible,
        )
        .await?;

        Ok(ContestResponse::at(updated, now_utc()))
    }

    /// Delete a contest
    pub async fn delete_contest(pool: &PgPool, user_id: i64, id: i64) -> AppResult<()> {
        Self::find_managed(pool, user_id, id).await?;

        ContestRepository::delete(pool, id).await?;

        info!(contest_id = id, user_id, "Contest deleted");

        Ok(())
    }

    /// Contests of every group the user manages
    pub async fn list_admin_contests(pool: &PgPool, user_id: i64) -> AppResult<Vec<ContestResponse>> {
        let now = now_utc();
        let contests = ContestRepository::list_managed_by(pool, user_id, None).await?;

        Ok(contests
            .into_iter()
            .map(|contest| ContestResponse::at(contest, now))
            .collect())
    }

    /// Running contests of every group the user manages
    pub async fn list_ongoing_contests(
        pool: &PgPool,
        user_id: i64,
    ) -> AppResult<Vec<ContestResponse>> {
        let now = now_utc();
        let contests = ContestRepository::list_managed_by(pool, user_id, Some(now)).await?;

        Ok(contests
            .into_iter()
            .map(|contest| ContestResponse::at(contest, now))
            .collect())
    }

    /// One contest the user manages
    pub async fn get_admin_contest(
        pool: &PgPool,
        user_id: i64,
        id: i64,
    ) -> AppResult<ContestResponse> {
        let contest = Self::find_managed(pool, user_id, id).await?;

        Ok(ContestResponse::at(contest, now_utc()))
    }

    async fn find_managed(pool: &PgPool, user_id: i64, id: i64) -> AppResult<Contest> {
        let contest = ContestRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Contest".to_string()))?;

        GroupService::ensure_manager(pool, user_id, contest.group_id).await?;

        Ok(contest)
    }
}
