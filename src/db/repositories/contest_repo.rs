//! Contest repository

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgExecutor, PgPool};

use crate::{
    admission::NewAcmRanking,
    error::AppResult,
    models::{
        Contest, ContestRankAcm, ContestRecord, ContestSchedule, ContestType, VisibilityKind,
    },
};

#[derive(FromRow)]
struct ScheduleRow {
    group_id: i64,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    contest_type: ContestType,
    visibility: VisibilityKind,
}

impl From<ScheduleRow> for ContestSchedule {
    fn from(row: ScheduleRow) -> Self {
        ContestSchedule {
            start_time: row.start_time,
            end_time: row.end_time,
            contest_type: row.contest_type,
            visibility: row.visibility.resolve(row.group_id),
        }
    }
}

/// Repository for contest database operations
pub struct ContestRepository;

impl ContestRepository {
    /// Create a new contest
    pub async fn create(
        pool: &PgPool,
        group_id: i64,
        created_by_id: i64,
        title: &str,
        description: &str,
        description_summary: &str,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        contest_type: ContestType,
        visibility: VisibilityKind,
        is_rank_visible: bool,
    ) -> AppResult<Contest> {
        let contest = sqlx::query_as::<_, Contest>(
            r#"
            INSERT INTO contest (
                group_id, created_by_id, title, description, description_summary,
                start_time, end_time, contest_type, visibility, is_rank_visible
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(group_id)
        .bind(created_by_id)
        .bind(title)
        .bind(description)
        .bind(description_summary)
        .bind(start_time)
        .bind(end_time)
        .bind(contest_type)
        .bind(visibility)
        .bind(is_rank_visible)
        .fetch_one(pool)
        .await?;

        Ok(contest)
    }

    /// Find contest by ID
    pub async fn find_by_id(pool: &PgPool, id: i64) -> AppResult<Option<Contest>> {
        let contest = sqlx::query_as::<_, Contest>(r#"SELECT * FROM contest WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(contest)
    }

    /// Schedule, type and visibility only
    pub async fn find_schedule(pool: &PgPool, id: i64) -> AppResult<Option<ContestSchedule>> {
        let row = sqlx::query_as::<_, ScheduleRow>(
            r#"
            SELECT group_id, start_time, end_time, contest_type, visibility
            FROM contest
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(row.map(ContestSchedule::from))
    }

    /// Update contest
    pub async fn update(
        pool: &PgPool,
        id: i64,
        title: Option<&str>,
        description: Option<&str>,
        description_summary: Option<&str>,
        start_time: Option<DateTime<Utc>>,
        end_time: Option<DateTime<Utc>>,
        contest_type: Option<ContestType>,
        visibility: Option<VisibilityKind>,
        is_rank_visible: Option<bool>,
    ) -> AppResult<Contest> {
        let contest = sqlx::query_as::<_, Contest>(
            r#"
            UPDATE contest
            SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                description_summary = COALESCE($4, description_summary),
                start_time = COALESCE($5, start_time),
                end_time = COALESCE($6, end_time),
                contest_type = COALESCE($7, contest_type),
                visibility = COALESCE($8, visibility),
                is_rank_visible = COALESCE($9, is_rank_visible),
                update_time = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(title)
        .bind(description)
        .bind(description_summary)
        .bind(start_time)
        .bind(end_time)
        .bind(contest_type)
        .bind(visibility)
        .bind(is_rank_visible)
        .fetch_one(pool)
        .await?;

        Ok(contest)
    }

    /// Delete contest
    pub async fn delete(pool: &PgPool, id: i64) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM contest WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }

    /// Contests owned by groups the user manages, optionally only those
    /// running at `ongoing_at`
    pub async fn list_managed_by(
        pool: &PgPool,
        user_id: i64,
        ongoing_at: Option<DateTime<Utc>>,
    ) -> AppResult<Vec<Contest>> {
        let contests = sqlx::query_as::<_, Contest>(
            r#"
            SELECT c.* FROM contest c
            JOIN user_group ug ON ug.group_id = c.group_id
            WHERE
                ug.user_id = $1
                AND ug.is_group_manager
                AND (
                    $2::timestamptz IS NULL
                    OR (c.start_time <= $2 AND c.end_time > $2)
                )
            ORDER BY c.start_time DESC, c.id DESC
            "#,
        )
        .bind(user_id)
        .bind(ongoing_at)
        .fetch_all(pool)
        .await?;

        Ok(contests)
    }

    /// Participation of a user in a contest
    pub async fn find_record<'e, E>(
        executor: E,
        user_id: i64,
        contest_id: i64,
    ) -> AppResult<Option<ContestRecord>>
    where
        E: PgExecutor<'e>,
    {
        let record = sqlx::query_as::<_, ContestRecord>(
            r#"SELECT * FROM contest_record WHERE user_id = $1 AND contest_id = $2"#,
        )
        .bind(user_id)
        .bind(contest_id)
        .fetch_optional(executor)
        .await?;

        Ok(record)
    }

    /// Insert a participation; violates `contest_record_user_id_contest_id_key`
    /// when the user already joined
    pub async fn insert_record<'e, E>(
        executor: E,
        user_id: i64,
        contest_id: i64,
    ) -> AppResult<ContestRecord>
    where
        E: PgExecutor<'e>,
    {
        let record = sqlx::query_as::<_, ContestRecord>(
            r#"
            INSERT INTO contest_record (user_id, contest_id)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(contest_id)
        .fetch_one(executor)
        .await?;

        Ok(record)
    }

    /// Insert an ACM ranking accumulator
    pub async fn insert_rank_acm<'e, E>(
        executor: E,
        user_id: i64,
        contest_id: i64,
        ranking: &NewAcmRanking,
    ) -> AppResult<ContestRankAcm>
    where
        E: PgExecutor<'e>,
    {
        let rank = sqlx::query_as::<_, ContestRankAcm>(
            r#"
            INSERT INTO contest_rank_acm (
                contest_id, user_id, accepted_problem_num, total_penalty, submission_info
            )
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(contest_id)
        .bind(user_id)
        .bind(ranking.accepted_problem_num)
        .bind(ranking.total_penalty)
        .bind(&ranking.submission_info)
        .fetch_one(executor)
        .await?;

        Ok(rank)
    }
}
