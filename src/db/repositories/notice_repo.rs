//! Notice repository

use sqlx::PgPool;

use crate::{error::AppResult, models::Notice};

/// Repository for notice database operations
pub struct NoticeRepository;

impl NoticeRepository {
    /// Create a new notice
    pub async fn create(
        pool: &PgPool,
        group_id: i64,
        created_by_id: i64,
        title: &str,
        content: &str,
        visible: bool,
        fixed: bool,
    ) -> AppResult<Notice> {
        let notice = sqlx::query_as::<_, Notice>(
            r#"
            INSERT INTO notice (group_id, created_by_id, title, content, visible, fixed)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(group_id)
        .bind(created_by_id)
        .bind(title)
        .bind(content)
        .bind(visible)
        .bind(fixed)
        .fetch_one(pool)
        .await?;

        Ok(notice)
    }

    /// Find notice by ID
    pub async fn find_by_id(pool: &PgPool, id: i64) -> AppResult<Option<Notice>> {
        let notice = sqlx::query_as::<_, Notice>(r#"SELECT * FROM notice WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(notice)
    }

    /// Replace the editable fields of a notice
    pub async fn update(
        pool: &PgPool,
        id: i64,
        title: &str,
        content: &str,
        visible: bool,
        fixed: bool,
    ) -> AppResult<Notice> {
        let notice = sqlx::query_as::<_, Notice>(
            r#"
            UPDATE notice
            SET title = $2, content = $3, visible = $4, fixed = $5, update_time = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(title)
        .bind(content)
        .bind(visible)
        .bind(fixed)
        .fetch_one(pool)
        .await?;

        Ok(notice)
    }

    /// Delete notice
    pub async fn delete(pool: &PgPool, id: i64) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM notice WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }
}
