//! Notice service

use sqlx::PgPool;
use tracing::info;

use crate::{
    constants::{NOTICE_PAGE_SIZE, OWN_NOTICE_PAGE_SIZE},
    db::repositories::NoticeRepository,
    error::{AppError, AppResult},
    handlers::notices::{
        request::NoticeRequest,
        response::{
            NoticeContent, NoticeDetail, NoticeLink, NoticeSummary, OwnNoticeSummary,
            UserNoticePage,
        },
    },
    models::Notice,
    utils::Page,
};

use super::GroupService;

/// Notice service for business logic
pub struct NoticeService;

impl NoticeService {
    /// Visible notices of a group, pinned first
    pub async fn list_notices(
        pool: &PgPool,
        group_id: i64,
        offset: i64,
    ) -> AppResult<Vec<NoticeSummary>> {
        let page = Page::from_offset(offset, NOTICE_PAGE_SIZE)?;

        let notices = sqlx::query_as::<_, NoticeSummary>(
            r#"
            SELECT id, title, fixed, create_time
            FROM notice
            WHERE group_id = $1 AND visible
            ORDER BY fixed DESC, id DESC
            OFFSET $2 LIMIT $3
            "#,
        )
        .bind(group_id)
        .bind(page.skip)
        .bind(page.take)
        .fetch_all(pool)
        .await?;

        Ok(notices)
    }

    /// A visible notice of the group with its neighbours
    pub async fn get_notice(pool: &PgPool, id: i64, group_id: i64) -> AppResult<UserNoticePage> {
        let current = sqlx::query_as::<_, NoticeContent>(
            r#"
            SELECT title, content, create_time, update_time
            FROM notice
            WHERE id = $1 AND group_id = $2 AND visible
            "#,
        )
        .bind(id)
        .bind(group_id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Notice".to_string()))?;

        let prev = sqlx::query_as::<_, NoticeLink>(
            r#"
            SELECT id, title FROM notice
            WHERE id < $1 AND group_id = $2 AND visible
            ORDER BY id DESC
            LIMIT 1
            "#,
        )
        .bind(id)
        .bind(group_id)
        .fetch_optional(pool);

        let next = sqlx::query_as::<_, NoticeLink>(
            r#"
            SELECT id, title FROM notice
            WHERE id > $1 AND group_id = $2 AND visible
            ORDER BY id ASC
            LIMIT 1
            "#,
        )
        .bind(id)
        .bind(group_id)
        .fetch_optional(pool);

        let (prev, next) = futures::try_join!(prev, next)?;

        Ok(UserNoticePage {
            current,
            prev,
            next,
        })
    }

    /// Create a notice in a group the user manages
    pub async fn create_notice(
        pool: &PgPool,
        user_id: i64,
        payload: NoticeRequest,
    ) -> AppResult<Notice> {
        let group = GroupService::get_group(pool, payload.group_id).await?;
        GroupService::ensure_manager(pool, user_id, group.id).await?;

        let notice = NoticeRepository::create(
            pool,
            group.id,
            user_id,
            &payload.title,
            &payload.content,
            payload.visible,
            payload.fixed,
        )
        .await?;

        info!(notice_id = notice.id, group_id = group.id, user_id, "Notice created");

        Ok(notice)
    }

    /// Replace a notice; it cannot move to another group
    pub async fn update_notice(
        pool: &PgPool,
        user_id: i64,
        id: i64,
        payload: NoticeRequest,
    ) -> AppResult<Notice> {
        let notice = Self::find_managed(pool, user_id, id).await?;

        if notice.group_id != payload.group_id {
            return Err(AppError::UnprocessableData(
                "Group id must not be changed".to_string(),
            ));
        }

        NoticeRepository::update(
            pool,
            id,
            &payload.title,
            &payload.content,
            payload.visible,
            payload.fixed,
        )
        .await
    }

    /// Notices written by the user, newest first
    pub async fn list_own_notices(
        pool: &PgPool,
        user_id: i64,
        offset: i64,
    ) -> AppResult<Vec<OwnNoticeSummary>> {
        let page = Page::from_offset(offset, OWN_NOTICE_PAGE_SIZE)?;

        let notices = sqlx::query_as::<_, OwnNoticeSummary>(
            r#"
            SELECT n.id, n.group_id, g.group_name, n.title, n.visible, n.create_time
            FROM notice n
            JOIN "group" g ON g.id = n.group_id
            WHERE n.created_by_id = $1
            ORDER BY n.id DESC
            OFFSET $2 LIMIT $3
            "#,
        )
        .bind(user_id)
        .bind(page.skip)
        .bind(page.take)
        .fetch_all(pool)
        .await?;

        Ok(notices)
    }

    /// Notice with its group, for editing
    pub async fn get_notice_detail(
        pool: &PgPool,
        user_id: i64,
        id: i64,
    ) -> AppResult<NoticeDetail> {
        Self::find_managed(pool, user_id, id).await?;

        let detail = sqlx::query_as::<_, NoticeDetail>(
            r#"
            SELECT n.group_id, g.group_name, n.title, n.content, n.visible, n.fixed
            FROM notice n
            JOIN "group" g ON g.id = n.group_id
            WHERE n.id = $1
            "#,
        )
        .bind(id)
        .fetch_one(pool)
        .await?;

        Ok(detail)
    }

    /// Delete a notice
    pub async fn delete_notice(pool: &PgPool, user_id: i64, id: i64) -> AppResult<()> {
        Self::find_managed(pool, user_id, id).await?;

        NoticeRepository::delete(pool, id).await?;

        info!(notice_id = id, user_id, "Notice deleted");

        Ok(())
    }

    async fn find_managed(pool: &PgPool, user_id: i64, id: i64) -> AppResult<Notice> {
        let notice = NoticeRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Notice".to_string()))?;

        GroupService::ensure_manager(pool, user_id, notice.group_id).await?;

        Ok(notice)
    }
}
