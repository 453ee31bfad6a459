//! Data access used by admission

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    db::repositories::{ContestRepository, GroupRepository},
    error::AppResult,
    models::{ContestRecord, ContestSchedule, UserGroup},
};

use super::NewRanking;

/// Lookups and the single write performed by admission.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContestStore: Send + Sync {
    /// Schedule, type and visibility of a contest
    async fn get_contest(&self, contest_id: i64) -> AppResult<Option<ContestSchedule>>;

    /// Existing participation of a user in a contest
    async fn find_participation(
        &self,
        user_id: i64,
        contest_id: i64,
    ) -> AppResult<Option<ContestRecord>>;

    /// Registered membership of a user in a group
    async fn find_membership(&self, user_id: i64, group_id: i64) -> AppResult<Option<UserGroup>>;

    /// Store the participation record and its ranking row atomically.
    ///
    /// A second participation for the same pair must fail with
    /// `AppError::AlreadyExists`.
    async fn create_participation(
        &self,
        user_id: i64,
        contest_id: i64,
        ranking: NewRanking,
    ) -> AppResult<ContestRecord>;
}

/// Postgres-backed store.
///
/// Uniqueness of `(user_id, contest_id)` is enforced by table constraints, so
/// concurrent admissions cannot both commit.
#[derive(Clone)]
pub struct PgContestStore {
    pool: PgPool,
}

impl PgContestStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContestStore for PgContestStore {
    async fn get_contest(&self, contest_id: i64) -> AppResult<Option<ContestSchedule>> {
        ContestRepository::find_schedule(&self.pool, contest_id).await
    }

    async fn find_participation(
        &self,
        user_id: i64,
        contest_id: i64,
    ) -> AppResult<Option<ContestRecord>> {
        ContestRepository::find_record(&self.pool, user_id, contest_id).await
    }

    async fn find_membership(&self, user_id: i64, group_id: i64) -> AppResult<Option<UserGroup>> {
        GroupRepository::find_registered_membership(&self.pool, user_id, group_id).await
    }

    async fn create_participation(
        &self,
        user_id: i64,
        contest_id: i64,
        ranking: NewRanking,
    ) -> AppResult<ContestRecord> {
        let mut tx = self.pool.begin().await?;

        let record = ContestRepository::insert_record(&mut *tx, user_id, contest_id).await?;

        match ranking {
            NewRanking::Acm(acm) => {
                ContestRepository::insert_rank_acm(&mut *tx, user_id, contest_id, &acm).await?;
            }
        }

        tx.commit().await?;

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{
        admission::{AdmissionError, AdmissionEvaluator, NewAcmRanking},
        error::AppError,
        models::{ContestType, Visibility, VisibilityKind},
        test_utils::{containers::test_pool, fixtures},
    };

    /// Postgres store that never reports an existing participation, so the
    /// insert itself has to catch the duplicate
    struct NoPrecheck(PgContestStore);

    #[async_trait]
    impl ContestStore for NoPrecheck {
        async fn get_contest(&self, contest_id: i64) -> AppResult<Option<ContestSchedule>> {
            self.0.get_contest(contest_id).await
        }

        async fn find_participation(
            &self,
            _user_id: i64,
            _contest_id: i64,
        ) -> AppResult<Option<ContestRecord>> {
            Ok(None)
        }

        async fn find_membership(
            &self,
            user_id: i64,
            group_id: i64,
        ) -> AppResult<Option<UserGroup>> {
            self.0.find_membership(user_id, group_id).await
        }

        async fn create_participation(
            &self,
            user_id: i64,
            contest_id: i64,
            ranking: NewRanking,
        ) -> AppResult<ContestRecord> {
            self.0.create_participation(user_id, contest_id, ranking).await
        }
    }

    fn acm() -> NewRanking {
        NewRanking::Acm(NewAcmRanking::default())
    }

    #[tokio::test]
    async fn test_concurrent_admissions_store_one_row_each() {
        let Some(pool) = test_pool().await else {
            return;
        };
        let user = fixtures::create_user(&pool).await;
        let contest =
            fixtures::create_contest(&pool, 1, user, ContestType::Acm, VisibilityKind::Public).await;
        let evaluator = AdmissionEvaluator::new(Arc::new(PgContestStore::new(pool.clone())));

        let (first, second) = tokio::join!(
            evaluator.admit(user, contest.id, 1),
            evaluator.admit(user, contest.id, 1)
        );

        let results = [first, second];
        assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
        assert!(results.iter().any(|r| matches!(
            r,
            Err(AdmissionError::AlreadyRegistered { user_id, contest_id })
                if *user_id == user && *contest_id == contest.id
        )));
        assert_eq!(fixtures::count_rows(&pool, "contest_record", contest.id).await, 1);
        assert_eq!(fixtures::count_rows(&pool, "contest_rank_acm", contest.id).await, 1);
    }

    #[tokio::test]
    async fn test_duplicate_insert_is_already_exists() {
        let Some(pool) = test_pool().await else {
            return;
        };
        let user = fixtures::create_user(&pool).await;
        let contest =
            fixtures::create_contest(&pool, 1, user, ContestType::Acm, VisibilityKind::Public).await;
        let store = PgContestStore::new(pool.clone());

        let record = store.create_participation(user, contest.id, acm()).await.unwrap();
        assert_eq!(record.user_id, user);
        assert_eq!(record.contest_id, contest.id);

        let err = store
            .create_participation(user, contest.id, acm())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::AlreadyExists(ref constraint) if constraint == "contest_record_user_id_contest_id_key"
        ));
    }

    #[tokio::test]
    async fn test_unique_violation_becomes_already_registered() {
        let Some(pool) = test_pool().await else {
            return;
        };
        let user = fixtures::create_user(&pool).await;
        let contest =
            fixtures::create_contest(&pool, 1, user, ContestType::Acm, VisibilityKind::Public).await;
        let evaluator =
            AdmissionEvaluator::new(Arc::new(NoPrecheck(PgContestStore::new(pool.clone()))));

        evaluator.admit(user, contest.id, 1).await.unwrap();
        let err = evaluator.admit(user, contest.id, 1).await.unwrap_err();

        assert!(matches!(err, AdmissionError::AlreadyRegistered { .. }));
        assert_eq!(fixtures::count_rows(&pool, "contest_record", contest.id).await, 1);
    }

    #[tokio::test]
    async fn test_failed_ranking_insert_rolls_back_record() {
        let Some(pool) = test_pool().await else {
            return;
        };
        let user = fixtures::create_user(&pool).await;
        let contest =
            fixtures::create_contest(&pool, 1, user, ContestType::Acm, VisibilityKind::Public).await;
        ContestRepository::insert_rank_acm(&pool, user, contest.id, &NewAcmRanking::default())
            .await
            .unwrap();
        let store = PgContestStore::new(pool.clone());

        let err = store
            .create_participation(user, contest.id, acm())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AppError::AlreadyExists(ref constraint) if constraint == "contest_rank_acm_contest_id_user_id_key"
        ));
        assert_eq!(fixtures::count_rows(&pool, "contest_record", contest.id).await, 0);
    }

    #[tokio::test]
    async fn test_schedule_decodes_type_and_visibility() {
        let Some(pool) = test_pool().await else {
            return;
        };
        let user = fixtures::create_user(&pool).await;
        let group = fixtures::create_group(&pool).await;
        let public = fixtures::create_contest(
            &pool,
            1,
            user,
            ContestType::TotalScore,
            VisibilityKind::Public,
        )
        .await;
        let restricted =
            fixtures::create_contest(&pool, group, user, ContestType::Acm, VisibilityKind::Restricted)
                .await;
        let store = PgContestStore::new(pool.clone());

        let schedule = store.get_contest(public.id).await.unwrap().unwrap();
        assert_eq!(schedule.contest_type, ContestType::TotalScore);
        assert_eq!(schedule.visibility, Visibility::Public);
        assert_eq!(schedule.start_time, public.start_time);
        assert_eq!(schedule.end_time, public.end_time);

        let schedule = store.get_contest(restricted.id).await.unwrap().unwrap();
        assert_eq!(schedule.contest_type, ContestType::Acm);
        assert_eq!(schedule.visibility, Visibility::Restricted(group));

        assert!(store.get_contest(i64::MAX).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_membership_must_be_registered() {
        let Some(pool) = test_pool().await else {
            return;
        };
        let registered = fixtures::create_user(&pool).await;
        let invited = fixtures::create_user(&pool).await;
        let group = fixtures::create_group(&pool).await;
        fixtures::join_group(&pool, registered, group, true, false).await;
        fixtures::join_group(&pool, invited, group, false, false).await;
        let store = PgContestStore::new(pool);

        let membership = store.find_membership(registered, group).await.unwrap().unwrap();
        assert_eq!(membership.group_id, group);
        assert!(store.find_membership(invited, group).await.unwrap().is_none());
    }
}
