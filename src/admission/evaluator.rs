//! Admission evaluator

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::{error::AppError, models::Visibility};

use super::{AdmissionError, ContestStore, NewRanking};

/// Runs the admission checks against a [`ContestStore`]
#[derive(Clone)]
pub struct AdmissionEvaluator {
    store: Arc<dyn ContestStore>,
}

impl AdmissionEvaluator {
    pub fn new(store: Arc<dyn ContestStore>) -> Self {
        Self { store }
    }

    /// Admit `user_id` to `contest_id`, reached through `group_id`.
    ///
    /// Membership in `group_id` itself is not checked here; the participation
    /// handler runs `GroupService::ensure_member` first.
    pub async fn admit(
        &self,
        user_id: i64,
        contest_id: i64,
        group_id: i64,
    ) -> Result<(), AdmissionError> {
        self.admit_at(user_id, contest_id, group_id, Utc::now()).await
    }

    /// Same as [`admit`](Self::admit) with an explicit clock
    pub async fn admit_at(
        &self,
        user_id: i64,
        contest_id: i64,
        group_id: i64,
        now: DateTime<Utc>,
    ) -> Result<(), AdmissionError> {
        let contest = self
            .store
            .get_contest(contest_id)
            .await?
            .ok_or_else(|| AdmissionError::NotFound(format!("Contest {}", contest_id)))?;

        if self
            .store
            .find_participation(user_id, contest_id)
            .await?
            .is_some()
        {
            return Err(AdmissionError::AlreadyRegistered {
                user_id,
                contest_id,
            });
        }

        let denied = AdmissionError::AccessDenied {
            user_id,
            contest_id,
        };

        // Public contests accept any route group
        if let Visibility::Restricted(owner) = contest.visibility {
            if owner != group_id {
                debug!(user_id, contest_id, group_id, owner, "Contest is owned by another group");
                return Err(denied);
            }

            if self.store.find_membership(user_id, owner).await?.is_none() {
                debug!(user_id, contest_id, group_id = owner, "User is not a registered group member");
                return Err(denied);
            }
        }

        if !contest.is_ongoing_at(now) {
            debug!(
                user_id,
                contest_id,
                start_time = %contest.start_time,
                end_time = %contest.end_time,
                "Contest is not running"
            );
            return Err(denied);
        }

        let ranking = NewRanking::initial(contest.contest_type)?;

        match self
            .store
            .create_participation(user_id, contest_id, ranking)
            .await
        {
            Ok(record) => {
                info!(
                    user_id,
                    contest_id,
                    record_id = record.id,
                    contest_type = %contest.contest_type,
                    "User admitted to contest"
                );
                Ok(())
            }
            // Lost a race with a concurrent admission of the same pair
            Err(AppError::AlreadyExists(constraint)) => {
                debug!(user_id, contest_id, %constraint, "Participation already stored");
                Err(AdmissionError::AlreadyRegistered {
                    user_id,
                    contest_id,
                })
            }
            Err(e) => Err(AdmissionError::Store(e)),
        }
    }
}
