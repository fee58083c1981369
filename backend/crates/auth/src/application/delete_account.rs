//! Delete Account Use Case
//!
//! Removes the caller's posts, then their profile, then the account itself.
//! The three stores are not covered by one transaction. Each step is
//! idempotent and retried a few times; if a step still fails, the steps
//! already done stay done and the error names the step that stopped us.
//! Running the deletion again finishes the job.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use kernel::owner::OwnedResourceStore;

use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::UserId;
use crate::error::{AuthError, AuthResult};

/// Delete account output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteAccountOutput {
    pub posts_deleted: u64,
    pub profiles_deleted: u64,
    /// `false` when the account record was already gone
    pub account_deleted: bool,
}

/// Delete account use case
pub struct DeleteAccountUseCase<U, P, Q>
where
    U: UserRepository,
    P: OwnedResourceStore,
    Q: OwnedResourceStore,
{
    user_repo: Arc<U>,
    profile_store: Arc<P>,
    post_store: Arc<Q>,
    config: Arc<AuthConfig>,
}

impl<U, P, Q> DeleteAccountUseCase<U, P, Q>
where
    U: UserRepository,
    P: OwnedResourceStore,
    Q: OwnedResourceStore,
{
    pub fn new(
        user_repo: Arc<U>,
        profile_store: Arc<P>,
        post_store: Arc<Q>,
        config: Arc<AuthConfig>,
    ) -> Self {
        Self {
            user_repo,
            profile_store,
            post_store,
            config,
        }
    }

    pub async fn execute(&self, user_id: &UserId) -> AuthResult<DeleteAccountOutput> {
        let posts_step = self.post_store.resource_name();
        let posts_deleted = self
            .with_retry(posts_step, user_id, || {
                self.post_store.delete_all_by_owner(user_id)
            })
            .await
            .map_err(|e| Self::incomplete(user_id, posts_step, &[], e))?;

        let profile_step = self.profile_store.resource_name();
        let profiles_deleted = self
            .with_retry(profile_step, user_id, || {
                self.profile_store.delete_all_by_owner(user_id)
            })
            .await
            .map_err(|e| Self::incomplete(user_id, profile_step, &[posts_step], e))?;

        let account_deleted = self
            .with_retry("account", user_id, || self.user_repo.delete(user_id))
            .await
            .map_err(|e| Self::incomplete(user_id, "account", &[posts_step, profile_step], e))?;

        tracing::info!(
            user_id = %user_id,
            posts_deleted,
            profiles_deleted,
            account_deleted,
            "Account deleted"
        );

        Ok(DeleteAccountOutput {
            posts_deleted,
            profiles_deleted,
            account_deleted,
        })
    }

    /// Run `op` up to `purge_attempts` times with a linearly growing delay
    async fn with_retry<T, E, F, Fut>(
        &self,
        step: &'static str,
        user_id: &UserId,
        mut op: F,
    ) -> Result<T, E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: fmt::Display,
    {
        let attempts = self.config.purge_attempts.max(1);
        let mut attempt = 1;
        loop {
            match op().await {
                Ok(value) => return Ok(value),
                Err(e) if attempt < attempts => {
                    tracing::warn!(
                        user_id = %user_id,
                        step,
                        attempt,
                        error = %e,
                        "Account deletion step failed, retrying"
                    );
                    tokio::time::sleep(self.config.purge_retry_delay * attempt).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn incomplete(
        user_id: &UserId,
        step: &'static str,
        completed: &[&'static str],
        cause: impl fmt::Display,
    ) -> AuthError {
        tracing::error!(
            user_id = %user_id,
            failed_step = step,
            completed_steps = ?completed,
            error = %cause,
            "Account deletion stopped part way; data may be orphaned until retried"
        );
        AuthError::CascadeIncomplete {
            step,
            reason: cause.to_string(),
        }
    }
}
