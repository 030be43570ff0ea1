// src/application/services/mod.rs
use std::sync::Arc;

use serde_json::Value;

use crate::{
    application::ports::{ClockPort, EmailValidatorPort, time::Clock},
    domain::{
        errors::{DomainError, DomainResult, ValidationError},
        user::{EmailAddress, SafeUser, UserRepository, validate},
    },
};

/// Returns a copy of `user` stamped with the clock's current time. The input
/// is left untouched.
pub fn touch(user: &SafeUser, clock: &dyn Clock) -> SafeUser {
    user.touch(clock.now())
}

/// Glue between the validation contract, the clock, and storage. Callers that
/// own account policies (confirmation, bans, roles, 2FA) decide what changes;
/// this service only guarantees that what is stored is valid and stamped.
pub struct SafeUserService {
    repo: Arc<dyn UserRepository>,
    clock: Arc<ClockPort>,
    emails: Arc<EmailValidatorPort>,
}

impl SafeUserService {
    pub fn new(
        repo: Arc<dyn UserRepository>,
        clock: Arc<ClockPort>,
        emails: Arc<EmailValidatorPort>,
    ) -> Self {
        Self {
            repo,
            clock,
            emails,
        }
    }

    pub fn validate(&self, candidate: &Value) -> Result<SafeUser, ValidationError> {
        validate(candidate, self.emails.as_ref())
    }

    /// Validates a freshly registered record and stores it.
    pub async fn accept(&self, candidate: &Value) -> DomainResult<SafeUser> {
        let user = self.validate(candidate)?;
        let stored = self.repo.insert(&user).await?;
        tracing::info!(email = %stored.email, role = %stored.role, "user stored");
        Ok(stored)
    }

    /// Persists a mutated record, stamping `updated_at` first.
    pub async fn record_mutation(&self, user: &SafeUser) -> DomainResult<SafeUser> {
        let touched = touch(user, self.clock.as_ref());
        self.repo.update(&touched).await
    }

    pub async fn find(&self, email: &EmailAddress) -> DomainResult<SafeUser> {
        self.repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("user '{email}'")))
    }

    pub async fn remove(&self, email: &EmailAddress) -> DomainResult<()> {
        self.repo.delete(email).await
    }
}
