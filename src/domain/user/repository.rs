// src/domain/user/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::user::{entity::SafeUser, value_objects::EmailAddress};
use async_trait::async_trait;

/// Storage seam for safe users. Implementations must enforce email uniqueness
/// and report a duplicate as [`DomainError::Conflict`](crate::domain::errors::DomainError::Conflict).
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert(&self, user: &SafeUser) -> DomainResult<SafeUser>;

    async fn find_by_email(&self, email: &EmailAddress) -> DomainResult<Option<SafeUser>>;

    /// Replaces the stored record that has the same email.
    async fn update(&self, user: &SafeUser) -> DomainResult<SafeUser>;

    async fn delete(&self, email: &EmailAddress) -> DomainResult<()>;
}
