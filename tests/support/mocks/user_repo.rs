// tests/support/mocks/user_repo.rs
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use users_types::domain::errors::{DomainError, DomainResult};
use users_types::domain::user::{EmailAddress, SafeUser, UserRepository};

/// Repository keyed by email, mirroring the unique index of the real table.
#[derive(Default)]
pub struct InMemoryUserRepo {
    inner: Mutex<HashMap<String, SafeUser>>,
}

impl InMemoryUserRepo {
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().len()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn insert(&self, user: &SafeUser) -> DomainResult<SafeUser> {
        let mut map = self.inner.lock().unwrap();
        let key = user.email.as_str().to_owned();
        if map.contains_key(&key) {
            return Err(DomainError::Conflict("email already exists".into()));
        }
        map.insert(key, user.clone());
        Ok(user.clone())
    }

    async fn find_by_email(&self, email: &EmailAddress) -> DomainResult<Option<SafeUser>> {
        let map = self.inner.lock().unwrap();
        Ok(map.get(email.as_str()).cloned())
    }

    async fn update(&self, user: &SafeUser) -> DomainResult<SafeUser> {
        let mut map = self.inner.lock().unwrap();
        let stored = map
            .get_mut(user.email.as_str())
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?;
        let created_at = stored.created_at;
        *stored = SafeUser {
            created_at,
            ..user.clone()
        };
        Ok(stored.clone())
    }

    async fn delete(&self, email: &EmailAddress) -> DomainResult<()> {
        let mut map = self.inner.lock().unwrap();
        map.remove(email.as_str())
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("user not found".into()))
    }
}
