use super::{
    models::{User, UserWriteData},
    repository::UserRepository,
};
use crate::errors::ApiError;
use async_trait::async_trait;
use std::{collections::BTreeMap, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    next_id: i32,
    users: BTreeMap<i32, User>,
}

impl InMemoryUserRepository {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn count(&self) -> Result<i64, ApiError> {
        let lock = self.inner.lock().await;

        Ok(lock.users.len() as i64)
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<User>, ApiError> {
        // Mirrors the errors postgres raises for a negative window.
        if offset < 0 {
            return Err(ApiError::QueryFailed(
                "OFFSET must not be negative".to_owned(),
            ));
        }
        if limit < 0 {
            return Err(ApiError::QueryFailed(
                "LIMIT must not be negative".to_owned(),
            ));
        }

        let lock = self.inner.lock().await;

        let users = lock
            .users
            .values()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect();

        Ok(users)
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<User>, ApiError> {
        let lock = self.inner.lock().await;

        Ok(lock.users.get(&id).cloned())
    }

    async fn create(&self, data: UserWriteData) -> Result<u64, ApiError> {
        let mut lock = self.inner.lock().await;

        lock.next_id += 1;
        let id = lock.next_id;

        lock.users.insert(
            id,
            User {
                id,
                name: data.name,
                email: data.email,
                role: data.role,
                status: data.status,
            },
        );

        Ok(1)
    }

    async fn update(&self, id: i32, data: UserWriteData) -> Result<u64, ApiError> {
        let mut lock = self.inner.lock().await;

        match lock.users.get_mut(&id) {
            Some(user) => {
                user.name = data.name;
                user.email = data.email;
                user.role = data.role;
                user.status = data.status;

                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: i32) -> Result<u64, ApiError> {
        let mut lock = self.inner.lock().await;

        match lock.users.remove(&id) {
            Some(_) => Ok(1),
            None => Ok(0),
        }
    }
}
