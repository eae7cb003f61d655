use super::models::{User, UserWriteData};
use crate::errors::ApiError;
use async_trait::async_trait;

/// Mutating operations report the affected-row count; zero rows is not an
/// error for update/delete.
#[async_trait]
pub trait UserRepository: Sync + Send {
    async fn count(&self) -> Result<i64, ApiError>;
    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<User>, ApiError>;
    async fn get_by_id(&self, id: i32) -> Result<Option<User>, ApiError>;
    async fn create(&self, data: UserWriteData) -> Result<u64, ApiError>;
    async fn update(&self, id: i32, data: UserWriteData) -> Result<u64, ApiError>;
    async fn delete(&self, id: i32) -> Result<u64, ApiError>;
}
