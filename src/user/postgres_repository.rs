use super::{
    models::{User, UserWriteData},
    repository::UserRepository,
};
use crate::errors::ApiError;
use async_trait::async_trait;
use sqlx::{Pool, Postgres};

pub struct PostgresUserRepository {
    pool: Pool<Postgres>,
}

impl PostgresUserRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

fn query_error(method: &'static str, e: sqlx::Error) -> ApiError {
    tracing::error!(
        error = e.to_string(),
        method,
        "PostgresUserRepository sqlx error"
    );

    ApiError::QueryFailed(e.to_string())
}

fn write_error(method: &'static str, e: sqlx::Error) -> ApiError {
    tracing::error!(
        error = e.to_string(),
        method,
        "PostgresUserRepository sqlx error"
    );

    ApiError::WriteFailed(e.to_string())
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn count(&self) -> Result<i64, ApiError> {
        sqlx::query_scalar(r#"SELECT COUNT(*) FROM "users""#)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| query_error("count", e))
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<User>, ApiError> {
        sqlx::query_as(r#"SELECT * FROM "users" ORDER BY "id" LIMIT $1 OFFSET $2"#)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| query_error("list", e))
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<User>, ApiError> {
        sqlx::query_as(r#"SELECT * FROM "users" WHERE "id" = $1"#)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| query_error("get_by_id", e))
    }

    async fn create(&self, data: UserWriteData) -> Result<u64, ApiError> {
        sqlx::query(
            r#"INSERT INTO "users" ("name", "email", "role", "status")
            VALUES ($1, $2, $3, $4)"#,
        )
        .bind(data.name)
        .bind(data.email)
        .bind(data.role)
        .bind(data.status)
        .execute(&self.pool)
        .await
        .map(|r| r.rows_affected())
        .map_err(|e| write_error("create", e))
    }

    async fn update(&self, id: i32, data: UserWriteData) -> Result<u64, ApiError> {
        sqlx::query(
            r#"UPDATE "users"
            SET "name" = $1, "email" = $2, "role" = $3, "status" = $4
            WHERE "id" = $5"#,
        )
        .bind(data.name)
        .bind(data.email)
        .bind(data.role)
        .bind(data.status)
        .bind(id)
        .execute(&self.pool)
        .await
        .map(|r| r.rows_affected())
        .map_err(|e| write_error("update", e))
    }

    async fn delete(&self, id: i32) -> Result<u64, ApiError> {
        sqlx::query(r#"DELETE FROM "users" WHERE "id" = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await
            .map(|r| r.rows_affected())
            .map_err(|e| query_error("delete", e))
    }
}
