use super::{models::CategorySales, repository::SalesRepository};
use crate::errors::ApiError;
use async_trait::async_trait;
use sqlx::{Pool, Postgres};

pub struct PostgresSalesRepository {
    pool: Pool<Postgres>,
}

impl PostgresSalesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

fn query_error(method: &'static str, e: sqlx::Error) -> ApiError {
    tracing::error!(
        error = e.to_string(),
        method,
        "PostgresSalesRepository sqlx error"
    );

    ApiError::QueryFailed(e.to_string())
}

#[async_trait]
impl SalesRepository for PostgresSalesRepository {
    async fn totals_by_category(&self) -> Result<Vec<CategorySales>, ApiError> {
        sqlx::query_as(
            r#"SELECT "category", SUM("price" * "quantity")::float8 AS "value"
            FROM "sales"
            GROUP BY "category"
            ORDER BY "value" DESC"#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| query_error("totals_by_category", e))
    }

    async fn total_revenue(&self) -> Result<f64, ApiError> {
        let total: Option<f64> =
            sqlx::query_scalar(r#"SELECT SUM("price" * "quantity")::float8 FROM "sales""#)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| query_error("total_revenue", e))?;

        Ok(total.unwrap_or_default())
    }

    async fn average_order_value(&self) -> Result<f64, ApiError> {
        let avg: Option<f64> = sqlx::query_scalar(r#"SELECT AVG("price")::float8 FROM "sales""#)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| query_error("average_order_value", e))?;

        Ok(avg.unwrap_or_default())
    }

    async fn total_orders(&self) -> Result<i64, ApiError> {
        sqlx::query_scalar(r#"SELECT COUNT(*) FROM "sales""#)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| query_error("total_orders", e))
    }
}
