use super::models::CategorySales;
use crate::errors::ApiError;
use async_trait::async_trait;

/// Read-only aggregates over the sales table. The stats endpoint composes
/// the three scalar queries independently, without a transaction.
#[async_trait]
pub trait SalesRepository: Sync + Send {
    async fn totals_by_category(&self) -> Result<Vec<CategorySales>, ApiError>;
    async fn total_revenue(&self) -> Result<f64, ApiError>;
    async fn average_order_value(&self) -> Result<f64, ApiError>;
    async fn total_orders(&self) -> Result<i64, ApiError>;
}
