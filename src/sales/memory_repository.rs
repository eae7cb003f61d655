use super::{
    models::{CategorySales, Sale},
    repository::SalesRepository,
};
use crate::errors::ApiError;
use async_trait::async_trait;
use std::{collections::HashMap, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone, Default)]
pub struct InMemorySalesRepository {
    sales: Arc<Mutex<Vec<Sale>>>,
}

impl InMemorySalesRepository {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, sale: Sale) {
        let mut lock = self.sales.lock().await;

        lock.push(sale);
    }
}

#[async_trait]
impl SalesRepository for InMemorySalesRepository {
    async fn totals_by_category(&self) -> Result<Vec<CategorySales>, ApiError> {
        let lock = self.sales.lock().await;

        let mut totals = HashMap::<String, f64>::new();
        for sale in lock.iter() {
            *totals.entry(sale.category.clone()).or_default() += sale.price * sale.quantity as f64;
        }
        drop(lock);

        let mut rows: Vec<CategorySales> = totals
            .into_iter()
            .map(|(category, value)| CategorySales { category, value })
            .collect();

        rows.sort_by(|a, b| b.value.total_cmp(&a.value));

        Ok(rows)
    }

    async fn total_revenue(&self) -> Result<f64, ApiError> {
        let lock = self.sales.lock().await;

        Ok(lock.iter().map(|s| s.price * s.quantity as f64).sum())
    }

    async fn average_order_value(&self) -> Result<f64, ApiError> {
        let lock = self.sales.lock().await;

        if lock.is_empty() {
            return Ok(0.0);
        }

        Ok(lock.iter().map(|s| s.price).sum::<f64>() / lock.len() as f64)
    }

    async fn total_orders(&self) -> Result<i64, ApiError> {
        let lock = self.sales.lock().await;

        Ok(lock.len() as i64)
    }
}
