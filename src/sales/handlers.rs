use super::{models::CategorySales, repository::SalesRepository};
use crate::{errors::ApiError, http::ApiResponse};
use serde::Serialize;

/// No historical data exists to compare against, so growth is reported as a
/// flat zero.
pub const SALES_GROWTH_RATE: f64 = 0.0;

#[derive(Debug, Serialize)]
pub struct SalesByCategoryResponse {
    pub data: Vec<CategorySales>,
}

#[derive(Debug, Serialize)]
pub struct SalesStatsResponse {
    pub data: SalesStats,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesStats {
    pub total_revenue: String,
    pub average_order_value: String,
    pub conversion_rate: String,
    pub sales_growth: String,
}

pub struct SalesHandlers<S: SalesRepository> {
    repo: S,
    assumed_visits: f64,
}

impl<S: SalesRepository> SalesHandlers<S> {
    #[inline]
    pub fn new(repo: S, assumed_visits: f64) -> Self {
        Self {
            repo,
            assumed_visits,
        }
    }

    pub async fn handle_by_category(
        &self,
    ) -> Result<ApiResponse<SalesByCategoryResponse>, ApiError> {
        let data = self.repo.totals_by_category().await?;

        Ok(ApiResponse::ok(SalesByCategoryResponse { data }))
    }

    pub async fn handle_stats(&self) -> Result<ApiResponse<SalesStatsResponse>, ApiError> {
        let total_revenue = self.repo.total_revenue().await?;
        let average_order_value = self.repo.average_order_value().await?;
        let total_orders = self.repo.total_orders().await?;

        let conversion_rate = (total_orders as f64 / self.assumed_visits) * 100.0;

        Ok(ApiResponse::ok(SalesStatsResponse {
            data: SalesStats {
                total_revenue: format!("${total_revenue:.2}"),
                average_order_value: format!("${average_order_value:.2}"),
                conversion_rate: format!("{conversion_rate:.2}%"),
                sales_growth: format!("{SALES_GROWTH_RATE:.2}%"),
            },
        }))
    }
}

#[cfg(test)]
mod test {
    use super::SalesHandlers;
    use crate::sales::{memory_repository::InMemorySalesRepository, models::Sale};
    use axum::http::StatusCode;

    fn sale(category: &str, price: f64, quantity: i32) -> Sale {
        Sale {
            category: category.to_owned(),
            price,
            quantity,
        }
    }

    async fn handlers(sales: Vec<Sale>) -> SalesHandlers<InMemorySalesRepository> {
        let repo = InMemorySalesRepository::new();
        for s in sales {
            repo.insert(s).await;
        }

        SalesHandlers::new(repo, 1000.0)
    }

    #[tokio::test]
    async fn stats_over_two_sales() {
        let h = handlers(vec![sale("gadgets", 10.0, 2), sale("widgets", 20.0, 1)]).await;

        let res = h.handle_stats().await.unwrap();
        assert_eq!(res.http_code, StatusCode::OK);
        assert_eq!(res.payload.data.total_revenue, "$40.00");
        assert_eq!(res.payload.data.average_order_value, "$15.00");
        assert_eq!(res.payload.data.conversion_rate, "0.20%");
        assert_eq!(res.payload.data.sales_growth, "0.00%");
    }

    #[tokio::test]
    async fn stats_over_empty_table() {
        let h = handlers(vec![]).await;

        let res = h.handle_stats().await.unwrap();
        assert_eq!(res.payload.data.total_revenue, "$0.00");
        assert_eq!(res.payload.data.average_order_value, "$0.00");
        assert_eq!(res.payload.data.conversion_rate, "0.00%");
    }

    #[tokio::test]
    async fn by_category_sorts_descending_by_total() {
        let h = handlers(vec![
            sale("books", 5.0, 1),
            sale("gadgets", 10.0, 3),
            sale("widgets", 20.0, 1),
            sale("books", 5.0, 2),
        ])
        .await;

        let res = h.handle_by_category().await.unwrap();
        assert_eq!(res.http_code, StatusCode::OK);

        let data = res.payload.data;
        assert_eq!(data.len(), 3);
        assert_eq!(data[0].category, "gadgets");
        assert_eq!(data[0].value, 30.0);
        assert_eq!(data[1].category, "widgets");
        assert_eq!(data[1].value, 20.0);
        assert_eq!(data[2].category, "books");
        assert_eq!(data[2].value, 15.0);

        assert!(data.windows(2).all(|w| w[0].value >= w[1].value));
    }
}
