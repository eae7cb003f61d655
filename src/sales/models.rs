use serde::Serialize;

/// One row of the by-category aggregate: `value` is the summed
/// `price * quantity` for the category.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct CategorySales {
    pub category: String,
    pub value: f64,
}

#[cfg(any(test, not(feature = "postgres")))]
#[derive(Debug, Clone)]
pub struct Sale {
    pub category: String,
    pub price: f64,
    pub quantity: i32,
}
