use crate::{
    errors::ApiError,
    http::{ApiResponse, AppData, Json},
    sales::{
        handlers::{SalesByCategoryResponse, SalesHandlers, SalesStatsResponse},
        repository::SalesRepository,
    },
    user::{
        handlers::{
            ListUsersQueryParams, MutationResponse, UserHandlers, UserPageResponse,
            UserRecordResponse,
        },
        models::UserWriteRequest,
        repository::UserRepository,
    },
};
use axum::extract::{Path, Query};

pub async fn get_users<U>(
    AppData(data): AppData<UserHandlers<U>>,
    Query(query): Query<ListUsersQueryParams>,
) -> Result<ApiResponse<UserPageResponse>, ApiError>
where
    U: UserRepository + 'static,
{
    data.handle_list(query).await
}

pub async fn get_user_id<U>(
    AppData(data): AppData<UserHandlers<U>>,
    Path(id): Path<String>,
) -> Result<ApiResponse<UserRecordResponse>, ApiError>
where
    U: UserRepository + 'static,
{
    data.handle_get(&id).await
}

pub async fn post_user<U>(
    AppData(data): AppData<UserHandlers<U>>,
    Json(body): Json<UserWriteRequest>,
) -> Result<ApiResponse<MutationResponse>, ApiError>
where
    U: UserRepository + 'static,
{
    data.handle_create(body).await
}

pub async fn put_user_id<U>(
    AppData(data): AppData<UserHandlers<U>>,
    Path(id): Path<String>,
    Json(body): Json<UserWriteRequest>,
) -> Result<ApiResponse<MutationResponse>, ApiError>
where
    U: UserRepository + 'static,
{
    data.handle_update(&id, body).await
}

pub async fn delete_user_id<U>(
    AppData(data): AppData<UserHandlers<U>>,
    Path(id): Path<String>,
) -> Result<ApiResponse<MutationResponse>, ApiError>
where
    U: UserRepository + 'static,
{
    data.handle_delete(&id).await
}

pub async fn get_sales_by_category<S>(
    AppData(data): AppData<SalesHandlers<S>>,
) -> Result<ApiResponse<SalesByCategoryResponse>, ApiError>
where
    S: SalesRepository + 'static,
{
    data.handle_by_category().await
}

pub async fn get_sales_stats<S>(
    AppData(data): AppData<SalesHandlers<S>>,
) -> Result<ApiResponse<SalesStatsResponse>, ApiError>
where
    S: SalesRepository + 'static,
{
    data.handle_stats().await
}
