use super::{
    models::{User, UserWriteRequest},
    repository::UserRepository,
};
use crate::{errors::ApiError, http::ApiResponse};
use serde::{Deserialize, Serialize};

/// Raw query strings: an unparseable or zero value falls back to the default
/// instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListUsersQueryParams {
    pub page: Option<String>,
    pub limit: Option<String>,
}

fn window_param(raw: Option<String>, default: i64) -> i64 {
    raw.and_then(|v| v.parse::<i64>().ok())
        .filter(|&v| v != 0)
        .unwrap_or(default)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPageResponse {
    pub current_page: i64,
    pub total_pages: i64,
    pub total_users: i64,
    pub emp_data: Vec<User>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecordResponse {
    pub emp_data: User,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationResponse {
    pub message: String,
    pub affected_rows: u64,
}

pub struct UserHandlers<U: UserRepository> {
    repo: U,
}

impl<U: UserRepository> UserHandlers<U> {
    #[inline]
    pub fn new(repo: U) -> Self {
        Self { repo }
    }

    pub async fn handle_list(
        &self,
        query: ListUsersQueryParams,
    ) -> Result<ApiResponse<UserPageResponse>, ApiError> {
        let page = window_param(query.page, 1);
        let limit = window_param(query.limit, 10);
        let offset = (page - 1) * limit;

        let total_users = self.repo.count().await?;
        let users = self.repo.list(offset, limit).await?;

        let total_pages = (total_users as f64 / limit as f64).ceil() as i64;

        Ok(ApiResponse::ok(UserPageResponse {
            current_page: page,
            total_pages,
            total_users,
            emp_data: users,
        }))
    }

    pub async fn handle_get(&self, id: &str) -> Result<ApiResponse<UserRecordResponse>, ApiError> {
        let id: i32 = id.parse().map_err(|_| ApiError::InvalidId)?;

        match self.repo.get_by_id(id).await? {
            Some(user) => Ok(ApiResponse::ok(UserRecordResponse { emp_data: user })),
            None => Err(ApiError::UserNotFound),
        }
    }

    pub async fn handle_create(
        &self,
        body: UserWriteRequest,
    ) -> Result<ApiResponse<MutationResponse>, ApiError> {
        let data = body.validated()?;

        let affected_rows = self.repo.create(data).await?;

        Ok(ApiResponse::created(MutationResponse {
            message: "User added successfully".to_owned(),
            affected_rows,
        }))
    }

    pub async fn handle_update(
        &self,
        id: &str,
        body: UserWriteRequest,
    ) -> Result<ApiResponse<MutationResponse>, ApiError> {
        let data = body.validated()?;
        let id: i32 = id.parse().map_err(|_| ApiError::InvalidId)?;

        let affected_rows = self.repo.update(id, data).await?;

        // Message text kept wire-compatible with the previous API, which
        // reported updates with the same string.
        Ok(ApiResponse::created(MutationResponse {
            message: "User added successfully".to_owned(),
            affected_rows,
        }))
    }

    pub async fn handle_delete(&self, id: &str) -> Result<ApiResponse<MutationResponse>, ApiError> {
        let id: i32 = id.parse().map_err(|_| ApiError::InvalidId)?;

        let affected_rows = self.repo.delete(id).await?;

        Ok(ApiResponse::created(MutationResponse {
            message: "User deleted successfully".to_owned(),
            affected_rows,
        }))
    }
}

#[cfg(test)]
mod test {
    use super::{window_param, ListUsersQueryParams, UserHandlers};
    use crate::{
        errors::ApiError,
        user::{memory_repository::InMemoryUserRepository, models::UserWriteRequest},
    };
    use axum::http::StatusCode;

    fn handlers() -> UserHandlers<InMemoryUserRepository> {
        UserHandlers::new(InMemoryUserRepository::new())
    }

    fn body(name: &str) -> UserWriteRequest {
        UserWriteRequest {
            name: Some(name.to_owned()),
            email: Some(format!("{name}@corp.io")),
            role: Some("viewer".to_owned()),
            status: Some("active".to_owned()),
        }
    }

    fn query(page: Option<&str>, limit: Option<&str>) -> ListUsersQueryParams {
        ListUsersQueryParams {
            page: page.map(str::to_owned),
            limit: limit.map(str::to_owned),
        }
    }

    #[test]
    fn window_param_falls_back_on_garbage_and_zero() {
        assert_eq!(window_param(None, 10), 10);
        assert_eq!(window_param(Some("abc".to_owned()), 10), 10);
        assert_eq!(window_param(Some("0".to_owned()), 1), 1);
        assert_eq!(window_param(Some("3".to_owned()), 1), 3);
    }

    #[tokio::test]
    async fn pagination_window_and_totals() {
        let h = handlers();
        for i in 0..25 {
            h.handle_create(body(&format!("user{i}"))).await.unwrap();
        }

        let res = h.handle_list(query(Some("2"), Some("10"))).await.unwrap();
        assert_eq!(res.http_code, StatusCode::OK);
        assert_eq!(res.payload.current_page, 2);
        assert_eq!(res.payload.total_users, 25);
        assert_eq!(res.payload.total_pages, 3);
        assert_eq!(res.payload.emp_data.len(), 10);
        assert_eq!(res.payload.emp_data[0].id, 11);

        let last = h.handle_list(query(Some("3"), Some("10"))).await.unwrap();
        assert_eq!(last.payload.emp_data.len(), 5);
    }

    #[tokio::test]
    async fn pagination_defaults() {
        let h = handlers();
        for i in 0..12 {
            h.handle_create(body(&format!("user{i}"))).await.unwrap();
        }

        let res = h.handle_list(query(None, None)).await.unwrap();
        assert_eq!(res.payload.current_page, 1);
        assert_eq!(res.payload.total_pages, 2);
        assert_eq!(res.payload.emp_data.len(), 10);
        assert_eq!(res.payload.emp_data[0].id, 1);
    }

    #[tokio::test]
    async fn list_is_ordered_by_id_ascending() {
        let h = handlers();
        for i in 0..5 {
            h.handle_create(body(&format!("user{i}"))).await.unwrap();
        }

        let res = h.handle_list(query(None, None)).await.unwrap();
        let ids: Vec<i32> = res.payload.emp_data.iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[tokio::test]
    async fn get_rejects_non_numeric_id() {
        let h = handlers();

        let res = h.handle_get("abc").await;
        assert!(matches!(res, Err(ApiError::InvalidId)));
    }

    #[tokio::test]
    async fn get_unknown_id_is_not_found() {
        let h = handlers();

        let res = h.handle_get("42").await;
        assert!(matches!(res, Err(ApiError::UserNotFound)));
    }

    #[tokio::test]
    async fn create_rejects_missing_status() {
        let h = handlers();

        let mut b = body("jane");
        b.status = None;

        let res = h.handle_create(b).await;
        assert!(matches!(res, Err(ApiError::MissingFields)));

        let list = h.handle_list(query(None, None)).await.unwrap();
        assert_eq!(list.payload.total_users, 0);
    }

    #[tokio::test]
    async fn create_then_get_round_trips() {
        let h = handlers();

        let created = h.handle_create(body("jane")).await.unwrap();
        assert_eq!(created.http_code, StatusCode::CREATED);
        assert_eq!(created.payload.affected_rows, 1);
        assert_eq!(created.payload.message, "User added successfully");

        let fetched = h.handle_get("1").await.unwrap();
        assert_eq!(fetched.payload.emp_data.name, "jane");
        assert_eq!(fetched.payload.emp_data.email, "jane@corp.io");
        assert_eq!(fetched.payload.emp_data.role, "viewer");
        assert_eq!(fetched.payload.emp_data.status, "active");
    }

    #[tokio::test]
    async fn update_missing_id_reports_zero_affected() {
        let h = handlers();

        let res = h.handle_update("99", body("ghost")).await.unwrap();
        assert_eq!(res.http_code, StatusCode::CREATED);
        assert_eq!(res.payload.affected_rows, 0);
    }

    #[tokio::test]
    async fn update_replaces_every_field() {
        let h = handlers();
        h.handle_create(body("jane")).await.unwrap();

        let mut b = body("joan");
        b.role = Some("admin".to_owned());

        let res = h.handle_update("1", b).await.unwrap();
        assert_eq!(res.payload.affected_rows, 1);

        let fetched = h.handle_get("1").await.unwrap();
        assert_eq!(fetched.payload.emp_data.name, "joan");
        assert_eq!(fetched.payload.emp_data.role, "admin");
    }

    #[tokio::test]
    async fn double_delete_reports_one_then_zero() {
        let h = handlers();
        h.handle_create(body("jane")).await.unwrap();

        let first = h.handle_delete("1").await.unwrap();
        assert_eq!(first.http_code, StatusCode::CREATED);
        assert_eq!(first.payload.affected_rows, 1);
        assert_eq!(first.payload.message, "User deleted successfully");

        let second = h.handle_delete("1").await.unwrap();
        assert_eq!(second.http_code, StatusCode::CREATED);
        assert_eq!(second.payload.affected_rows, 0);
    }

    #[tokio::test]
    async fn delete_rejects_non_numeric_id() {
        let h = handlers();

        let res = h.handle_delete("1; DROP TABLE users").await;
        assert!(matches!(res, Err(ApiError::InvalidId)));
    }
}
