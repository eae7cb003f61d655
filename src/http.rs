use crate::{
    errors::{ApiError, ErrorResponse},
    ENCODING_FAILED_BODY,
};
use async_trait::async_trait;
use axum::{
    extract::{rejection::JsonRejection, FromRequest, FromRequestParts, Request},
    http::{header, request::Parts, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Extension,
};
use serde::Serialize;
use std::{any::type_name, sync::Arc};

/// Request-extension wrapper used to inject the handler structs built at
/// startup into the route functions.
#[derive(Debug, Clone, Default)]
pub struct AppData<T>(pub Arc<T>);

impl<T> AppData<T> {
    #[inline]
    pub fn new(data: Arc<T>) -> Self {
        Self(data)
    }

    #[inline]
    pub fn extension(data: T) -> Extension<Arc<T>> {
        Extension(Arc::new(data))
    }
}

#[async_trait]
impl<T: Sync + Send + 'static, S: Sync + Send> FromRequestParts<S> for AppData<T> {
    type Rejection = ErrorResponse;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let data = parts.extensions.get::<Arc<T>>().ok_or_else(|| {
            let t_name = type_name::<T>();

            tracing::error!(type_name = t_name, "Failed to get AppData request extension");

            ErrorResponse::from(ApiError::ServicePanicked(Some(format!(
                "Failed to get '{t_name}' request extension"
            ))))
        })?;

        Ok(Self::new(data.clone()))
    }
}

/// Success envelope: `{"success": true, ...payload}` with an explicit status
/// code (some write routes answer 201).
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(flatten)]
    pub payload: T,
    #[serde(skip_serializing)]
    pub http_code: StatusCode,
}

impl<T: Serialize> ApiResponse<T> {
    #[inline]
    pub fn ok(payload: T) -> Self {
        Self {
            success: true,
            payload,
            http_code: StatusCode::OK,
        }
    }

    #[inline]
    pub fn created(payload: T) -> Self {
        Self {
            success: true,
            payload,
            http_code: StatusCode::CREATED,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let tuple = match serde_json::to_vec(&self) {
            Ok(buf) => (
                self.http_code,
                [(
                    header::CONTENT_TYPE,
                    HeaderValue::from_static(mime::APPLICATION_JSON.as_ref()),
                )],
                buf,
            ),
            Err(e) => {
                tracing::error!(error = e.to_string(), "Failed to encode response body");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    [(
                        header::CONTENT_TYPE,
                        HeaderValue::from_static(mime::APPLICATION_JSON.as_ref()),
                    )],
                    ENCODING_FAILED_BODY.to_vec(),
                )
            }
        };

        tuple.into_response()
    }
}

/// `axum::Json` with the rejection mapped into the error envelope.
pub struct Json<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for Json<T>
where
    axum::Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ErrorResponse;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(v)) => Ok(Self(v)),
            Err(e) => Err(ErrorResponse {
                status_code: e.status(),
                message: e.body_text(),
                error: None,
            }),
        }
    }
}
