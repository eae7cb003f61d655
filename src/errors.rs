use crate::ENCODING_FAILED_BODY;
use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid id")]
    InvalidId,
    #[error("All fields (name, email, role, status) are required")]
    MissingFields,
    #[error("User details not found!")]
    UserNotFound,
    /// Read-side database failure. The raw driver message is carried in the
    /// `error` field of the response envelope.
    #[error("Server error, try again")]
    QueryFailed(String),
    /// Write-side database failure. The raw driver message replaces the
    /// envelope `message`, with no separate `error` field.
    #[error("{0}")]
    WriteFailed(String),
    #[error("Server service panicked: {0:?}")]
    ServicePanicked(Option<String>),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidId | ApiError::MissingFields => StatusCode::BAD_REQUEST,
            ApiError::UserNotFound => StatusCode::NOT_FOUND,
            ApiError::QueryFailed(_) | ApiError::WriteFailed(_) | ApiError::ServicePanicked(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_detail(&self) -> Option<String> {
        match self {
            ApiError::QueryFailed(e) => Some(e.clone()),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct ErrorResponse {
    pub status_code: StatusCode,
    pub message: String,
    pub error: Option<String>,
}

impl From<ApiError> for ErrorResponse {
    fn from(value: ApiError) -> Self {
        Self {
            status_code: value.status_code(),
            error: value.error_detail(),
            message: value.to_string(),
        }
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            success: false,
            message: self.message,
            error: self.error,
        };

        let tuple = match serde_json::to_vec(&body) {
            Ok(buf) => (
                self.status_code,
                [(
                    header::CONTENT_TYPE,
                    HeaderValue::from_static(mime::APPLICATION_JSON.as_ref()),
                )],
                buf,
            ),
            Err(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                [(
                    header::CONTENT_TYPE,
                    HeaderValue::from_static(mime::APPLICATION_JSON.as_ref()),
                )],
                ENCODING_FAILED_BODY.to_vec(),
            ),
        };

        tuple.into_response()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        ErrorResponse::from(self).into_response()
    }
}
