use crate::errors::ApiError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: String,
}

/// Raw create/update body. Every field is optional at the serde level so that
/// a missing or empty field answers 400 instead of a deserialization error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserWriteRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone)]
pub struct UserWriteData {
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: String,
}

impl UserWriteRequest {
    pub fn validated(self) -> Result<UserWriteData, ApiError> {
        fn required(value: Option<String>) -> Result<String, ApiError> {
            match value {
                Some(v) if !v.is_empty() => Ok(v),
                _ => Err(ApiError::MissingFields),
            }
        }

        Ok(UserWriteData {
            name: required(self.name)?,
            email: required(self.email)?,
            role: required(self.role)?,
            status: required(self.status)?,
        })
    }
}

#[cfg(test)]
mod test {
    use super::UserWriteRequest;
    use crate::errors::ApiError;

    fn full() -> UserWriteRequest {
        UserWriteRequest {
            name: Some("Jane".to_owned()),
            email: Some("jane@corp.io".to_owned()),
            role: Some("admin".to_owned()),
            status: Some("active".to_owned()),
        }
    }

    #[test]
    fn accepts_complete_body() {
        let data = full().validated().unwrap();
        assert_eq!(data.name, "Jane");
        assert_eq!(data.status, "active");
    }

    #[test]
    fn rejects_missing_field() {
        let mut body = full();
        body.status = None;

        assert!(matches!(body.validated(), Err(ApiError::MissingFields)));
    }

    #[test]
    fn rejects_empty_field() {
        let mut body = full();
        body.email = Some(String::new());

        assert!(matches!(body.validated(), Err(ApiError::MissingFields)));
    }
}
