//! Custom Axum extractors

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::models::ValidationError;

/// Query-string extractor that rejects with a JSON [`ApiError`] instead of
/// axum's plain-text rejection.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidQuery<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                ApiError::Validation(ValidationError::InvalidQuery {
                    reason: rejection.body_text(),
                })
            })?;

        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    use crate::models::UserEmailUpdate;

    async fn extract(uri: &str) -> Result<ValidQuery<UserEmailUpdate>, ApiError> {
        let (mut parts, _) = Request::builder().uri(uri).body(()).unwrap().into_parts();
        ValidQuery::<UserEmailUpdate>::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn parses_typed_parameters() {
        let ValidQuery(update) = extract("/update-user-email?user_id=3&new_email=c%40x.com")
            .await
            .unwrap();
        assert_eq!(update.user_id, 3);
        assert_eq!(update.new_email, "c@x.com");
    }

    #[tokio::test]
    async fn missing_parameter_is_validation_error() {
        let err = extract("/update-user-email?user_id=3").await.unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[tokio::test]
    async fn wrong_type_is_validation_error() {
        let err = extract("/update-user-email?user_id=three&new_email=x")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }
}
