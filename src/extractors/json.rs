//! JSON body extractor that reports every decoding problem as 400 in the shared error envelope.
//! The `Content-Type` header is not checked; any body that parses as `T` is accepted.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::StatusCode,
    Json,
};
use serde::de::DeserializeOwned;

/// Like `axum::Json`, but ignores the content type, and malformed JSON or a wrong shape
/// become `AppError::BadRequest("invalid JSON")` instead of 400/422 plain-text rejections.
/// A body over the `DefaultBodyLimit` becomes `AppError::PayloadTooLarge`.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = match Bytes::from_request(req, state).await {
            Ok(bytes) => bytes,
            Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
                return Err(AppError::PayloadTooLarge("request body too large".into()));
            }
            Err(rejection) => {
                tracing::debug!(reason = %rejection.body_text(), "failed to read request body");
                return Err(AppError::BadRequest("invalid JSON".into()));
            }
        };
        match Json::<T>::from_bytes(&bytes) {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(rejection) => {
                tracing::debug!(reason = %rejection.body_text(), "rejected request body");
                Err(AppError::BadRequest("invalid JSON".into()))
            }
        }
    }
}
