//! Custom Axum extractors

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// JSON body extractor that rejects with `ApiError::InvalidJson`.
///
/// Unlike `axum::Json` it does not require a `Content-Type` header, and
/// every failure (unreadable body, syntax, wrong shape) is a plain 400.
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|_| ApiError::InvalidJson)?;

        serde_json::from_slice(&bytes)
            .map(Self)
            .map_err(|e| {
                tracing::debug!("rejecting request body: {}", e);
                ApiError::InvalidJson
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Named {
        name: String,
    }

    fn request(body: &'static str) -> Request {
        Request::builder()
            .method("POST")
            .uri("/")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn parses_without_content_type() {
        let JsonBody(named) = JsonBody::<Named>::from_request(request(r#"{"name":"Ada"}"#), &())
            .await
            .unwrap();
        assert_eq!(named.name, "Ada");
    }

    #[tokio::test]
    async fn malformed_body_is_invalid_json() {
        let result = JsonBody::<Named>::from_request(request("{name:"), &()).await;
        assert!(matches!(result, Err(ApiError::InvalidJson)));
    }

    #[tokio::test]
    async fn wrong_type_is_invalid_json() {
        let result = JsonBody::<Named>::from_request(request(r#"{"name":5}"#), &()).await;
        assert!(matches!(result, Err(ApiError::InvalidJson)));
    }
}
