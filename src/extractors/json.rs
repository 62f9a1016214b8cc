//! Request body decoding that reports failures as `AppError::MalformedPayload`.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// JSON body extractor. The `Content-Type` header is not checked; any body that fails to
/// decode into `T` (empty, malformed, wrong shape) is rejected with 400. A bare `null`
/// body decodes like `{}`.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::MalformedPayload(e.body_text()))?;
        let value: Value = serde_json::from_slice(&bytes).map_err(|e| AppError::MalformedPayload(e.to_string()))?;
        let value = match value {
            Value::Null => Value::Object(Map::new()),
            other => other,
        };
        let decoded = serde_json::from_value::<T>(value).map_err(|e| AppError::MalformedPayload(e.to_string()))?;
        Ok(JsonBody(decoded))
    }
}
