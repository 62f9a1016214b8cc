//! Raw identifier segment from the request path.

use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

/// Everything after the resource prefix, undecoded into a number. Routes without a captured
/// segment (`/categories/`) and undecodable captures yield an empty string, so the handler's
/// id parsing rejects them like any other malformed id.
#[derive(Clone, Debug)]
pub struct RawId(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for RawId
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let raw = Path::<String>::from_request_parts(parts, state)
            .await
            .map(|Path(segment)| segment)
            .unwrap_or_default();
        Ok(RawId(raw))
    }
}
