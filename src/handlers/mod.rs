//! HTTP handlers for the category and product resources.

pub mod category;
pub mod product;

use crate::error::AppError;
use std::str::FromStr;

/// Parse the path-encoded identifier. `resource` names the resource in the error message.
pub(crate) fn parse_id<T: FromStr>(raw: &str, resource: &'static str) -> Result<T, AppError> {
    raw.parse().map_err(|_| AppError::MalformedIdentifier(resource))
}
