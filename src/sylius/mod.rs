//! Sylius shop API client.
//!
//! # Architecture
//!
//! - Thin REST adapter: one upstream request per operation, no local state
//! - Sylius is source of truth - NO local sync, no caching, no retries
//! - Raw upstream DTOs are normalized into the storefront's internal shape
//!
//! # Example
//!
//! ```rust,ignore
//! use sylius_storefront::sylius::SyliusClient;
//!
//! let client = SyliusClient::new(&config);
//!
//! // List products in a collection, cheapest first
//! let products = client
//!     .get_collection_products("t-shirts", Some(ProductSortKey::Price), false)
//!     .await?;
//! ```

mod rest;
pub mod types;

pub use rest::query::{ProductQuery, ProductSortKey};
pub use rest::{ApiResponse, SyliusClient};
pub use types::*;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when interacting with the Sylius shop API.
#[derive(Debug, Error)]
pub enum SyliusError {
    /// HTTP request failed (upstream unreachable, connection dropped, ...).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The response body carried an `errors` envelope, regardless of status.
    #[error("API errors: {}", format_api_errors(.0))]
    Api(Vec<ApiError>),

    /// Non-success HTTP status without an error envelope in the body.
    #[error("HTTP status {0} with no error details")]
    Status(reqwest::StatusCode),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),
}

/// One entry of the upstream `errors` array.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ApiError {
    /// Error message.
    pub message: String,
    /// Path of the offending field, for validation errors.
    pub property_path: Option<String>,
    /// Upstream error code, when one is reported.
    pub code: Option<i64>,
}

impl ApiError {
    /// Decode one entry of the `errors` array. Entries that are not the
    /// expected object shape are kept verbatim as the message.
    pub(crate) fn from_value(value: &serde_json::Value) -> Self {
        serde_json::from_value(value.clone()).unwrap_or_else(|_| Self {
            message: value.to_string(),
            property_path: None,
            code: None,
        })
    }
}

fn format_api_errors(errors: &[ApiError]) -> String {
    if errors.is_empty() {
        return "(no error details provided)".to_string();
    }

    errors
        .iter()
        .enumerate()
        .map(|(i, e)| {
            let mut parts = Vec::new();

            if !e.message.is_empty() {
                parts.push(e.message.clone());
            }

            if let Some(path) = &e.property_path {
                parts.push(format!("at {path}"));
            }

            if parts.is_empty() {
                format!("[error {}]: (no details)", i + 1)
            } else {
                parts.join(" ")
            }
        })
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sylius_error_display() {
        let err = SyliusError::NotFound("product-123".to_string());
        assert_eq!(err.to_string(), "Not found: product-123");
    }

    #[test]
    fn test_status_error_display() {
        let err = SyliusError::Status(reqwest::StatusCode::BAD_GATEWAY);
        assert_eq!(err.to_string(), "HTTP status 502 Bad Gateway with no error details");
    }

    #[test]
    fn test_api_error_formatting() {
        let errors = vec![
            ApiError {
                message: "Quantity must be positive".to_string(),
                property_path: None,
                code: None,
            },
            ApiError {
                message: "Unknown variant".to_string(),
                property_path: Some("items[0].variantCode".to_string()),
                code: None,
            },
        ];
        let err = SyliusError::Api(errors);
        assert_eq!(
            err.to_string(),
            "API errors: Quantity must be positive; Unknown variant at items[0].variantCode"
        );
    }

    #[test]
    fn test_api_error_no_details() {
        let errors = vec![ApiError::default()];
        let err = SyliusError::Api(errors);
        assert_eq!(err.to_string(), "API errors: [error 1]: (no details)");
    }

    #[test]
    fn test_api_error_empty_vec() {
        let err = SyliusError::Api(vec![]);
        assert_eq!(err.to_string(), "API errors: (no error details provided)");
    }

    #[test]
    fn test_api_error_from_object_value() {
        let value = serde_json::json!({
            "message": "Not enough stock",
            "propertyPath": "quantity",
            "code": 4002
        });
        let err = ApiError::from_value(&value);
        assert_eq!(err.message, "Not enough stock");
        assert_eq!(err.property_path.as_deref(), Some("quantity"));
        assert_eq!(err.code, Some(4002));
    }

    #[test]
    fn test_api_error_from_bare_string_value() {
        let value = serde_json::json!("boom");
        let err = ApiError::from_value(&value);
        assert_eq!(err.message, "\"boom\"");
        assert!(err.property_path.is_none());
    }
}
