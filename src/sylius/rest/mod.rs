//! Sylius shop API client implementation.
//!
//! A thin adapter over the upstream REST endpoints: each operation builds a
//! path, issues one request via `reqwest`, and reshapes the JSON body into
//! the storefront types. No caching, no retries, no shared mutable state.

mod conversions;
pub mod query;
mod types;

use std::sync::Arc;

use reqwest::{Method, StatusCode};
use serde_json::{Value, json};
use tracing::{debug, instrument};

use crate::config::SyliusConfig;
use crate::sylius::types::{Cart, CartItemInput, Collection, MenuItem, Page, Product};
use crate::sylius::{ApiError, SyliusError};

use conversions::{normalize_cart, normalize_collection, normalize_product};
use query::{ProductQuery, ProductSortKey};
use types::{SyliusOrder, SyliusProduct, SyliusTaxon};

/// Locale sent when opening a new cart; the upstream channel is configured
/// for it.
const CART_LOCALE: &str = "fr_FR";

/// Raw result of one upstream round trip: HTTP status plus parsed JSON body.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// HTTP status as returned by the upstream.
    pub status: StatusCode,
    /// Parsed JSON body, verbatim.
    pub body: Value,
}

// =============================================================================
// SyliusClient
// =============================================================================

/// Client for the Sylius shop API.
///
/// Cheaply cloneable handle; the base endpoint is fixed at construction and
/// never mutated, so clones may be used concurrently.
#[derive(Clone)]
pub struct SyliusClient {
    inner: Arc<SyliusClientInner>,
}

struct SyliusClientInner {
    client: reqwest::Client,
    endpoint: String,
}

impl SyliusClient {
    /// Create a new shop API client.
    #[must_use]
    pub fn new(config: &SyliusConfig) -> Self {
        Self {
            inner: Arc::new(SyliusClientInner {
                client: reqwest::Client::new(),
                endpoint: config.endpoint(),
            }),
        }
    }

    /// Issue one request against the upstream API.
    async fn request(
        &self,
        method: Method,
        path: &str,
        payload: Option<&Value>,
    ) -> Result<ApiResponse, SyliusError> {
        let url = format!("{}{path}", self.inner.endpoint);

        let mut request = self
            .inner
            .client
            .request(method, &url)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json");

        if let Some(payload) = payload {
            request = request.json(payload);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        decode_response(status, &text)
    }

    // =========================================================================
    // Product Methods
    // =========================================================================

    /// Get a list of products, optionally filtered by free text and sorted.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn get_products(
        &self,
        query: Option<String>,
        sort_key: Option<ProductSortKey>,
        reverse: bool,
    ) -> Result<Vec<Product>, SyliusError> {
        self.search_products(ProductQuery {
            query,
            collection: None,
            sort_key,
            reverse,
        })
        .await
    }

    /// Get the products of a collection, with the same sort semantics as
    /// [`Self::get_products`].
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self), fields(collection = %collection))]
    pub async fn get_collection_products(
        &self,
        collection: &str,
        sort_key: Option<ProductSortKey>,
        reverse: bool,
    ) -> Result<Vec<Product>, SyliusError> {
        self.search_products(ProductQuery {
            query: None,
            collection: Some(collection.to_string()),
            sort_key,
            reverse,
        })
        .await
    }

    async fn search_products(&self, params: ProductQuery) -> Result<Vec<Product>, SyliusError> {
        let response = self
            .request(Method::GET, &params.search_path(), None)
            .await?;
        let products: Vec<SyliusProduct> = serde_json::from_value(response.body)?;
        Ok(products.into_iter().map(normalize_product).collect())
    }

    /// Get a single product by its slug.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the slug is unknown upstream, or another error
    /// if the API request fails.
    #[instrument(skip(self), fields(slug = %slug))]
    pub async fn get_product(&self, slug: &str) -> Result<Product, SyliusError> {
        let response = self
            .request(Method::GET, &format!("/products-by-slug/{slug}"), None)
            .await
            .map_err(|e| not_found(e, || format!("Product not found: {slug}")))?;
        let product: SyliusProduct = serde_json::from_value(response.body)?;
        Ok(normalize_product(product))
    }

    /// Product recommendations. The upstream has no recommendations
    /// endpoint; always empty, no request is made.
    #[must_use]
    pub fn get_product_recommendations(&self) -> Vec<Product> {
        Vec::new()
    }

    // =========================================================================
    // Collection Methods
    // =========================================================================

    /// Get all collections (upstream taxons).
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn get_collections(&self) -> Result<Vec<Collection>, SyliusError> {
        let response = self.request(Method::GET, "/taxons", None).await?;
        let taxons: Vec<SyliusTaxon> = serde_json::from_value(response.body)?;
        Ok(taxons.into_iter().map(normalize_collection).collect())
    }

    /// Get a single collection by its taxon code.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the code is unknown upstream, or another error
    /// if the API request fails.
    #[instrument(skip(self), fields(code = %code))]
    pub async fn get_collection(&self, code: &str) -> Result<Collection, SyliusError> {
        let response = self
            .request(Method::GET, &format!("/taxons/{code}"), None)
            .await
            .map_err(|e| not_found(e, || format!("Collection not found: {code}")))?;
        let taxon: SyliusTaxon = serde_json::from_value(response.body)?;
        Ok(normalize_collection(taxon))
    }

    // =========================================================================
    // Cart Methods
    // =========================================================================

    /// Open a new cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn create_cart(&self) -> Result<Cart, SyliusError> {
        let payload = json!({ "localeCode": CART_LOCALE });
        let response = self.request(Method::POST, "/orders", Some(&payload)).await?;
        let order: SyliusOrder = serde_json::from_value(response.body)?;
        Ok(normalize_cart(order))
    }

    /// Get an existing cart.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the cart id is unknown upstream, or another
    /// error if the API request fails.
    #[instrument(skip(self), fields(cart_id = %cart_id))]
    pub async fn get_cart(&self, cart_id: &str) -> Result<Cart, SyliusError> {
        let response = self
            .request(Method::GET, &format!("/orders/{cart_id}"), None)
            .await
            .map_err(|e| not_found(e, || format!("Cart not found: {cart_id}")))?;
        let order: SyliusOrder = serde_json::from_value(response.body)?;
        Ok(normalize_cart(order))
    }

    /// Add an item to a cart and return the updated cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or the upstream reports
    /// validation errors (unknown variant, bad quantity, ...).
    #[instrument(skip(self, item), fields(cart_id = %cart_id))]
    pub async fn add_to_cart(
        &self,
        cart_id: &str,
        item: &CartItemInput,
    ) -> Result<Cart, SyliusError> {
        let payload = serde_json::to_value(item)?;
        let response = self
            .request(Method::PUT, &format!("/orders/{cart_id}/items"), Some(&payload))
            .await?;
        let order: SyliusOrder = serde_json::from_value(response.body)?;
        Ok(normalize_cart(order))
    }

    /// Remove an item from a cart and return the updated cart.
    ///
    /// The delete answers 204 with no body, so the cart is re-read after the
    /// mutation.
    ///
    /// # Errors
    ///
    /// Returns an error if either request fails.
    #[instrument(skip(self), fields(cart_id = %cart_id, item_id = %item_id))]
    pub async fn remove_from_cart(
        &self,
        cart_id: &str,
        item_id: &str,
    ) -> Result<Cart, SyliusError> {
        self.request(
            Method::DELETE,
            &format!("/orders/{cart_id}/items/{item_id}"),
            None,
        )
        .await?;
        self.get_cart(cart_id).await
    }

    /// Change the quantity of a cart item and return the updated cart.
    ///
    /// # Errors
    ///
    /// Returns an error if either request fails or the upstream reports
    /// validation errors.
    #[instrument(skip(self), fields(cart_id = %cart_id, item_id = %item_id))]
    pub async fn update_cart(
        &self,
        cart_id: &str,
        item_id: &str,
        quantity: i64,
    ) -> Result<Cart, SyliusError> {
        let payload = json!({ "quantity": quantity });
        self.request(
            Method::PUT,
            &format!("/orders/{cart_id}/items/{item_id}"),
            Some(&payload),
        )
        .await?;
        self.get_cart(cart_id).await
    }

    // =========================================================================
    // Site Methods (static, no upstream source)
    // =========================================================================

    /// Content pages are not served by the upstream API; always empty.
    #[must_use]
    pub fn get_pages(&self) -> Vec<Page> {
        Vec::new()
    }

    /// Content pages are not served by the upstream API; always `None`.
    #[must_use]
    pub fn get_page(&self, _handle: &str) -> Option<Page> {
        None
    }

    /// Static navigation menu; not sourced from upstream.
    #[must_use]
    pub fn get_menu(&self) -> Vec<MenuItem> {
        vec![MenuItem {
            title: "All".to_string(),
            path: "/search".to_string(),
        }]
    }
}

// =============================================================================
// Response Decoding
// =============================================================================

/// Decode one upstream response body.
///
/// The upstream signals business failures with an `errors` array in the
/// body; that envelope wins over the HTTP status (a 200 carrying `errors`
/// is still a failure). An empty body decodes as JSON `null` (cart
/// mutations answer 204 No Content).
fn decode_response(status: StatusCode, text: &str) -> Result<ApiResponse, SyliusError> {
    let body: Value = if text.trim().is_empty() {
        Value::Null
    } else {
        match serde_json::from_str(text) {
            Ok(body) => body,
            Err(e) => {
                tracing::error!(
                    status = %status,
                    body = %text.chars().take(500).collect::<String>(),
                    "failed to parse upstream response"
                );
                return Err(SyliusError::Parse(e));
            }
        }
    };

    if let Some(errors) = body.get("errors").and_then(Value::as_array)
        && !errors.is_empty()
    {
        debug!(errors = ?errors, "upstream reported errors");
        return Err(SyliusError::Api(
            errors.iter().map(ApiError::from_value).collect(),
        ));
    }

    if !status.is_success() {
        return Err(SyliusError::Status(status));
    }

    Ok(ApiResponse { status, body })
}

/// Rewrite a 404-without-envelope into a lookup-specific `NotFound`.
fn not_found(err: SyliusError, message: impl FnOnce() -> String) -> SyliusError {
    match err {
        SyliusError::Status(status) if status == StatusCode::NOT_FOUND => {
            SyliusError::NotFound(message())
        }
        other => other,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn test_client() -> SyliusClient {
        SyliusClient::new(&SyliusConfig {
            store_domain: "https://store.example.com".to_string(),
            api_path: "/shop-api".to_string(),
        })
    }

    // -------------------------------------------------------------------------
    // decode_response
    // -------------------------------------------------------------------------

    #[test]
    fn test_decode_success_preserves_status_and_body() {
        let response = decode_response(StatusCode::OK, r#"{"name":"Red shirt"}"#).unwrap();
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body, json!({"name": "Red shirt"}));
    }

    #[test]
    fn test_decode_errors_envelope_fails_despite_200() {
        let err = decode_response(StatusCode::OK, r#"{"errors":[{"message":"x"}]}"#).unwrap_err();
        match err {
            SyliusError::Api(errors) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].message, "x");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_errors_envelope_on_error_status() {
        let err = decode_response(
            StatusCode::BAD_REQUEST,
            r#"{"errors":[{"message":"Quantity must be positive","propertyPath":"quantity"}]}"#,
        )
        .unwrap_err();
        match err {
            SyliusError::Api(errors) => {
                assert_eq!(errors[0].property_path.as_deref(), Some("quantity"));
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_empty_errors_array_is_success() {
        let response = decode_response(StatusCode::OK, r#"{"errors":[]}"#).unwrap();
        assert_eq!(response.body, json!({"errors": []}));
    }

    #[test]
    fn test_decode_non_json_body_is_parse_error() {
        let err = decode_response(StatusCode::OK, "<html>oops</html>").unwrap_err();
        assert!(matches!(err, SyliusError::Parse(_)));
    }

    #[test]
    fn test_decode_empty_body_is_null() {
        let response = decode_response(StatusCode::NO_CONTENT, "").unwrap();
        assert_eq!(response.status, StatusCode::NO_CONTENT);
        assert_eq!(response.body, Value::Null);
    }

    #[test]
    fn test_decode_error_status_without_envelope() {
        let err = decode_response(StatusCode::NOT_FOUND, r#"{"code":404,"message":"Not Found"}"#)
            .unwrap_err();
        assert!(matches!(err, SyliusError::Status(s) if s == StatusCode::NOT_FOUND));
    }

    #[test]
    fn test_not_found_rewrite() {
        let err = not_found(SyliusError::Status(StatusCode::NOT_FOUND), || {
            "Product not found: red-shirt".to_string()
        });
        assert!(matches!(err, SyliusError::NotFound(_)));
        assert_eq!(err.to_string(), "Not found: Product not found: red-shirt");

        // Other statuses pass through untouched
        let err = not_found(SyliusError::Status(StatusCode::BAD_GATEWAY), || {
            unreachable!()
        });
        assert!(matches!(err, SyliusError::Status(s) if s == StatusCode::BAD_GATEWAY));
    }

    // -------------------------------------------------------------------------
    // Static operations (no network)
    // -------------------------------------------------------------------------

    #[test]
    fn test_recommendations_are_empty() {
        assert!(test_client().get_product_recommendations().is_empty());
    }

    #[test]
    fn test_pages_are_empty() {
        let client = test_client();
        assert!(client.get_pages().is_empty());
        assert!(client.get_page("about").is_none());
    }

    #[test]
    fn test_menu_is_single_static_entry() {
        let menu = test_client().get_menu();
        assert_eq!(
            menu,
            vec![MenuItem {
                title: "All".to_string(),
                path: "/search".to_string(),
            }]
        );
    }
}
