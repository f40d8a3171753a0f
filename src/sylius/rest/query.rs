//! Product search query construction.
//!
//! One parameterized builder backs both free-text product search and
//! collection-filtered listings, so the sort mapping cannot drift between
//! the two call sites.

use url::form_urlencoded;

/// Sort keys accepted by the product listing operations.
///
/// The upstream only implements creation-date and price ordering;
/// `Relevance` and `BestSelling` are accepted but produce no query
/// modification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductSortKey {
    Relevance,
    BestSelling,
    CreatedAt,
    Price,
}

/// Parameters for a `/products` listing request.
#[derive(Debug, Clone, Default)]
pub struct ProductQuery {
    /// Free-text filter on translated product names.
    pub query: Option<String>,
    /// Taxon code filter.
    pub collection: Option<String>,
    /// Requested ordering.
    pub sort_key: Option<ProductSortKey>,
    /// Descending order when true, ascending otherwise.
    pub reverse: bool,
}

impl ProductQuery {
    /// Render the `/products` request path with its query string.
    pub(crate) fn search_path(&self) -> String {
        let mut params = form_urlencoded::Serializer::new(String::new());

        if let Some(query) = &self.query {
            params.append_pair("translations.name", query);
        }
        if let Some(collection) = &self.collection {
            params.append_pair("productTaxons.taxon.code", collection);
        }

        let direction = if self.reverse { "desc" } else { "asc" };
        match self.sort_key {
            Some(ProductSortKey::CreatedAt) => {
                params.append_pair("order[createdAt]", direction);
            }
            Some(ProductSortKey::Price) => {
                params.append_pair("order[price]", direction);
            }
            // Upstream has no relevance or sales-based ordering.
            Some(ProductSortKey::Relevance | ProductSortKey::BestSelling) | None => {}
        }

        let search = params.finish();
        if search.is_empty() {
            "/products".to_string()
        } else {
            format!("/products?{search}")
        }
    }
}
