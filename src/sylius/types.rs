//! Storefront domain types for the Sylius shop API.
//!
//! These types are the storefront's internal shape, separate from the raw
//! upstream DTOs in the REST layer. Upstream fields that are absent stay
//! absent here (`Option`/empty) - no completeness validation is performed.

use serde::{Deserialize, Serialize};

// =============================================================================
// Money Types
// =============================================================================

/// Monetary amount with currency code.
///
/// The amount is a decimal string rendered from the upstream's minor units
/// (cents), preserving precision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// Decimal amount as string (e.g., "10.00").
    pub amount: String,
    /// ISO 4217 currency code.
    pub currency_code: String,
}

/// Price range for a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    /// Minimum price among all variants.
    pub min_variant_price: Money,
    /// Maximum price among all variants.
    pub max_variant_price: Money,
}

// =============================================================================
// Image / SEO Types
// =============================================================================

/// Product image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    /// Image URL or media path as reported by the upstream.
    pub url: String,
    /// Alt text for accessibility.
    pub alt_text: Option<String>,
}

/// SEO metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Seo {
    /// Page title for search engines.
    pub title: Option<String>,
    /// Meta description.
    pub description: Option<String>,
}

// =============================================================================
// Product Types
// =============================================================================

/// A purchasable variant of a product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductVariant {
    /// Variant code (pass to cart operations).
    pub id: String,
    /// Display name.
    pub title: String,
    /// Whether the variant can be added to a cart.
    pub available_for_sale: bool,
    /// Variant price.
    pub price: Money,
}

/// A normalized storefront product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Stable product identifier.
    pub id: String,
    /// URL slug.
    pub handle: String,
    /// Display name.
    pub title: String,
    /// Plain-text description.
    pub description: String,
    /// HTML description (the upstream serves one body for both).
    pub description_html: String,
    /// Whether any variant can be purchased.
    pub available_for_sale: bool,
    /// Price range across variants.
    pub price_range: PriceRange,
    /// Purchasable variants.
    pub variants: Vec<ProductVariant>,
    /// First image, when the upstream reports any.
    pub featured_image: Option<Image>,
    /// All images.
    pub images: Vec<Image>,
    /// SEO metadata.
    pub seo: Seo,
    /// Tags (the upstream has no equivalent; always empty).
    pub tags: Vec<String>,
    /// Last modification timestamp, verbatim from upstream.
    pub updated_at: Option<String>,
}

// =============================================================================
// Collection Types
// =============================================================================

/// A normalized collection (upstream taxon).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collection {
    /// URL slug.
    pub handle: String,
    /// Display name.
    pub title: String,
    /// Plain-text description.
    pub description: String,
    /// SEO metadata.
    pub seo: Seo,
    /// Storefront route for this collection (e.g., `/search/t-shirts`).
    pub path: String,
    /// Last modification timestamp, when the upstream reports one.
    pub updated_at: Option<String>,
}

// =============================================================================
// Cart Types
// =============================================================================

/// Line item input for cart mutations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItemInput {
    /// Variant code to add.
    pub variant_code: String,
    /// Quantity to add.
    pub quantity: i64,
}

/// Cost breakdown for a cart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartCost {
    /// Item subtotal before taxes and shipping.
    pub subtotal_amount: Money,
    /// Grand total.
    pub total_amount: Money,
    /// Total taxes.
    pub total_tax_amount: Money,
}

/// One line of a cart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartLine {
    /// Upstream order item id (pass to remove/update operations).
    pub id: String,
    /// Quantity on this line.
    pub quantity: i64,
    /// Line total.
    pub cost: Money,
    /// Title of the product on this line, when the upstream embeds it.
    pub product_title: Option<String>,
    /// Handle of the product on this line, when the upstream embeds it.
    pub product_handle: Option<String>,
}

/// A normalized cart (upstream order in the cart state).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cart {
    /// Cart identifier (order token, falling back to the numeric id).
    pub id: String,
    /// Upstream checkout state (e.g., "cart").
    pub checkout_state: Option<String>,
    /// Line items.
    pub lines: Vec<CartLine>,
    /// Sum of line quantities.
    pub total_quantity: i64,
    /// Cost breakdown.
    pub cost: CartCost,
}

// =============================================================================
// Site Types
// =============================================================================

/// A navigation menu entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Display label.
    pub title: String,
    /// Storefront route.
    pub path: String,
}

/// A static content page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    /// URL slug.
    pub handle: String,
    /// Display title.
    pub title: String,
    /// Page body.
    pub body: String,
    /// Short summary.
    pub body_summary: String,
    /// SEO metadata.
    pub seo: Seo,
    /// Creation timestamp.
    pub created_at: Option<String>,
    /// Last modification timestamp.
    pub updated_at: Option<String>,
}
