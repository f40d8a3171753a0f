//! Raw DTOs for the Sylius shop API.
//!
//! Deserialization is tolerant: fields the upstream omits come through as
//! `None`/empty rather than failing the call, matching the trust-the-upstream
//! contract of this adapter.

use serde::Deserialize;

/// A product as served by `/products` and `/products-by-slug/{slug}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SyliusProduct {
    pub id: Option<i64>,
    pub code: Option<String>,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub images: Vec<SyliusImage>,
    pub variants: Vec<SyliusVariant>,
    pub updated_at: Option<String>,
}

/// A product variant embedded in a product payload.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SyliusVariant {
    pub code: Option<String>,
    pub name: Option<String>,
    pub price: Option<SyliusPrice>,
}

/// A price in minor units (cents).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SyliusPrice {
    pub current: i64,
    pub currency: Option<String>,
}

/// A product image reference.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SyliusImage {
    pub code: Option<String>,
    pub path: String,
}

/// A taxon as served by `/taxons` and `/taxons/{code}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SyliusTaxon {
    pub code: Option<String>,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
}

/// An order (cart) as served by `/orders` and `/orders/{cartId}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SyliusOrder {
    pub id: Option<i64>,
    pub token_value: Option<String>,
    pub checkout_state: Option<String>,
    pub currency_code: Option<String>,
    pub items: Vec<SyliusOrderItem>,
    pub totals: Option<SyliusOrderTotals>,
}

/// One line of an order.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SyliusOrderItem {
    pub id: Option<i64>,
    pub quantity: i64,
    pub total: i64,
    pub product: Option<SyliusProduct>,
}

/// Order cost breakdown, all amounts in minor units.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SyliusOrderTotals {
    pub total: i64,
    pub items: i64,
    pub taxes: i64,
}
