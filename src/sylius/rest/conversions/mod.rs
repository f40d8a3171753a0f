//! Conversion functions from raw upstream DTOs to storefront domain types.

mod cart;
mod collections;
mod products;

pub(crate) use cart::normalize_cart;
pub(crate) use collections::normalize_collection;
pub(crate) use products::normalize_product;
