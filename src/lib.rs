//! Sylius storefront client.
//!
//! A thin client for the Sylius shop API: products, collections (taxons),
//! carts, and static site content, normalized into the storefront's internal
//! shape. Each operation is one request against the upstream REST API plus a
//! reshape of the JSON body.
//!
//! # Example
//!
//! ```rust,ignore
//! use sylius_storefront::config::SyliusConfig;
//! use sylius_storefront::sylius::SyliusClient;
//!
//! let config = SyliusConfig::from_env()?;
//! let client = SyliusClient::new(&config);
//!
//! // Get a product
//! let product = client.get_product("red-shirt").await?;
//!
//! // Open a cart and add an item
//! let cart = client.create_cart().await?;
//! let cart = client
//!     .add_to_cart(&cart.id, &CartItemInput {
//!         variant_code: product.variants[0].id.clone(),
//!         quantity: 1,
//!     })
//!     .await?;
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod sylius;
