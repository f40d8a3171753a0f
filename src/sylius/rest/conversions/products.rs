//! Product normalization: upstream field names to the storefront shape.

use crate::sylius::rest::types::{SyliusImage, SyliusProduct, SyliusVariant};
use crate::sylius::types::{Image, Money, PriceRange, Product, ProductVariant, Seo};

/// Currency used when the upstream omits one on a price.
const DEFAULT_CURRENCY: &str = "EUR";

pub(crate) fn normalize_product(product: SyliusProduct) -> Product {
    let SyliusProduct {
        id,
        code,
        name,
        slug,
        description,
        images,
        variants,
        updated_at,
    } = product;

    let title = name.unwrap_or_default();
    let handle = slug.or(code).unwrap_or_default();
    let description = description.unwrap_or_default();
    let price_range = price_range(&variants);

    let images: Vec<Image> = images.into_iter().map(normalize_image).collect();
    let variants: Vec<ProductVariant> = variants.into_iter().map(normalize_variant).collect();

    Product {
        id: id.map_or_else(|| handle.clone(), |id| id.to_string()),
        handle,
        title: title.clone(),
        description: description.clone(),
        // The upstream serves a single description body.
        description_html: description.clone(),
        available_for_sale: !variants.is_empty(),
        price_range,
        featured_image: images.first().cloned(),
        images,
        seo: Seo {
            title: Some(title),
            description: (!description.is_empty()).then_some(description),
        },
        tags: Vec::new(),
        updated_at,
        variants,
    }
}

fn normalize_variant(variant: SyliusVariant) -> ProductVariant {
    let id = variant.code.unwrap_or_default();
    ProductVariant {
        title: variant.name.unwrap_or_else(|| id.clone()),
        id,
        available_for_sale: true,
        price: variant.price.map_or_else(
            || money_from_minor_units(0, None),
            |p| money_from_minor_units(p.current, p.currency.as_deref()),
        ),
    }
}

fn normalize_image(image: SyliusImage) -> Image {
    Image {
        url: image.path,
        alt_text: image.code,
    }
}

/// Price range across a product's variants; zero when none carry a price.
fn price_range(variants: &[SyliusVariant]) -> PriceRange {
    let prices: Vec<(i64, Option<&str>)> = variants
        .iter()
        .filter_map(|v| v.price.as_ref())
        .map(|p| (p.current, p.currency.as_deref()))
        .collect();

    let to_money = |entry: Option<&(i64, Option<&str>)>| {
        entry.map_or_else(
            || money_from_minor_units(0, None),
            |(amount, currency)| money_from_minor_units(*amount, *currency),
        )
    };

    PriceRange {
        min_variant_price: to_money(prices.iter().min_by_key(|(amount, _)| *amount)),
        max_variant_price: to_money(prices.iter().max_by_key(|(amount, _)| *amount)),
    }
}

/// Render a minor-unit amount as a normalized `Money`.
pub(crate) fn money_from_minor_units(amount: i64, currency: Option<&str>) -> Money {
    Money {
        amount: format_minor_units(amount),
        currency_code: currency.unwrap_or(DEFAULT_CURRENCY).to_string(),
    }
}

/// Render minor units (cents) as a decimal string: `1000` -> `"10.00"`.
fn format_minor_units(amount: i64) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    let abs = amount.unsigned_abs();
    format!("{sign}{}.{:02}", abs / 100, abs % 100)
}
