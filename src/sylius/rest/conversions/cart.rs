//! Cart (order) normalization.

use super::products::money_from_minor_units;
use crate::sylius::rest::types::{SyliusOrder, SyliusOrderItem};
use crate::sylius::types::{Cart, CartCost, CartLine};

pub(crate) fn normalize_cart(order: SyliusOrder) -> Cart {
    let SyliusOrder {
        id,
        token_value,
        checkout_state,
        currency_code,
        items,
        totals,
    } = order;

    let currency = currency_code.as_deref();
    let lines: Vec<CartLine> = items
        .into_iter()
        .map(|item| normalize_cart_line(item, currency))
        .collect();
    let total_quantity = lines.iter().map(|line| line.quantity).sum();
    let totals = totals.unwrap_or_default();

    Cart {
        id: token_value
            .or_else(|| id.map(|id| id.to_string()))
            .unwrap_or_default(),
        checkout_state,
        cost: CartCost {
            subtotal_amount: money_from_minor_units(totals.items, currency),
            total_amount: money_from_minor_units(totals.total, currency),
            total_tax_amount: money_from_minor_units(totals.taxes, currency),
        },
        total_quantity,
        lines,
    }
}

fn normalize_cart_line(item: SyliusOrderItem, currency: Option<&str>) -> CartLine {
    let (product_title, product_handle) = item
        .product
        .map_or((None, None), |product| (product.name, product.slug));

    CartLine {
        id: item.id.map_or_else(String::new, |id| id.to_string()),
        quantity: item.quantity,
        cost: money_from_minor_units(item.total, currency),
        product_title,
        product_handle,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fixture() -> SyliusOrder {
        serde_json::from_value(json!({
            "id": 7,
            "tokenValue": "tok_123",
            "checkoutState": "cart",
            "currencyCode": "EUR",
            "items": [
                {"id": 11, "quantity": 2, "total": 2000,
                 "product": {"name": "Red shirt", "slug": "red-shirt"}},
                {"id": 12, "quantity": 1, "total": 500}
            ],
            "totals": {"total": 2900, "items": 2500, "taxes": 400, "shipping": 0, "promotion": 0}
        }))
        .unwrap()
    }

    #[test]
    fn test_normalize_cart_identity_prefers_token() {
        let cart = normalize_cart(fixture());
        assert_eq!(cart.id, "tok_123");
        assert_eq!(cart.checkout_state.as_deref(), Some("cart"));
    }

    #[test]
    fn test_normalize_cart_falls_back_to_numeric_id() {
        let order: SyliusOrder = serde_json::from_value(json!({"id": 7})).unwrap();
        let cart = normalize_cart(order);
        assert_eq!(cart.id, "7");
    }

    #[test]
    fn test_normalize_cart_lines() {
        let cart = normalize_cart(fixture());
        assert_eq!(cart.lines.len(), 2);
        assert_eq!(cart.total_quantity, 3);

        assert_eq!(cart.lines[0].id, "11");
        assert_eq!(cart.lines[0].cost.amount, "20.00");
        assert_eq!(cart.lines[0].product_title.as_deref(), Some("Red shirt"));
        assert_eq!(cart.lines[0].product_handle.as_deref(), Some("red-shirt"));

        // Line without an embedded product stays usable
        assert!(cart.lines[1].product_title.is_none());
    }

    #[test]
    fn test_normalize_cart_cost() {
        let cart = normalize_cart(fixture());
        assert_eq!(cart.cost.subtotal_amount.amount, "25.00");
        assert_eq!(cart.cost.total_amount.amount, "29.00");
        assert_eq!(cart.cost.total_tax_amount.amount, "4.00");
        assert_eq!(cart.cost.total_amount.currency_code, "EUR");
    }

    #[test]
    fn test_normalize_empty_order() {
        let cart = normalize_cart(SyliusOrder::default());
        assert!(cart.id.is_empty());
        assert!(cart.lines.is_empty());
        assert_eq!(cart.total_quantity, 0);
        assert_eq!(cart.cost.total_amount.amount, "0.00");
    }
}
