use bigdecimal::BigDecimal;

use super::model::{Cart, compute_total_item_count};

/// What the order summary panel shows next to the cart.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrderSummary {
    pub item_count: u32,
    pub items_price: BigDecimal,
    pub tax_price: BigDecimal,
    pub shipping_price: BigDecimal,
    pub total_price: BigDecimal,
}

impl OrderSummary {
    pub fn from_cart(cart: Option<&Cart>) -> Self {
        match cart {
            Some(cart) => Self {
                item_count: compute_total_item_count(Some(cart)),
                items_price: cart.items_price.clone(),
                tax_price: cart.tax_price.clone(),
                shipping_price: cart.shipping_price.clone(),
                total_price: cart.total_price.clone(),
            },
            None => Self::default(),
        }
    }
}
