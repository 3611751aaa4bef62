use bigdecimal::BigDecimal;
use num_traits::Signed;
use serde::{Deserialize, Serialize};

use super::errors::CartError;
use super::pricing::PricingPolicy;
use crate::domain::product::model::Product;
use crate::domain::shared::value_objects::ProductId;

/// One product line of a cart. `quantity` is always at least 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product_id: ProductId,
    pub slug: String,
    pub name: String,
    pub image: String,
    pub price: BigDecimal,
    pub quantity: u32,
}

pub struct NewCartItemProps {
    pub product_id: ProductId,
    pub slug: String,
    pub name: String,
    pub image: String,
    pub price: BigDecimal,
    pub quantity: u32,
}

impl CartItem {
    pub fn new(props: NewCartItemProps) -> Result<Self, CartError> {
        if props.quantity == 0 {
            return Err(CartError::InvalidQuantity);
        }
        if props.name.trim().is_empty() {
            return Err(CartError::NameEmpty);
        }
        if props.price.is_negative() {
            return Err(CartError::NegativePrice);
        }

        Ok(Self {
            product_id: props.product_id,
            slug: props.slug,
            name: props.name,
            image: props.image,
            price: props.price,
            quantity: props.quantity,
        })
    }

    /// A single unit of a catalog product, as sent by "add to cart".
    pub fn from_product(product: &Product) -> Self {
        Self {
            product_id: product.id.clone(),
            slug: product.slug.clone(),
            name: product.name.clone(),
            image: product.image.clone(),
            price: product.price.clone(),
            quantity: 1,
        }
    }

    pub fn line_total(&self) -> BigDecimal {
        &self.price * BigDecimal::from(self.quantity)
    }
}

/// Server-owned cart of one session. Clients only ever hold snapshots of it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Cart {
    pub items: Vec<CartItem>,
    pub items_price: BigDecimal,
    pub tax_price: BigDecimal,
    pub shipping_price: BigDecimal,
    pub total_price: BigDecimal,
    /// Bumped by the store on every mutation; orders snapshots.
    pub revision: u64,
}

impl Cart {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn item(&self, product_id: &ProductId) -> Option<&CartItem> {
        self.items.iter().find(|i| &i.product_id == product_id)
    }

    pub fn quantity_of(&self, product_id: &ProductId) -> u32 {
        self.item(product_id).map_or(0, |i| i.quantity)
    }

    pub fn total_item_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |acc, item| acc.saturating_add(item.quantity))
    }

    /// Adds one unit of `item`, appending a new line when the product is not
    /// in the cart yet. Returns the line's new quantity.
    pub fn add_unit(&mut self, item: CartItem) -> u32 {
        match self.items.iter_mut().find(|i| i.product_id == item.product_id) {
            Some(existing) => {
                existing.quantity = existing.quantity.saturating_add(1);
                existing.quantity
            }
            None => {
                self.items.push(CartItem { quantity: 1, ..item });
                1
            }
        }
    }

    /// Removes one unit of the product. A line that reaches zero is dropped.
    /// Returns the remaining quantity.
    pub fn remove_unit(&mut self, product_id: &ProductId) -> Result<u32, CartError> {
        let position = self
            .items
            .iter()
            .position(|i| &i.product_id == product_id)
            .ok_or(CartError::ItemNotFound)?;

        let remaining = self.items[position].quantity.saturating_sub(1);
        if remaining == 0 {
            self.items.remove(position);
        } else {
            self.items[position].quantity = remaining;
        }
        Ok(remaining)
    }

    pub fn reprice(&mut self, policy: &PricingPolicy) {
        let totals = policy.price(&self.items);
        self.items_price = totals.items_price;
        self.tax_price = totals.tax_price;
        self.shipping_price = totals.shipping_price;
        self.total_price = totals.total_price;
    }
}

/// Number of units across all lines; zero when there is no cart.
pub fn compute_total_item_count(cart: Option<&Cart>) -> u32 {
    cart.map_or(0, Cart::total_item_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn item(id: &str, quantity: u32) -> CartItem {
        CartItem::new(NewCartItemProps {
            product_id: ProductId::new(id),
            slug: id.to_string(),
            name: format!("Product {}", id),
            image: format!("/images/{}.jpg", id),
            price: BigDecimal::from_str("12.50").unwrap(),
            quantity,
        })
        .unwrap()
    }

    fn cart_with(items: Vec<CartItem>) -> Cart {
        Cart {
            items,
            ..Cart::empty()
        }
    }

    #[test]
    fn should_reject_zero_quantity() {
        let result = CartItem::new(NewCartItemProps {
            product_id: ProductId::new("sku1"),
            slug: "sku1".to_string(),
            name: "Product".to_string(),
            image: String::new(),
            price: BigDecimal::from(1),
            quantity: 0,
        });

        assert!(matches!(result.unwrap_err(), CartError::InvalidQuantity));
    }

    #[test]
    fn should_compute_line_total() {
        let line = item("sku1", 3);
        assert_eq!(line.line_total(), BigDecimal::from_str("37.50").unwrap());
    }

    #[test]
    fn should_count_zero_for_absent_cart() {
        assert_eq!(compute_total_item_count(None), 0);
    }

    #[test]
    fn should_count_zero_for_empty_cart() {
        assert_eq!(compute_total_item_count(Some(&Cart::empty())), 0);
    }

    #[test]
    fn should_append_new_line_with_single_unit() {
        let mut cart = Cart::empty();

        let quantity = cart.add_unit(item("sku1", 5));

        assert_eq!(quantity, 1);
        assert_eq!(cart.quantity_of(&ProductId::new("sku1")), 1);
    }

    #[test]
    fn should_increase_existing_line() {
        let mut cart = cart_with(vec![item("sku1", 2)]);

        let quantity = cart.add_unit(item("sku1", 1));

        assert_eq!(quantity, 3);
        assert_eq!(cart.items.len(), 1);
    }

    #[test]
    fn should_drop_line_when_last_unit_removed() {
        let mut cart = cart_with(vec![item("sku1", 1), item("sku2", 2)]);

        let remaining = cart.remove_unit(&ProductId::new("sku1")).unwrap();

        assert_eq!(remaining, 0);
        assert!(cart.item(&ProductId::new("sku1")).is_none());
        assert_eq!(cart.total_item_count(), 2);
    }

    #[test]
    fn should_fail_removing_unknown_item() {
        let mut cart = cart_with(vec![item("sku1", 1)]);

        let result = cart.remove_unit(&ProductId::new("missing"));

        assert!(matches!(result.unwrap_err(), CartError::ItemNotFound));
        assert_eq!(cart.total_item_count(), 1);
    }

    #[test]
    fn should_keep_line_order_on_update() {
        let mut cart = cart_with(vec![item("sku1", 1), item("sku2", 1)]);

        cart.add_unit(item("sku1", 1));

        let ids: Vec<&str> = cart.items.iter().map(|i| i.product_id.as_str()).collect();
        assert_eq!(ids, vec!["sku1", "sku2"]);
    }

    #[test]
    fn should_reprice_after_mutation() {
        let mut cart = cart_with(vec![item("sku1", 2)]);

        cart.reprice(&PricingPolicy::default());

        assert_eq!(cart.items_price, BigDecimal::from_str("25.00").unwrap());
        assert_eq!(cart.total_price, BigDecimal::from_str("38.75").unwrap());
    }

    proptest! {
        #[test]
        fn count_equals_sum_of_quantities(quantities in proptest::collection::vec(1u32..50, 0..12)) {
            let items = quantities
                .iter()
                .enumerate()
                .map(|(i, q)| item(&format!("sku{}", i), *q))
                .collect();
            let cart = cart_with(items);

            prop_assert_eq!(compute_total_item_count(Some(&cart)), quantities.iter().sum::<u32>());
        }

        #[test]
        fn add_then_remove_restores_quantity(initial in 0u32..10) {
            let id = ProductId::new("sku1");
            let mut cart = if initial == 0 {
                Cart::empty()
            } else {
                cart_with(vec![item("sku1", initial)])
            };

            cart.add_unit(item("sku1", 1));
            cart.remove_unit(&id).unwrap();

            prop_assert_eq!(cart.quantity_of(&id), initial);
        }
    }
}
