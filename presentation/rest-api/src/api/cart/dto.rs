use std::str::FromStr;

use bigdecimal::BigDecimal;
use poem_openapi::Object;

use business::domain::cart::errors::CartError;
use business::domain::cart::model::{Cart, CartItem, NewCartItemProps};
use business::domain::shared::value_objects::ProductId;

/// Item the shopper wants one more unit of. Only `product_id` selects the
/// product; the stored line always takes name and price from the catalog.
#[derive(Debug, Clone, Object)]
pub struct CartItemRequest {
    /// Catalog identifier
    pub product_id: String,
    /// URL slug
    pub slug: String,
    /// Display name (cannot be empty)
    pub name: String,
    /// Image path
    #[oai(default)]
    pub image: String,
    /// Unit price as a decimal string
    pub price: String,
    /// Quantity shown to the shopper (at least 1)
    pub quantity: u32,
}

impl CartItemRequest {
    pub fn into_domain(self) -> Result<CartItem, CartError> {
        let price = BigDecimal::from_str(self.price.trim()).map_err(|_| CartError::InvalidPrice)?;

        CartItem::new(NewCartItemProps {
            product_id: ProductId::new(self.product_id),
            slug: self.slug,
            name: self.name,
            image: self.image,
            price,
            quantity: self.quantity,
        })
    }
}

#[derive(Debug, Clone, Object)]
pub struct CartItemResponse {
    pub product_id: String,
    pub slug: String,
    pub name: String,
    pub image: String,
    /// Unit price as a decimal string
    pub price: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, Object)]
pub struct CartResponse {
    pub items: Vec<CartItemResponse>,
    /// Units across all lines
    pub item_count: u32,
    pub items_price: String,
    pub tax_price: String,
    pub shipping_price: String,
    pub total_price: String,
    /// Increases by one with every change to the cart
    pub revision: u64,
}

impl From<CartItem> for CartItemResponse {
    fn from(item: CartItem) -> Self {
        Self {
            product_id: item.product_id.to_string(),
            slug: item.slug,
            name: item.name,
            image: item.image,
            price: item.price.to_string(),
            quantity: item.quantity,
        }
    }
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        Self {
            item_count: cart.total_item_count(),
            items_price: cart.items_price.to_string(),
            tax_price: cart.tax_price.to_string(),
            shipping_price: cart.shipping_price.to_string(),
            total_price: cart.total_price.to_string(),
            revision: cart.revision,
            items: cart.items.into_iter().map(|i| i.into()).collect(),
        }
    }
}
