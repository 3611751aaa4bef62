use std::str::FromStr;

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use business::domain::cart::model::{Cart, CartItem};
use business::domain::cart_mutation::store::StoreFailure;
use business::domain::product::model::Product;
use business::domain::shared::value_objects::ProductId;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItemDto {
    pub product_id: String,
    pub slug: String,
    pub name: String,
    pub image: String,
    pub price: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CartDto {
    pub items: Vec<CartItemDto>,
    pub items_price: String,
    pub tax_price: String,
    pub shipping_price: String,
    pub total_price: String,
    pub revision: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProductDto {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub category: String,
    pub image: String,
    pub price: String,
    pub rating: String,
    pub num_reviews: u32,
    pub count_in_stock: u32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponseDto {
    pub name: String,
    pub message: String,
}

impl From<&CartItem> for CartItemDto {
    fn from(item: &CartItem) -> Self {
        Self {
            product_id: item.product_id.to_string(),
            slug: item.slug.clone(),
            name: item.name.clone(),
            image: item.image.clone(),
            price: item.price.to_string(),
            quantity: item.quantity,
        }
    }
}

/// A response body the client cannot read carries no message for the shopper.
fn decimal(value: &str) -> Result<BigDecimal, StoreFailure> {
    BigDecimal::from_str(value).map_err(|_| StoreFailure::unknown())
}

impl CartItemDto {
    pub fn into_domain(self) -> Result<CartItem, StoreFailure> {
        Ok(CartItem {
            product_id: ProductId::new(self.product_id),
            slug: self.slug,
            name: self.name,
            image: self.image,
            price: decimal(&self.price)?,
            quantity: self.quantity,
        })
    }
}

impl CartDto {
    pub fn into_domain(self) -> Result<Cart, StoreFailure> {
        let items = self
            .items
            .into_iter()
            .map(CartItemDto::into_domain)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Cart {
            items,
            items_price: decimal(&self.items_price)?,
            tax_price: decimal(&self.tax_price)?,
            shipping_price: decimal(&self.shipping_price)?,
            total_price: decimal(&self.total_price)?,
            revision: self.revision,
        })
    }
}

impl ProductDto {
    pub fn into_domain(self) -> Option<Product> {
        Some(Product {
            id: ProductId::new(self.id),
            slug: self.slug,
            name: self.name,
            category: self.category,
            image: self.image,
            price: BigDecimal::from_str(&self.price).ok()?,
            rating: BigDecimal::from_str(&self.rating).ok()?,
            num_reviews: self.num_reviews,
            count_in_stock: self.count_in_stock,
            created_at: self.created_at,
        })
    }
}

impl From<ErrorResponseDto> for StoreFailure {
    fn from(body: ErrorResponseDto) -> Self {
        if body.message.trim().is_empty() {
            StoreFailure::unknown()
        } else {
            StoreFailure::with_message(body.message)
        }
    }
}
