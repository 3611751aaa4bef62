use async_trait::async_trait;

use crate::domain::cart::model::{Cart, CartItem};
use crate::domain::shared::value_objects::ProductId;

/// Failure reported by the cart store: network, validation or stock.
/// `message` is human readable when the store provided one.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("cart_store.failure")]
pub struct StoreFailure {
    pub message: Option<String>,
}

impl StoreFailure {
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }

    pub fn unknown() -> Self {
        Self { message: None }
    }
}

/// Authoritative cart store of the current session. Every call is a
/// read-modify-write on the store side and answers with the whole cart.
#[async_trait]
pub trait CartStore: Send + Sync {
    /// Adds one unit of `item.product_id`.
    async fn add_item(&self, item: &CartItem) -> Result<Cart, StoreFailure>;
    /// Removes one unit of `product_id`; the store drops the line at zero.
    async fn remove_item(&self, product_id: &ProductId) -> Result<Cart, StoreFailure>;
    async fn get_cart(&self) -> Result<Option<Cart>, StoreFailure>;
}
