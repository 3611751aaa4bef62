use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::shared::value_objects::{ProductId, SessionId};

pub struct RemoveItemFromCartParams {
    pub session_id: SessionId,
    pub product_id: ProductId,
}

#[async_trait]
pub trait RemoveItemFromCartUseCase: Send + Sync {
    async fn execute(&self, params: RemoveItemFromCartParams) -> Result<Cart, CartError>;
}
