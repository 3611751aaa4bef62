use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{Cart, CartItem};
use crate::domain::shared::value_objects::SessionId;

pub struct AddItemToCartParams {
    pub session_id: SessionId,
    pub item: CartItem,
}

#[async_trait]
pub trait AddItemToCartUseCase: Send + Sync {
    async fn execute(&self, params: AddItemToCartParams) -> Result<Cart, CartError>;
}
