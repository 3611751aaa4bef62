use async_trait::async_trait;

use crate::domain::cart::model::{Cart, CartItem};
use crate::domain::cart_mutation::errors::CartMutationError;

#[async_trait]
pub trait IncrementCartItemUseCase: Send + Sync {
    /// Asks the store for one more unit of the item.
    async fn execute(&self, item: &CartItem) -> Result<Cart, CartMutationError>;
}
