use async_trait::async_trait;

use crate::domain::cart::model::{Cart, CartItem};
use crate::domain::cart_mutation::errors::CartMutationError;

#[async_trait]
pub trait DecrementCartItemUseCase: Send + Sync {
    /// Asks the store for one unit less of the item.
    async fn execute(&self, item: &CartItem) -> Result<Cart, CartMutationError>;
}
