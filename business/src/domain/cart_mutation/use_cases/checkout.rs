use async_trait::async_trait;

use crate::domain::cart_mutation::errors::CartMutationError;
use crate::domain::cart_mutation::navigator::CheckoutStep;

#[async_trait]
pub trait CheckoutUseCase: Send + Sync {
    async fn execute(&self) -> Result<CheckoutStep, CartMutationError>;
}
