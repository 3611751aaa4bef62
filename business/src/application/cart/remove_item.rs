use std::sync::Arc;

use async_trait::async_trait;

use crate::application::cart::revision::mutate_cart;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::pricing::PricingPolicy;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::remove_item::{
    RemoveItemFromCartParams, RemoveItemFromCartUseCase,
};
use crate::domain::logger::Logger;

pub struct RemoveItemFromCartUseCaseImpl {
    pub cart_repository: Arc<dyn CartRepository>,
    pub pricing: PricingPolicy,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveItemFromCartUseCase for RemoveItemFromCartUseCaseImpl {
    async fn execute(&self, params: RemoveItemFromCartParams) -> Result<Cart, CartError> {
        self.logger.info(&format!(
            "Removing one unit of {} from cart of session {}",
            params.product_id, params.session_id
        ));

        let product_id = &params.product_id;
        let cart = mutate_cart(
            self.cart_repository.as_ref(),
            &self.pricing,
            self.logger.as_ref(),
            &params.session_id,
            |current| {
                let mut cart = current.ok_or(CartError::CartNotFound)?;
                cart.remove_unit(product_id)?;
                Ok(cart)
            },
        )
        .await?;

        if cart.item(product_id).is_none() {
            self.logger.info(&format!(
                "{} removed from cart of session {}",
                product_id, params.session_id
            ));
        }
        Ok(cart)
    }
}
