use std::sync::Arc;

use async_trait::async_trait;

use crate::application::cart::revision::mutate_cart;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{Cart, CartItem};
use crate::domain::cart::pricing::PricingPolicy;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::add_item::{AddItemToCartParams, AddItemToCartUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;

pub struct AddItemToCartUseCaseImpl {
    pub cart_repository: Arc<dyn CartRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub pricing: PricingPolicy,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddItemToCartUseCase for AddItemToCartUseCaseImpl {
    async fn execute(&self, params: AddItemToCartParams) -> Result<Cart, CartError> {
        self.logger.info(&format!(
            "Adding product {} to cart of session {}",
            params.item.product_id, params.session_id
        ));

        let product = self
            .product_repository
            .get_by_id(&params.item.product_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartError::ProductNotFound,
                other => CartError::Repository(other),
            })?;

        // Catalog data wins over whatever name or price the client sent.
        let line = CartItem::from_product(&product);

        let cart = mutate_cart(
            self.cart_repository.as_ref(),
            &self.pricing,
            self.logger.as_ref(),
            &params.session_id,
            |current| {
                let mut cart = current.unwrap_or_default();
                if cart.quantity_of(&product.id) >= product.count_in_stock {
                    return Err(CartError::OutOfStock);
                }
                cart.add_unit(line.clone());
                Ok(cart)
            },
        )
        .await?;

        self.logger.info(&format!(
            "{} now has quantity {} in cart of session {}",
            product.name,
            cart.quantity_of(&product.id),
            params.session_id
        ));
        Ok(cart)
    }
}
