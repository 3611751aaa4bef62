use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{Cart, CartItem};
use crate::domain::cart::use_cases::add_item::{AddItemToCartParams, AddItemToCartUseCase};
use crate::domain::cart::use_cases::get_cart::{GetCartParams, GetCartUseCase};
use crate::domain::cart::use_cases::remove_item::{
    RemoveItemFromCartParams, RemoveItemFromCartUseCase,
};
use crate::domain::cart_mutation::store::{CartStore, StoreFailure};
use crate::domain::shared::value_objects::{ProductId, SessionId};

/// Cart store of one session, backed by the in-process cart use cases.
pub struct SessionCartStore {
    pub session_id: SessionId,
    pub add_item: Arc<dyn AddItemToCartUseCase>,
    pub remove_item: Arc<dyn RemoveItemFromCartUseCase>,
    pub get_cart: Arc<dyn GetCartUseCase>,
}

fn to_failure(error: CartError) -> StoreFailure {
    StoreFailure::with_message(error.user_message())
}

#[async_trait]
impl CartStore for SessionCartStore {
    async fn add_item(&self, item: &CartItem) -> Result<Cart, StoreFailure> {
        self.add_item
            .execute(AddItemToCartParams {
                session_id: self.session_id.clone(),
                item: item.clone(),
            })
            .await
            .map_err(to_failure)
    }

    async fn remove_item(&self, product_id: &ProductId) -> Result<Cart, StoreFailure> {
        self.remove_item
            .execute(RemoveItemFromCartParams {
                session_id: self.session_id.clone(),
                product_id: product_id.clone(),
            })
            .await
            .map_err(to_failure)
    }

    async fn get_cart(&self) -> Result<Option<Cart>, StoreFailure> {
        self.get_cart
            .execute(GetCartParams {
                session_id: self.session_id.clone(),
            })
            .await
            .map_err(to_failure)
    }
}
