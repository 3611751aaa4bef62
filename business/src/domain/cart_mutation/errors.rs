use super::store::StoreFailure;
use crate::domain::shared::value_objects::ProductId;

/// Shown when the store fails without saying why.
pub const GENERIC_FAILURE_MESSAGE: &str = "An error occurred.";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CartMutationError {
    #[error("cart_mutation.store_failure")]
    Store { message: String },
    #[error("cart_mutation.unknown_failure")]
    Unknown,
    #[error("cart_mutation.item_busy")]
    ItemBusy(ProductId),
    #[error("cart_mutation.empty_cart")]
    EmptyCart,
    #[error("cart_mutation.checkout_pending")]
    CheckoutPending,
}

impl From<StoreFailure> for CartMutationError {
    fn from(failure: StoreFailure) -> Self {
        match failure.message {
            Some(message) if !message.trim().is_empty() => CartMutationError::Store { message },
            _ => CartMutationError::Unknown,
        }
    }
}

impl CartMutationError {
    pub fn user_message(&self) -> String {
        match self {
            CartMutationError::Store { message } => message.clone(),
            CartMutationError::Unknown => GENERIC_FAILURE_MESSAGE.to_string(),
            CartMutationError::ItemBusy(product_id) => {
                format!("{} is already being updated", product_id)
            }
            CartMutationError::EmptyCart => "Your cart is empty".to_string(),
            CartMutationError::CheckoutPending => "Checkout is already in progress".to_string(),
        }
    }
}
