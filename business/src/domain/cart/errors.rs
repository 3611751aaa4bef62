use crate::domain::errors::RepositoryError;

#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.invalid_quantity")]
    InvalidQuantity,
    #[error("cart.name_empty")]
    NameEmpty,
    #[error("cart.negative_price")]
    NegativePrice,
    #[error("cart.invalid_price")]
    InvalidPrice,
    #[error("cart.product_not_found")]
    ProductNotFound,
    #[error("cart.out_of_stock")]
    OutOfStock,
    #[error("cart.not_found")]
    CartNotFound,
    #[error("cart.item_not_found")]
    ItemNotFound,
    #[error("repository.persistence")]
    Repository(#[from] RepositoryError),
}

impl CartError {
    /// Text suitable for showing to the shopper.
    pub fn user_message(&self) -> &'static str {
        match self {
            CartError::InvalidQuantity => "Quantity must be at least 1",
            CartError::NameEmpty => "Item name cannot be empty",
            CartError::NegativePrice => "Price cannot be negative",
            CartError::InvalidPrice => "Price must be a decimal number",
            CartError::ProductNotFound => "Product not found",
            CartError::OutOfStock => "Not enough stock",
            CartError::CartNotFound => "Cart not found",
            CartError::ItemNotFound => "Item not found in cart",
            CartError::Repository(RepositoryError::Conflict) => {
                "Your cart changed elsewhere, please try again"
            }
            CartError::Repository(_) => "Could not update your cart",
        }
    }
}
