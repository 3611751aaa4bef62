#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.name_empty")]
    NameEmpty,
    #[error("product.slug_empty")]
    SlugEmpty,
    #[error("product.negative_price")]
    NegativePrice,
    #[error("product.rating_out_of_range")]
    RatingOutOfRange,
    #[error("product.invalid_price_range")]
    InvalidPriceRange,
    #[error("product.invalid_rating")]
    InvalidRating,
    #[error("product.invalid_sort")]
    InvalidSort,
    #[error("product.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
