use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::ProductId;

use super::model::Product;
use super::search::ProductFilter;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn get_by_id(&self, id: &ProductId) -> Result<Product, RepositoryError>;
    /// Products matching `filter`, in the filter's order.
    async fn search(&self, filter: &ProductFilter) -> Result<Vec<Product>, RepositoryError>;
}
