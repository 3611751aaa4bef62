use async_trait::async_trait;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::repository::ProductRepository;
use business::domain::product::search::ProductFilter;
use business::domain::shared::value_objects::ProductId;

use super::entity::ProductEntity;

/// Read-only catalog held in memory, loaded once at startup.
pub struct ProductRepositoryInMemory {
    products: Vec<Product>,
}

impl ProductRepositoryInMemory {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Parses a JSON array of catalog records.
    pub fn from_json(json: &str) -> Result<Self, RepositoryError> {
        let entities: Vec<ProductEntity> =
            serde_json::from_str(json).map_err(|_| RepositoryError::CorruptData)?;
        let products = entities
            .into_iter()
            .map(ProductEntity::into_domain)
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!("Loaded catalog with {} products", products.len());
        Ok(Self::new(products))
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryInMemory {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.products.clone())
    }

    async fn get_by_id(&self, id: &ProductId) -> Result<Product, RepositoryError> {
        self.products
            .iter()
            .find(|p| &p.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn search(&self, filter: &ProductFilter) -> Result<Vec<Product>, RepositoryError> {
        Ok(filter.apply(self.products.clone()))
    }
}
