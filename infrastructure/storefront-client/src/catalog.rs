use async_trait::async_trait;
use reqwest::Response;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::repository::ProductRepository;
use business::domain::product::search::ProductFilter;
use business::domain::shared::value_objects::ProductId;

use crate::client::StorefrontClient;
use crate::dto::ProductDto;

/// Read access to the storefront catalog over HTTP.
pub struct CatalogHttp {
    client: StorefrontClient,
}

impl CatalogHttp {
    pub fn new(client: StorefrontClient) -> Self {
        Self { client }
    }

    async fn read_products(response: Response) -> Result<Vec<Product>, RepositoryError> {
        if !response.status().is_success() {
            tracing::debug!("Catalog answered {}", response.status());
            return Err(RepositoryError::Persistence);
        }

        let body: Vec<ProductDto> = response
            .json()
            .await
            .map_err(|_| RepositoryError::CorruptData)?;

        body.into_iter()
            .map(|p| p.into_domain().ok_or(RepositoryError::CorruptData))
            .collect()
    }
}

/// Query string of `filter`. The sort is always sent so the server searches.
fn search_query(filter: &ProductFilter) -> Vec<(&'static str, String)> {
    let mut query = Vec::new();
    if let Some(q) = &filter.query {
        query.push(("q", q.clone()));
    }
    if let Some(category) = &filter.category {
        query.push(("category", category.clone()));
    }
    if let Some(range) = &filter.price_range {
        query.push(("price", range.to_string()));
    }
    if let Some(rating) = &filter.min_rating {
        query.push(("rating", rating.to_string()));
    }
    query.push(("sort", filter.sort.to_string()));
    query
}

fn transport_failure(error: reqwest::Error) -> RepositoryError {
    tracing::warn!("Catalog request failed: {}", error);
    RepositoryError::Persistence
}

#[async_trait]
impl ProductRepository for CatalogHttp {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let response = self
            .client
            .client
            .get(self.client.products_url())
            .send()
            .await
            .map_err(transport_failure)?;

        Self::read_products(response).await
    }

    async fn get_by_id(&self, id: &ProductId) -> Result<Product, RepositoryError> {
        self.get_all()
            .await?
            .into_iter()
            .find(|p| &p.id == id)
            .ok_or(RepositoryError::NotFound)
    }

    async fn search(&self, filter: &ProductFilter) -> Result<Vec<Product>, RepositoryError> {
        let response = self
            .client
            .client
            .get(self.client.products_url())
            .query(&search_query(filter))
            .send()
            .await
            .map_err(transport_failure)?;

        Self::read_products(response).await
    }
}
