use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

/// Raw catalog search input. Blank values and `all` leave a criterion unset.
#[derive(Debug, Clone, Default)]
pub struct SearchProductsParams {
    pub query: Option<String>,
    pub category: Option<String>,
    /// `min-max`, e.g. `1-50`.
    pub price_range: Option<String>,
    pub min_rating: Option<String>,
    /// `newest`, `lowest`, `highest` or `rating`.
    pub sort: Option<String>,
}

#[async_trait]
pub trait SearchProductsUseCase: Send + Sync {
    async fn execute(&self, params: SearchProductsParams) -> Result<Vec<Product>, ProductError>;
}
