use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::product::model::Product;

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Catalog identifier, used as `product_id` in cart requests
    pub id: String,
    /// URL slug
    pub slug: String,
    /// Display name
    pub name: String,
    /// Catalog category
    pub category: String,
    /// Image path
    pub image: String,
    /// Unit price as a decimal string
    pub price: String,
    /// Average customer rating (0-5) as a decimal string
    pub rating: String,
    /// Number of customer reviews
    pub num_reviews: u32,
    /// Units available
    pub count_in_stock: u32,
    /// When the product was listed
    pub created_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_string(),
            slug: product.slug,
            name: product.name,
            category: product.category,
            image: product.image,
            price: product.price.to_string(),
            rating: product.rating.to_string(),
            num_reviews: product.num_reviews,
            count_in_stock: product.count_in_stock,
            created_at: product.created_at,
        }
    }
}
