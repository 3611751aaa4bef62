use std::str::FromStr;

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{NewProductProps, Product};
use business::domain::shared::value_objects::ProductId;

/// Catalog record as stored in the JSON catalog file.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductEntity {
    pub id: String,
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub image: String,
    /// Decimal string, e.g. "12.50".
    pub price: String,
    /// Decimal string, e.g. "4.5".
    #[serde(default)]
    pub rating: Option<String>,
    #[serde(default)]
    pub num_reviews: u32,
    pub count_in_stock: u32,
    /// RFC 3339 timestamp; records without one sort as oldest.
    #[serde(default)]
    pub created_at: DateTime<Utc>,
}

impl ProductEntity {
    pub fn into_domain(self) -> Result<Product, RepositoryError> {
        let price = BigDecimal::from_str(&self.price).map_err(|_| RepositoryError::CorruptData)?;
        let rating = match self.rating.as_deref() {
            Some(rating) => {
                BigDecimal::from_str(rating).map_err(|_| RepositoryError::CorruptData)?
            }
            None => BigDecimal::from(0),
        };

        Product::new(NewProductProps {
            id: ProductId::new(self.id),
            slug: self.slug,
            name: self.name,
            category: self.category,
            image: self.image,
            price,
            rating,
            num_reviews: self.num_reviews,
            count_in_stock: self.count_in_stock,
            created_at: self.created_at,
        })
        .map_err(|_| RepositoryError::CorruptData)
    }
}
