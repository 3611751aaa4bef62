use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use num_traits::Signed;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{MAX_RATING, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::search::{PriceRange, ProductFilter, ProductSort};
use crate::domain::product::use_cases::search::{SearchProductsParams, SearchProductsUseCase};

pub struct SearchProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

/// `None` for an absent, blank or `all` value.
fn criterion(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case("all"))
}

fn parse_rating(value: &str) -> Result<BigDecimal, ProductError> {
    let rating = BigDecimal::from_str(value).map_err(|_| ProductError::InvalidRating)?;
    if rating.is_negative() || rating > BigDecimal::from(MAX_RATING) {
        return Err(ProductError::InvalidRating);
    }
    Ok(rating)
}

impl SearchProductsParams {
    pub fn into_filter(self) -> Result<ProductFilter, ProductError> {
        Ok(ProductFilter {
            query: criterion(self.query),
            category: criterion(self.category),
            price_range: criterion(self.price_range)
                .map(|v| PriceRange::from_str(&v))
                .transpose()?,
            min_rating: criterion(self.min_rating)
                .map(|v| parse_rating(&v))
                .transpose()?,
            sort: criterion(self.sort)
                .map(|v| ProductSort::from_str(&v))
                .transpose()?
                .unwrap_or_default(),
        })
    }
}

#[async_trait]
impl SearchProductsUseCase for SearchProductsUseCaseImpl {
    async fn execute(&self, params: SearchProductsParams) -> Result<Vec<Product>, ProductError> {
        let filter = params.into_filter().inspect_err(|e| {
            self.logger
                .warn(&format!("Rejected catalog search: {}", e));
        })?;
        self.logger
            .info(&format!("Searching catalog: {:?}", filter));

        let products = self.repository.search(&filter).await?;
        self.logger
            .info(&format!("Found {} matching products", products.len()));
        Ok(products)
    }
}
