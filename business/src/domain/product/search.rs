use std::cmp::Ordering;
use std::str::FromStr;

use bigdecimal::BigDecimal;

use super::errors::ProductError;
use super::model::Product;

/// Order of a catalog listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProductSort {
    #[default]
    Newest,
    Lowest,
    Highest,
    Rating,
}

impl std::fmt::Display for ProductSort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductSort::Newest => write!(f, "newest"),
            ProductSort::Lowest => write!(f, "lowest"),
            ProductSort::Highest => write!(f, "highest"),
            ProductSort::Rating => write!(f, "rating"),
        }
    }
}

impl FromStr for ProductSort {
    type Err = ProductError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "newest" => Ok(ProductSort::Newest),
            "lowest" => Ok(ProductSort::Lowest),
            "highest" => Ok(ProductSort::Highest),
            "rating" => Ok(ProductSort::Rating),
            _ => Err(ProductError::InvalidSort),
        }
    }
}

/// Inclusive price bounds, written `min-max` (e.g. `51-100`).
#[derive(Debug, Clone, PartialEq)]
pub struct PriceRange {
    pub min: BigDecimal,
    pub max: BigDecimal,
}

impl PriceRange {
    pub fn contains(&self, price: &BigDecimal) -> bool {
        &self.min <= price && price <= &self.max
    }
}

impl std::fmt::Display for PriceRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

impl FromStr for PriceRange {
    type Err = ProductError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (min, max) = s.trim().split_once('-').ok_or(ProductError::InvalidPriceRange)?;
        let min = BigDecimal::from_str(min.trim()).map_err(|_| ProductError::InvalidPriceRange)?;
        let max = BigDecimal::from_str(max.trim()).map_err(|_| ProductError::InvalidPriceRange)?;
        if min > max {
            return Err(ProductError::InvalidPriceRange);
        }
        Ok(Self { min, max })
    }
}

/// Catalog search criteria. Unset criteria match every product.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    /// Case-insensitive fragment of the product name.
    pub query: Option<String>,
    pub category: Option<String>,
    pub price_range: Option<PriceRange>,
    pub min_rating: Option<BigDecimal>,
    pub sort: ProductSort,
}

impl ProductFilter {
    pub fn matches(&self, product: &Product) -> bool {
        let query_matches = self.query.as_ref().is_none_or(|query| {
            product
                .name
                .to_lowercase()
                .contains(&query.to_lowercase())
        });
        let category_matches = self
            .category
            .as_ref()
            .is_none_or(|category| &product.category == category);
        let price_matches = self
            .price_range
            .as_ref()
            .is_none_or(|range| range.contains(&product.price));
        let rating_matches = self
            .min_rating
            .as_ref()
            .is_none_or(|min| &product.rating >= min);

        query_matches && category_matches && price_matches && rating_matches
    }

    /// Keeps the matching products, in the requested order. Ties keep the
    /// input order.
    pub fn apply(&self, products: Vec<Product>) -> Vec<Product> {
        let mut found: Vec<Product> = products.into_iter().filter(|p| self.matches(p)).collect();
        found.sort_by(|a, b| self.compare(a, b));
        found
    }

    fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self.sort {
            ProductSort::Newest => b.created_at.cmp(&a.created_at),
            ProductSort::Lowest => a.price.cmp(&b.price),
            ProductSort::Highest => b.price.cmp(&a.price),
            ProductSort::Rating => b.rating.cmp(&a.rating),
        }
    }
}
