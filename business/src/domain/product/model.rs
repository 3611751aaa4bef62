use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use num_traits::Signed;

use super::errors::ProductError;
use crate::domain::shared::value_objects::ProductId;

/// Highest average customer rating.
pub const MAX_RATING: u32 = 5;

/// A catalog entry. The cart store checks additions against it.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub slug: String,
    pub name: String,
    pub category: String,
    pub image: String,
    pub price: BigDecimal,
    /// Average customer rating, between 0 and [`MAX_RATING`].
    pub rating: BigDecimal,
    pub num_reviews: u32,
    pub count_in_stock: u32,
    pub created_at: DateTime<Utc>,
}

pub struct NewProductProps {
    pub id: ProductId,
    pub slug: String,
    pub name: String,
    pub category: String,
    pub image: String,
    pub price: BigDecimal,
    pub rating: BigDecimal,
    pub num_reviews: u32,
    pub count_in_stock: u32,
    pub created_at: DateTime<Utc>,
}

impl Product {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        if props.name.trim().is_empty() {
            return Err(ProductError::NameEmpty);
        }
        if props.slug.trim().is_empty() {
            return Err(ProductError::SlugEmpty);
        }
        if props.price.is_negative() {
            return Err(ProductError::NegativePrice);
        }
        if props.rating.is_negative() || props.rating > BigDecimal::from(MAX_RATING) {
            return Err(ProductError::RatingOutOfRange);
        }

        Ok(Self {
            id: props.id,
            slug: props.slug,
            name: props.name,
            category: props.category,
            image: props.image,
            price: props.price,
            rating: props.rating,
            num_reviews: props.num_reviews,
            count_in_stock: props.count_in_stock,
            created_at: props.created_at,
        })
    }

    pub fn in_stock(&self) -> bool {
        self.count_in_stock > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn props() -> NewProductProps {
        NewProductProps {
            id: ProductId::new("sku1"),
            slug: "polo-shirt".to_string(),
            name: "Polo Shirt".to_string(),
            category: "Men's Dress Shirts".to_string(),
            image: "/images/polo.jpg".to_string(),
            price: BigDecimal::from_str("29.99").unwrap(),
            rating: BigDecimal::from_str("4.5").unwrap(),
            num_reviews: 10,
            count_in_stock: 4,
            created_at: DateTime::<Utc>::default(),
        }
    }

    #[test]
    fn should_create_product_when_props_valid() {
        let product = Product::new(props()).unwrap();

        assert_eq!(product.name, "Polo Shirt");
        assert!(product.in_stock());
    }

    #[test]
    fn should_reject_when_name_empty() {
        let result = Product::new(NewProductProps {
            name: "  ".to_string(),
            ..props()
        });

        assert!(matches!(result.unwrap_err(), ProductError::NameEmpty));
    }

    #[test]
    fn should_reject_when_price_negative() {
        let result = Product::new(NewProductProps {
            price: BigDecimal::from_str("-1").unwrap(),
            ..props()
        });

        assert!(matches!(result.unwrap_err(), ProductError::NegativePrice));
    }

    #[test]
    fn should_reject_rating_above_five() {
        let result = Product::new(NewProductProps {
            rating: BigDecimal::from_str("5.1").unwrap(),
            ..props()
        });

        assert!(matches!(result.unwrap_err(), ProductError::RatingOutOfRange));
    }

    #[test]
    fn should_report_out_of_stock_when_count_zero() {
        let product = Product::new(NewProductProps {
            count_in_stock: 0,
            ..props()
        })
        .unwrap();

        assert!(!product.in_stock());
    }
}
