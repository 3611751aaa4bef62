use bigdecimal::BigDecimal;
use clap::Args;

use business::domain::product::repository::ProductRepository;
use business::domain::product::search::{PriceRange, ProductFilter, ProductSort};

use super::Session;
use crate::output;

#[derive(Debug, Args)]
pub(crate) struct SearchArgs {
    /// Fragment of the product name
    #[arg(long, short)]
    query: Option<String>,

    /// Exact category
    #[arg(long)]
    category: Option<String>,

    /// Price range, e.g. 1-50
    #[arg(long)]
    price: Option<PriceRange>,

    /// Minimum average rating
    #[arg(long)]
    rating: Option<BigDecimal>,

    /// newest, lowest, highest or rating
    #[arg(long)]
    sort: Option<ProductSort>,
}

impl SearchArgs {
    /// `None` when no criterion was given.
    fn into_filter(self) -> Option<ProductFilter> {
        if self.query.is_none()
            && self.category.is_none()
            && self.price.is_none()
            && self.rating.is_none()
            && self.sort.is_none()
        {
            return None;
        }
        Some(ProductFilter {
            query: self.query,
            category: self.category,
            price_range: self.price,
            min_rating: self.rating,
            sort: self.sort.unwrap_or_default(),
        })
    }
}

pub(crate) async fn run(session: &Session, args: SearchArgs) -> anyhow::Result<()> {
    let products = match args.into_filter() {
        Some(filter) => session.catalog.search(&filter).await,
        None => session.catalog.get_all().await,
    }
    .map_err(|e| anyhow::anyhow!("failed to load catalog: {}", e))?;

    if products.is_empty() {
        println!("No products found.");
        return Ok(());
    }
    let lines: Vec<String> = products.iter().map(output::product_line).collect();
    output::print(&lines);
    Ok(())
}
