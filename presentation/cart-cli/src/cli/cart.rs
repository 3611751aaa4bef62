use std::sync::Arc;

use clap::Args;

use business::domain::cart::model::CartItem;
use business::domain::cart_mutation::errors::CartMutationError;
use business::domain::product::repository::ProductRepository;
use business::domain::shared::value_objects::ProductId;

use super::Session;
use crate::output;

#[derive(Debug, Args)]
pub(crate) struct QuantityArgs {
    /// Catalog identifier of the product
    product_id: String,

    /// Number of one-unit requests to issue at once
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=50))]
    times: u32,
}

#[derive(Debug, Clone, Copy)]
enum Direction {
    Up,
    Down,
}

pub(crate) async fn show(session: &Session) -> anyhow::Result<()> {
    session
        .controller
        .refresh()
        .await
        .map_err(|e| anyhow::anyhow!(e.user_message()))?;

    print_cart(session);
    Ok(())
}

pub(crate) async fn add(session: &Session, args: QuantityArgs) -> anyhow::Result<()> {
    change(session, args, Direction::Up).await
}

pub(crate) async fn remove(session: &Session, args: QuantityArgs) -> anyhow::Result<()> {
    change(session, args, Direction::Down).await
}

async fn change(session: &Session, args: QuantityArgs, direction: Direction) -> anyhow::Result<()> {
    if let Err(err) = session.controller.refresh().await {
        tracing::debug!("Changing cart without a fresh snapshot: {}", err);
    }
    let item = resolve_item(session, &ProductId::new(args.product_id)).await?;

    let tasks: Vec<_> = (0..args.times)
        .map(|_| {
            let controller = Arc::clone(&session.controller);
            let item = item.clone();
            tokio::spawn(async move {
                match direction {
                    Direction::Up => controller.increment(&item).await,
                    Direction::Down => controller.decrement(&item).await,
                }
            })
        })
        .collect();

    let mut failures: Vec<CartMutationError> = Vec::new();
    for task in tasks {
        if let Err(err) = task.await? {
            failures.push(err);
        }
    }

    print_cart(session);
    if !failures.is_empty() {
        println!("{} of {} requests failed", failures.len(), args.times);
        for err in &failures {
            println!("  {}", err.user_message());
        }
    }
    Ok(())
}

/// The line already in the cart, otherwise one unit of the catalog product.
async fn resolve_item(session: &Session, product_id: &ProductId) -> anyhow::Result<CartItem> {
    if let Some(line) = session
        .controller
        .snapshot()
        .and_then(|cart| cart.item(product_id).cloned())
    {
        return Ok(line);
    }

    let product = session
        .catalog
        .get_by_id(product_id)
        .await
        .map_err(|e| anyhow::anyhow!("unknown product {}: {}", product_id, e))?;
    Ok(CartItem::from_product(&product))
}

fn print_cart(session: &Session) {
    let snapshot = session.controller.snapshot();
    output::print(&output::cart_lines(snapshot.as_ref()));
    output::print(&output::summary_lines(&session.controller.summary()));
}
