use clap::Parser;
use dotenvy::dotenv;

mod cli;
mod navigator;
mod output;

/// Command-line storefront
///
/// Drives the cart of one session against a running storefront API.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load before parsing so clap's env fallbacks see the `.env` values
    dotenv().ok();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    cli::Cli::parse().run().await
}
