use std::sync::Arc;

use clap::{Args, Parser, Subcommand};

use business::application::cart_mutation::controller::CartMutationController;
use business::domain::cart_mutation::policy::BusyPolicy;
use business::domain::shared::value_objects::SessionId;
use logger::{TracingLogger, TracingNotifier};
use storefront_client::cart_store::CartStoreHttp;
use storefront_client::catalog::CatalogHttp;
use storefront_client::client::StorefrontClient;

use crate::navigator::ConsoleNavigator;

mod cart;
mod checkout;
mod products;

#[derive(Debug, Parser)]
#[command(name = "cart-cli", about = "Storefront cart CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    connection: ConnectionArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Args)]
struct ConnectionArgs {
    /// Storefront API base URL
    #[arg(long, env = "STOREFRONT_BASE_URL", default_value = "http://127.0.0.1:8080", global = true)]
    base_url: String,

    /// Shopping session; a random one is generated when omitted
    #[arg(long, env = "STOREFRONT_SESSION_ID", global = true)]
    session: Option<String>,

    /// What to do with a second request for an item that is still updating
    #[arg(long, env = "CART_BUSY_POLICY", default_value_t = BusyPolicy::Queue, global = true)]
    busy_policy: BusyPolicy,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List or search the catalog
    Products(products::SearchArgs),
    /// Show cart lines and order summary
    Show,
    /// Add units of a product
    Add(cart::QuantityArgs),
    /// Remove units of a product
    Remove(cart::QuantityArgs),
    /// Leave the cart for the first checkout step
    Checkout,
}

/// Everything a command needs to work on one session's cart.
pub(crate) struct Session {
    pub(crate) controller: Arc<CartMutationController>,
    pub(crate) catalog: CatalogHttp,
}

impl Session {
    fn connect(args: &ConnectionArgs) -> Self {
        let session_id = args
            .session
            .clone()
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
        tracing::info!("Using session {}", session_id);
        let session_id = SessionId::new(session_id);

        let client = StorefrontClient::new(args.base_url.clone(), session_id.clone());
        let catalog = CatalogHttp::new(StorefrontClient::new(args.base_url.clone(), session_id));
        let controller = CartMutationController::new(
            Arc::new(CartStoreHttp::new(client)),
            Arc::new(TracingNotifier),
            Arc::new(ConsoleNavigator::new(args.base_url.clone())),
            Arc::new(TracingLogger),
            args.busy_policy,
        );

        Self {
            controller: Arc::new(controller),
            catalog,
        }
    }
}

impl Cli {
    pub(crate) async fn run(self) -> anyhow::Result<()> {
        let session = Session::connect(&self.connection);

        match self.command {
            Commands::Products(args) => products::run(&session, args).await,
            Commands::Show => cart::show(&session).await,
            Commands::Add(args) => cart::add(&session, args).await,
            Commands::Remove(args) => cart::remove(&session, args).await,
            Commands::Checkout => checkout::run(&session).await,
        }
    }
}
