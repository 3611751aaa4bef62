use std::sync::Arc;

use logger::TracingLogger;
use persistence::cart::repository::CartRepositoryInMemory;
use persistence::product::repository::ProductRepositoryInMemory;

use business::application::cart::add_item::AddItemToCartUseCaseImpl;
use business::application::cart::get_cart::GetCartUseCaseImpl;
use business::application::cart::remove_item::RemoveItemFromCartUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::search::SearchProductsUseCaseImpl;

use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub product_api: crate::api::product::routes::ProductApi,
    pub cart_api: crate::api::cart::routes::CartApi,
}

impl DependencyContainer {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let catalog = config.catalog.load()?;
        let product_repository = Arc::new(ProductRepositoryInMemory::from_json(&catalog)?);
        let cart_repository = Arc::new(CartRepositoryInMemory::new());

        // Product use cases
        let get_all_products_use_case = Arc::new(GetAllProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let search_products_use_case = Arc::new(SearchProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });

        // Cart use cases
        let add_item_use_case = Arc::new(AddItemToCartUseCaseImpl {
            cart_repository: cart_repository.clone(),
            product_repository,
            pricing: config.pricing.clone(),
            logger: logger.clone(),
        });
        let remove_item_use_case = Arc::new(RemoveItemFromCartUseCaseImpl {
            cart_repository: cart_repository.clone(),
            pricing: config.pricing.clone(),
            logger: logger.clone(),
        });
        let get_cart_use_case = Arc::new(GetCartUseCaseImpl {
            cart_repository,
            logger,
        });

        let product_api = crate::api::product::routes::ProductApi::new(
            get_all_products_use_case,
            search_products_use_case,
        );
        let cart_api = crate::api::cart::routes::CartApi::new(
            add_item_use_case,
            remove_item_use_case,
            get_cart_use_case,
        );

        Ok(Self {
            health_api,
            product_api,
            cart_api,
        })
    }
}
