use super::{
    catalog_config::CatalogConfig, cors_config, pricing_config, server_config::ServerConfig,
};
use business::domain::cart::pricing::PricingPolicy;
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub pricing: PricingPolicy,
    pub catalog: CatalogConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            pricing: pricing_config::pricing_from_env()?,
            catalog: CatalogConfig::from_env(),
        })
    }
}
