use std::env;

const BUNDLED_CATALOG: &str = include_str!("../../data/catalog.json");

/// Where the product catalog is read from
///
/// Environment variables:
/// - CATALOG_PATH: JSON catalog file (default: the bundled sample catalog)
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub path: Option<String>,
}

impl CatalogConfig {
    pub fn from_env() -> Self {
        Self {
            path: env::var("CATALOG_PATH").ok().filter(|p| !p.trim().is_empty()),
        }
    }

    /// Returns the catalog JSON document.
    pub fn load(&self) -> anyhow::Result<String> {
        match &self.path {
            Some(path) => std::fs::read_to_string(path)
                .map_err(|e| anyhow::anyhow!("cannot read catalog {}: {}", path, e)),
            None => Ok(BUNDLED_CATALOG.to_string()),
        }
    }
}
