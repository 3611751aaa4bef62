use reqwest::{Client, Url};

use business::domain::shared::value_objects::{ProductId, SessionId};

/// Header carrying the shopping session on every cart request.
pub const SESSION_HEADER: &str = "X-Session-Id";

/// Shared HTTP client configuration for the storefront API.
pub struct StorefrontClient {
    pub client: Client,
    pub base_url: String,
    pub session_id: SessionId,
}

impl StorefrontClient {
    pub fn new(base_url: impl Into<String>, session_id: SessionId) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session_id,
        }
    }

    pub fn products_url(&self) -> String {
        format!("{}/products", self.base_url)
    }

    pub fn cart_url(&self) -> String {
        format!("{}/cart", self.base_url)
    }

    pub fn cart_items_url(&self) -> String {
        format!("{}/cart/items", self.base_url)
    }

    /// The product id is percent-encoded as a single path segment. `None`
    /// when the base URL cannot carry a path.
    pub fn cart_item_url(&self, product_id: &ProductId) -> Option<Url> {
        let mut url = Url::parse(&self.cart_items_url()).ok()?;
        url.path_segments_mut().ok()?.push(product_id.as_str());
        Some(url)
    }
}
