use async_trait::async_trait;
use reqwest::{Response, StatusCode};

use business::domain::cart::model::{Cart, CartItem};
use business::domain::cart_mutation::store::{CartStore, StoreFailure};
use business::domain::shared::value_objects::ProductId;

use crate::client::{SESSION_HEADER, StorefrontClient};
use crate::dto::{CartDto, CartItemDto, ErrorResponseDto};

/// [`CartStore`] backed by the storefront REST API.
pub struct CartStoreHttp {
    client: StorefrontClient,
}

impl CartStoreHttp {
    pub fn new(client: StorefrontClient) -> Self {
        Self { client }
    }

    async fn read_cart(response: Response) -> Result<Cart, StoreFailure> {
        if !response.status().is_success() {
            return Err(Self::read_failure(response).await);
        }

        let body: CartDto = response.json().await.map_err(|e| {
            tracing::warn!("Unreadable cart body: {}", e);
            StoreFailure::unknown()
        })?;
        body.into_domain()
    }

    async fn read_failure(response: Response) -> StoreFailure {
        let status = response.status();
        match response.json::<ErrorResponseDto>().await {
            Ok(body) => {
                tracing::debug!("Store answered {} {}", status, body.name);
                StoreFailure::from(body)
            }
            Err(_) => {
                tracing::debug!("Store answered {} without error body", status);
                StoreFailure::unknown()
            }
        }
    }
}

fn transport_failure(error: reqwest::Error) -> StoreFailure {
    tracing::warn!("Storefront request failed: {}", error);
    StoreFailure::unknown()
}

#[async_trait]
impl CartStore for CartStoreHttp {
    async fn add_item(&self, item: &CartItem) -> Result<Cart, StoreFailure> {
        let response = self
            .client
            .client
            .post(self.client.cart_items_url())
            .header(SESSION_HEADER, self.client.session_id.as_str())
            .json(&CartItemDto::from(item))
            .send()
            .await
            .map_err(transport_failure)?;

        Self::read_cart(response).await
    }

    async fn remove_item(&self, product_id: &ProductId) -> Result<Cart, StoreFailure> {
        let url = self.client.cart_item_url(product_id).ok_or_else(|| {
            tracing::warn!("Cannot build removal URL from {}", self.client.base_url);
            StoreFailure::unknown()
        })?;
        let response = self
            .client
            .client
            .delete(url)
            .header(SESSION_HEADER, self.client.session_id.as_str())
            .send()
            .await
            .map_err(transport_failure)?;

        Self::read_cart(response).await
    }

    async fn get_cart(&self) -> Result<Option<Cart>, StoreFailure> {
        let response = self
            .client
            .client
            .get(self.client.cart_url())
            .header(SESSION_HEADER, self.client.session_id.as_str())
            .send()
            .await
            .map_err(transport_failure)?;

        if response.status() == StatusCode::NO_CONTENT {
            return Ok(None);
        }
        Self::read_cart(response).await.map(Some)
    }
}
