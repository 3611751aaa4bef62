use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Header, Path},
    payload::Json,
};

use business::domain::cart::use_cases::add_item::{AddItemToCartParams, AddItemToCartUseCase};
use business::domain::cart::use_cases::get_cart::{GetCartParams, GetCartUseCase};
use business::domain::cart::use_cases::remove_item::{
    RemoveItemFromCartParams, RemoveItemFromCartUseCase,
};
use business::domain::shared::value_objects::{ProductId, SessionId};

use crate::api::cart::dto::{CartItemRequest, CartResponse};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CartApi {
    add_item_use_case: Arc<dyn AddItemToCartUseCase>,
    remove_item_use_case: Arc<dyn RemoveItemFromCartUseCase>,
    get_cart_use_case: Arc<dyn GetCartUseCase>,
}

impl CartApi {
    pub fn new(
        add_item_use_case: Arc<dyn AddItemToCartUseCase>,
        remove_item_use_case: Arc<dyn RemoveItemFromCartUseCase>,
        get_cart_use_case: Arc<dyn GetCartUseCase>,
    ) -> Self {
        Self {
            add_item_use_case,
            remove_item_use_case,
            get_cart_use_case,
        }
    }
}

fn session(raw: &str) -> Result<SessionId, Json<ErrorResponse>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ErrorResponse::new("ValidationError", "Missing session id"));
    }
    Ok(SessionId::new(trimmed))
}

/// Shopping cart API
///
/// Every route works on the cart of the session named by `X-Session-Id`.
/// Successful mutations answer with the whole repriced cart.
#[OpenApi]
impl CartApi {
    /// Get the session cart
    ///
    /// Answers 204 when the session has no cart yet.
    #[oai(path = "/cart", method = "get", tag = "ApiTags::Cart")]
    async fn get_cart(
        &self,
        #[oai(name = "X-Session-Id")] session_id: Header<String>,
    ) -> GetCartResponse {
        let session_id = match session(&session_id.0) {
            Ok(session_id) => session_id,
            Err(json) => return GetCartResponse::BadRequest(json),
        };

        match self
            .get_cart_use_case
            .execute(GetCartParams { session_id })
            .await
        {
            Ok(Some(cart)) => GetCartResponse::Ok(Json(cart.into())),
            Ok(None) => GetCartResponse::NoContent,
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetCartResponse::InternalError(json)
            }
        }
    }

    /// Add one unit to the cart
    ///
    /// Creates the cart on first use. Fails with 409 when the product has no
    /// stock left for another unit.
    #[oai(path = "/cart/items", method = "post", tag = "ApiTags::Cart")]
    async fn add_item(
        &self,
        #[oai(name = "X-Session-Id")] session_id: Header<String>,
        body: Json<CartItemRequest>,
    ) -> MutateCartResponse {
        let session_id = match session(&session_id.0) {
            Ok(session_id) => session_id,
            Err(json) => return MutateCartResponse::BadRequest(json),
        };
        let item = match body.0.into_domain() {
            Ok(item) => item,
            Err(err) => return MutateCartResponse::from_error(err),
        };

        match self
            .add_item_use_case
            .execute(AddItemToCartParams { session_id, item })
            .await
        {
            Ok(cart) => MutateCartResponse::Ok(Json(cart.into())),
            Err(err) => MutateCartResponse::from_error(err),
        }
    }

    /// Remove one unit from the cart
    ///
    /// The line disappears when its last unit is removed.
    #[oai(
        path = "/cart/items/:product_id",
        method = "delete",
        tag = "ApiTags::Cart"
    )]
    async fn remove_item(
        &self,
        #[oai(name = "X-Session-Id")] session_id: Header<String>,
        product_id: Path<String>,
    ) -> MutateCartResponse {
        let session_id = match session(&session_id.0) {
            Ok(session_id) => session_id,
            Err(json) => return MutateCartResponse::BadRequest(json),
        };

        match self
            .remove_item_use_case
            .execute(RemoveItemFromCartParams {
                session_id,
                product_id: ProductId::new(product_id.0),
            })
            .await
        {
            Ok(cart) => MutateCartResponse::Ok(Json(cart.into())),
            Err(err) => MutateCartResponse::from_error(err),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCartResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum MutateCartResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl MutateCartResponse {
    fn from_error(err: impl IntoErrorResponse) -> Self {
        let (status, json) = err.into_error_response();
        match status.as_u16() {
            400 => MutateCartResponse::BadRequest(json),
            404 => MutateCartResponse::NotFound(json),
            409 => MutateCartResponse::Conflict(json),
            _ => MutateCartResponse::InternalError(json),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::application::cart::add_item::AddItemToCartUseCaseImpl;
    use business::application::cart::get_cart::GetCartUseCaseImpl;
    use business::application::cart::remove_item::RemoveItemFromCartUseCaseImpl;
    use business::domain::cart::pricing::PricingPolicy;
    use logger::TracingLogger;
    use persistence::cart::repository::CartRepositoryInMemory;
    use persistence::product::repository::ProductRepositoryInMemory;
    use poem::http::StatusCode;
    use poem::test::TestClient;
    use poem::{Endpoint, Route};
    use poem_openapi::OpenApiService;
    use serde_json::json;

    const CATALOG: &str = r#"[
        {"id": "sku1", "slug": "free-shirt", "name": "Free Shirt", "price": "70.00", "countInStock": 2},
        {"id": "sku2", "slug": "mug", "name": "Mug", "price": "8.50", "countInStock": 0}
    ]"#;

    fn client() -> TestClient<impl Endpoint> {
        let logger = Arc::new(TracingLogger);
        let carts = Arc::new(CartRepositoryInMemory::new());
        let products = Arc::new(ProductRepositoryInMemory::from_json(CATALOG).unwrap());

        let api = CartApi::new(
            Arc::new(AddItemToCartUseCaseImpl {
                cart_repository: carts.clone(),
                product_repository: products,
                pricing: PricingPolicy::default(),
                logger: logger.clone(),
            }),
            Arc::new(RemoveItemFromCartUseCaseImpl {
                cart_repository: carts.clone(),
                pricing: PricingPolicy::default(),
                logger: logger.clone(),
            }),
            Arc::new(GetCartUseCaseImpl {
                cart_repository: carts,
                logger,
            }),
        );
        let service = OpenApiService::new(api, "test", "0.0.0");
        TestClient::new(Route::new().nest("/", service))
    }

    fn item(product_id: &str) -> serde_json::Value {
        json!({
            "product_id": product_id,
            "slug": product_id,
            "name": "Anything",
            "price": "1.00",
            "quantity": 1
        })
    }

    #[tokio::test]
    async fn should_answer_no_content_for_new_session() {
        let client = client();

        let response = client
            .get("/cart")
            .header("X-Session-Id", "fresh")
            .send()
            .await;

        response.assert_status(StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn should_add_item_with_catalog_price() {
        let client = client();

        let response = client
            .post("/cart/items")
            .header("X-Session-Id", "s1")
            .body_json(&item("sku1"))
            .send()
            .await;

        response.assert_status_is_ok();
        let json = response.json().await;
        let cart = json.value().object();
        cart.get("item_count").assert_i64(1);
        cart.get("items_price").assert_string("70.00");
        cart.get("shipping_price").assert_string("10.00");
        cart.get("revision").assert_i64(1);
        cart.get("items").array().get(0).object().get("name").assert_string("Free Shirt");
    }

    #[tokio::test]
    async fn should_reject_addition_beyond_stock() {
        let client = client();
        for _ in 0..2 {
            client
                .post("/cart/items")
                .header("X-Session-Id", "s1")
                .body_json(&item("sku1"))
                .send()
                .await
                .assert_status_is_ok();
        }

        let response = client
            .post("/cart/items")
            .header("X-Session-Id", "s1")
            .body_json(&item("sku1"))
            .send()
            .await;

        response.assert_status(StatusCode::CONFLICT);
        let json = response.json().await;
        json.value().object().get("message").assert_string("Not enough stock");
    }

    #[tokio::test]
    async fn should_answer_not_found_for_unknown_product() {
        let client = client();

        let response = client
            .post("/cart/items")
            .header("X-Session-Id", "s1")
            .body_json(&item("sku9"))
            .send()
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_reject_blank_session() {
        let client = client();

        let response = client.get("/cart").header("X-Session-Id", "  ").send().await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_drop_line_when_last_unit_removed() {
        let client = client();
        client
            .post("/cart/items")
            .header("X-Session-Id", "s1")
            .body_json(&item("sku1"))
            .send()
            .await
            .assert_status_is_ok();

        let response = client
            .delete("/cart/items/sku1")
            .header("X-Session-Id", "s1")
            .send()
            .await;

        response.assert_status_is_ok();
        let json = response.json().await;
        let cart = json.value().object();
        cart.get("item_count").assert_i64(0);
        cart.get("total_price").assert_string("0.00");
        cart.get("revision").assert_i64(2);
    }

    #[tokio::test]
    async fn should_answer_not_found_when_removing_from_missing_cart() {
        let client = client();

        let response = client
            .delete("/cart/items/sku1")
            .header("X-Session-Id", "nobody")
            .send()
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
        let json = response.json().await;
        json.value().object().get("message").assert_string("Cart not found");
    }
}
