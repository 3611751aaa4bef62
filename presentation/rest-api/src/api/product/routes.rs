use std::sync::Arc;

use poem_openapi::{OpenApi, param::Query, payload::Json};

use business::domain::product::errors::ProductError;
use business::domain::product::model::Product;
use business::domain::product::use_cases::get_all::GetAllProductsUseCase;
use business::domain::product::use_cases::search::{SearchProductsParams, SearchProductsUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::ProductResponse;
use crate::api::tags::ApiTags;

pub struct ProductApi {
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    search_use_case: Arc<dyn SearchProductsUseCase>,
}

impl ProductApi {
    pub fn new(
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        search_use_case: Arc<dyn SearchProductsUseCase>,
    ) -> Self {
        Self {
            get_all_use_case,
            search_use_case,
        }
    }
}

/// Product catalog API
#[OpenApi]
impl ProductApi {
    /// List or search the catalog
    ///
    /// Without criteria every product is returned, in-stock products first.
    /// With any criterion only matching products are returned, newest first
    /// unless `sort` says otherwise. `all` leaves a criterion unset.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn get_all_products(
        &self,
        /// Fragment of the product name
        q: Query<Option<String>>,
        /// Exact category
        category: Query<Option<String>>,
        /// Price range, e.g. `1-50`
        price: Query<Option<String>>,
        /// Minimum average rating
        rating: Query<Option<String>>,
        /// `newest`, `lowest`, `highest` or `rating`
        sort: Query<Option<String>>,
    ) -> GetAllProductsResponse {
        let params = SearchProductsParams {
            query: q.0,
            category: category.0,
            price_range: price.0,
            min_rating: rating.0,
            sort: sort.0,
        };
        let has_criteria = params.query.is_some()
            || params.category.is_some()
            || params.price_range.is_some()
            || params.min_rating.is_some()
            || params.sort.is_some();

        let result = if has_criteria {
            self.search_use_case.execute(params).await
        } else {
            self.get_all_use_case.execute().await
        };
        GetAllProductsResponse::from_result(result)
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl GetAllProductsResponse {
    fn from_result(result: Result<Vec<Product>, ProductError>) -> Self {
        match result {
            Ok(products) => {
                let responses: Vec<ProductResponse> =
                    products.into_iter().map(|p| p.into()).collect();
                GetAllProductsResponse::Ok(Json(responses))
            }
            Err(err) => match err.into_error_response() {
                (status, json) if status.is_client_error() => {
                    GetAllProductsResponse::BadRequest(json)
                }
                (_, json) => GetAllProductsResponse::InternalError(json),
            },
        }
    }
}
