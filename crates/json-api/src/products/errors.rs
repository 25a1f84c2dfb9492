//! Product Errors

use tracing::error;

use catalog_app::domain::products::{ProductsServiceError, records::ProductId};

use crate::errors::ApiError;

const INVALID_PAYLOAD: &str = "Invalid product payload";

/// Translate a service failure for the product the request addressed.
pub(crate) fn into_api_error(error: ProductsServiceError, product: Option<ProductId>) -> ApiError {
    match error {
        ProductsServiceError::NotFound => match product {
            Some(product) => ApiError::NotFound(format!("Product with ID {product} does not exist")),
            None => ApiError::NotFound("Product does not exist".to_string()),
        },
        ProductsServiceError::Invalid(reason) => ApiError::BadRequest(reason.to_string()),
        ProductsServiceError::MissingRequiredData | ProductsServiceError::InvalidData => {
            ApiError::BadRequest(INVALID_PAYLOAD.to_string())
        }
        ProductsServiceError::Sql(source) => {
            error!("product storage failure: {source}");

            ApiError::Internal
        }
    }
}
