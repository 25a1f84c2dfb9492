//! Update Product Handler

use std::sync::Arc;

use salvo::prelude::*;
use tracing::info;

use catalog_app::domain::products::{data::ProductUpdate, records::ProductId};

use crate::{
    errors::ApiError,
    extensions::*,
    products::{ProductResponse, errors::into_api_error, requests::ProductRequest},
    state::State,
};

/// Update Product Handler
///
/// Overwrites name, price and description. Id and creation time are kept.
#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let product = ProductId::from_i64(req.id_param_or_400("id")?);

    let update = ProductUpdate::try_from(
        req.parse_json::<ProductRequest>()
            .await
            .or_400("Invalid product payload")?,
    )?;

    let record = state
        .app
        .products
        .update_product(product, update)
        .await
        .map_err(|error| into_api_error(error, Some(product)))?;

    info!(product_id = %product, "updated product");

    Ok(Json(record.into()))
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use catalog_app::domain::products::{MockProductsService, ProductsServiceError};

    use crate::{
        errors::MessageResponse,
        test_helpers::{make_product, products_service},
    };

    use super::*;

    fn make_service(repo: MockProductsService) -> Service {
        products_service(repo, Router::with_path("api/products/{id}").put(handler))
    }

    #[tokio::test]
    async fn test_update_product_returns_updated_record() -> TestResult {
        let mut updated = make_product(5);

        updated.name = "Pen v2".to_string();
        updated.price = Decimal::new(200, 2);
        updated.description = Some("blue".to_string());

        let expected = ProductResponse::from(updated.clone());

        let mut repo = MockProductsService::new();

        repo.expect_update_product()
            .once()
            .withf(|product, update| {
                *product == ProductId::from_i64(5)
                    && *update
                        == ProductUpdate {
                            name: "Pen v2".to_string(),
                            price: Decimal::new(200, 2),
                            description: Some("blue".to_string()),
                        }
            })
            .return_once(move |_, _| Ok(updated));

        let mut res = TestClient::put("http://example.com/api/products/5")
            .json(&json!({ "name": "Pen v2", "price": 2.00, "description": "blue" }))
            .send(&make_service(repo))
            .await;

        let body: ProductResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body, expected);

        Ok(())
    }

    #[tokio::test]
    async fn test_update_missing_product_returns_404() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_update_product()
            .once()
            .return_once(|_, _| Err(ProductsServiceError::NotFound));

        let mut res = TestClient::put("http://example.com/api/products/404")
            .json(&json!({ "name": "Ghost", "price": 1 }))
            .send(&make_service(repo))
            .await;

        let body: MessageResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(body.message, "Product with ID 404 does not exist");

        Ok(())
    }

    #[tokio::test]
    async fn test_update_non_numeric_id_returns_400() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_update_product().never();

        let res = TestClient::put("http://example.com/api/products/abc")
            .json(&json!({ "name": "Pen", "price": 1 }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_missing_name_returns_400() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_update_product().never();

        let mut res = TestClient::put("http://example.com/api/products/5")
            .json(&json!({ "price": 1 }))
            .send(&make_service(repo))
            .await;

        let body: MessageResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body.message, "name is required");

        Ok(())
    }
}
