//! Create Product Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, prelude::*};
use tracing::info;

use catalog_app::domain::products::data::NewProduct;

use crate::{
    errors::ApiError,
    extensions::*,
    products::{ProductResponse, errors::into_api_error, requests::ProductRequest},
    state::State,
};

/// Create Product Handler
///
/// Responds `201 Created` with the stored product and its `Location`.
#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ProductResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let new_product = NewProduct::try_from(
        req.parse_json::<ProductRequest>()
            .await
            .or_400("Invalid product payload")?,
    )?;

    let record = state
        .app
        .products
        .create_product(new_product)
        .await
        .map_err(|error| into_api_error(error, None))?;

    res.add_header(LOCATION, format!("/api/products/{}", record.id), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    info!(product_id = %record.id, "created product");

    Ok(Json(record.into()))
}
