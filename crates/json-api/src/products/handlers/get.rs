//! Get Product Handler

use std::sync::Arc;

use salvo::prelude::*;

use catalog_app::domain::products::records::ProductId;

use crate::{
    errors::ApiError,
    extensions::*,
    products::{ProductResponse, errors::into_api_error},
    state::State,
};

/// Get Product Handler
#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let product = ProductId::from_i64(req.id_param_or_400("id")?);

    let record = state
        .app
        .products
        .get_product(product)
        .await
        .map_err(|error| into_api_error(error, Some(product)))?;

    Ok(Json(record.into()))
}
