//! Delete Product Handler

use std::sync::Arc;

use salvo::prelude::*;
use tracing::info;

use catalog_app::domain::products::records::ProductId;

use crate::{
    errors::{ApiError, MessageResponse},
    extensions::*,
    products::errors::into_api_error,
    state::State,
};

/// Delete Product Handler
///
/// Responds with a message naming the removed product.
#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<MessageResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let product = ProductId::from_i64(req.id_param_or_400("id")?);

    let record = state
        .app
        .products
        .delete_product(product)
        .await
        .map_err(|error| into_api_error(error, Some(product)))?;

    info!(product_id = %product, "deleted product");

    Ok(Json(MessageResponse::new(format!(
        "Deleted product {}",
        record.name
    ))))
}
