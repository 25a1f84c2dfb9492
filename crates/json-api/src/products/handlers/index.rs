//! Product Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{errors::ApiError, extensions::*, products::ProductResponse, state::State};

/// Product Index Handler
///
/// Returns every product, newest first.
#[handler]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<ProductResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let products = state
        .app
        .products
        .list_products()
        .await
        .or_500("failed to list products")?;

    Ok(Json(products.into_iter().map(Into::into).collect()))
}
