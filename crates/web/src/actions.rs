//! HTTP round trips behind each user action.
//!
//! Every mutation is followed by a full list re-fetch so the page always
//! shows what the server has.

use crate::{
    api::{ApiError, CatalogApi, Product, ProductPayload},
    form::FormIntent,
    state::{ClientError, Submission},
};

pub async fn refresh(api: &dyn CatalogApi) -> Result<Vec<Product>, ApiError> {
    api.list_products().await
}

async fn refetch(api: &dyn CatalogApi) -> Result<Vec<Product>, ClientError> {
    refresh(api).await.map_err(ClientError::Refresh)
}

pub async fn create(
    api: &dyn CatalogApi,
    payload: &ProductPayload,
) -> Result<Vec<Product>, ClientError> {
    api.create_product(payload)
        .await
        .map_err(ClientError::Rejected)?;

    refetch(api).await
}

pub async fn update(
    api: &dyn CatalogApi,
    id: i64,
    payload: &ProductPayload,
) -> Result<Vec<Product>, ClientError> {
    api.update_product(id, payload)
        .await
        .map_err(ClientError::Rejected)?;

    refetch(api).await
}

/// Send the form to whichever endpoint its intent names.
pub async fn submit(
    api: &dyn CatalogApi,
    submission: &Submission,
) -> Result<Vec<Product>, ClientError> {
    match submission.intent {
        FormIntent::Create => create(api, &submission.payload).await,
        FormIntent::Edit { id } => update(api, id, &submission.payload).await,
    }
}

/// Delete after `confirm` agrees. Returns `None`, without any request, when
/// it does not.
pub async fn delete(
    api: &dyn CatalogApi,
    id: i64,
    confirm: impl FnOnce() -> bool,
) -> Option<Result<Vec<Product>, ClientError>> {
    if !confirm() {
        return None;
    }

    let deleted = api.delete_product(id).await.map_err(ClientError::Rejected);

    Some(match deleted {
        Ok(()) => refetch(api).await,
        Err(error) => Err(error),
    })
}
