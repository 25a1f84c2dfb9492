//! Product Requests

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use catalog_app::domain::products::data::{NewProduct, ProductUpdate, ValidationError};

use crate::errors::ApiError;

/// Body accepted by create and update.
///
/// Every field is optional at the JSON level so that a missing name or price
/// is reported as a validation failure rather than a parse failure.
#[derive(Debug, Default, Serialize, Deserialize)]
pub(crate) struct ProductRequest {
    pub name: Option<String>,
    pub price: Option<Decimal>,
    pub description: Option<String>,
}

impl ProductRequest {
    fn into_fields(self) -> Result<(String, Decimal, Option<String>), ApiError> {
        let name = self
            .name
            .ok_or_else(|| ApiError::BadRequest(ValidationError::MissingName.to_string()))?;

        let price = self
            .price
            .ok_or_else(|| ApiError::BadRequest("price is required".to_string()))?;

        Ok((name, price, self.description))
    }
}

impl TryFrom<ProductRequest> for NewProduct {
    type Error = ApiError;

    fn try_from(request: ProductRequest) -> Result<Self, Self::Error> {
        let (name, price, description) = request.into_fields()?;

        Ok(NewProduct {
            name,
            price,
            description,
        })
    }
}

impl TryFrom<ProductRequest> for ProductUpdate {
    type Error = ApiError;

    fn try_from(request: ProductRequest) -> Result<Self, Self::Error> {
        let (name, price, description) = request.into_fields()?;

        Ok(ProductUpdate {
            name,
            price,
            description,
        })
    }
}
