//! Product form buffer.

use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::api::{Product, ProductPayload};

/// What submitting the form will do.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormIntent {
    #[default]
    Create,
    Edit {
        id: i64,
    },
}

/// Reasons the form cannot be turned into a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Name is required")]
    MissingName,

    #[error("Price must be a number")]
    InvalidPrice,
}

/// Raw text as typed into the inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub name: String,
    pub price: String,
    pub description: String,
}

impl ProductForm {
    /// Validate the text fields and build the request body.
    ///
    /// # Errors
    ///
    /// Returns [`FormError`] for a blank name or a price that is not a decimal.
    pub fn to_payload(&self) -> Result<ProductPayload, FormError> {
        let name = self.name.trim();

        if name.is_empty() {
            return Err(FormError::MissingName);
        }

        let price = Decimal::from_str(self.price.trim()).map_err(|_parse| FormError::InvalidPrice)?;

        let description = self.description.trim();

        Ok(ProductPayload {
            name: name.to_string(),
            price,
            description: (!description.is_empty()).then(|| description.to_string()),
        })
    }
}

impl From<&Product> for ProductForm {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            price: product.price.normalize().to_string(),
            description: product.description.clone().unwrap_or_default(),
        }
    }
}
