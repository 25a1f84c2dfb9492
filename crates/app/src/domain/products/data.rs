//! Products Data

use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

/// Prices are stored with cents.
const PRICE_SCALE: u32 = 2;

/// Exclusive upper bound (10^13) of the `NUMERIC(15, 2)` price column. Every
/// price below it survives a round trip through a JSON (`f64`) number.
const MAX_PRICE_EXCLUSIVE: Decimal = Decimal::from_parts(1_316_134_912, 2_328, 0, false, 0);

/// New Product Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub price: Decimal,
    pub description: Option<String>,
}

/// Product Update Data
#[derive(Debug, Clone, PartialEq)]
pub struct ProductUpdate {
    pub name: String,
    pub price: Decimal,
    pub description: Option<String>,
}

/// Reasons a product payload is rejected before it reaches storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("name is required")]
    MissingName,

    #[error("price must not be negative")]
    NegativePrice,

    #[error("price is out of range")]
    PriceOutOfRange,
}

impl NewProduct {
    /// Check the payload against the catalog's field rules, returning it with
    /// the price rounded to cents as it will be stored.
    ///
    /// # Errors
    ///
    /// Returns the first rule the payload breaks.
    pub fn validated(self) -> Result<Self, ValidationError> {
        let price = validate_fields(&self.name, self.price)?;

        Ok(Self { price, ..self })
    }
}

impl ProductUpdate {
    /// Check the payload against the catalog's field rules, returning it with
    /// the price rounded to cents as it will be stored.
    ///
    /// # Errors
    ///
    /// Returns the first rule the payload breaks.
    pub fn validated(self) -> Result<Self, ValidationError> {
        let price = validate_fields(&self.name, self.price)?;

        Ok(Self { price, ..self })
    }
}

/// Range checks run on the rounded price, since that is what the column holds.
fn validate_fields(name: &str, price: Decimal) -> Result<Decimal, ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::MissingName);
    }

    let price = price.round_dp_with_strategy(PRICE_SCALE, RoundingStrategy::MidpointAwayFromZero);

    if price < Decimal::ZERO {
        return Err(ValidationError::NegativePrice);
    }

    if price >= MAX_PRICE_EXCLUSIVE {
        return Err(ValidationError::PriceOutOfRange);
    }

    Ok(price)
}
