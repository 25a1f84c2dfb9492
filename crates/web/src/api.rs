//! Typed HTTP client for the catalog API.

use async_trait::async_trait;
use jiff::Timestamp;
#[cfg(test)]
use mockall::automock;
use reqwest::{Client, Response};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;

/// Used when `CATALOG_API_URL` is not set at build time.
pub const DEFAULT_API_URL: &str = "http://localhost:8698/api/products";

/// A product as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub description: Option<String>,
    pub created_at: Timestamp,
}

impl Product {
    /// Identity of a rendered row. Any field change yields a new key, so an
    /// edited product is re-rendered rather than kept from the last list.
    pub fn row_key(&self) -> (i64, String, Decimal, Option<String>, Timestamp) {
        (
            self.id,
            self.name.clone(),
            self.price,
            self.description.clone(),
            self.created_at,
        )
    }
}

/// Body sent on create and update.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductPayload {
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub description: Option<String>,
}

/// Why a request did not produce the expected value.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("server responded with status {0}")]
    Status(u16),

    #[error("could not decode response: {0}")]
    Decode(#[source] reqwest::Error),
}

/// The catalog operations the page drives.
#[cfg_attr(test, automock)]
#[async_trait(?Send)]
pub trait CatalogApi {
    async fn list_products(&self) -> Result<Vec<Product>, ApiError>;

    async fn create_product(&self, payload: &ProductPayload) -> Result<Product, ApiError>;

    async fn update_product(&self, id: i64, payload: &ProductPayload)
    -> Result<Product, ApiError>;

    async fn delete_product(&self, id: i64) -> Result<(), ApiError>;
}

/// [`CatalogApi`] over `fetch` (in the browser) via `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpCatalogApi {
    client: Client,
    base_url: String,
}

impl HttpCatalogApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Point at `CATALOG_API_URL` as it was when the client was compiled.
    pub fn from_build_env() -> Self {
        Self::new(option_env!("CATALOG_API_URL").unwrap_or(DEFAULT_API_URL))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn product_url(&self, id: i64) -> String {
        format!("{}/{id}", self.base_url)
    }
}

fn expect_success(response: Result<Response, reqwest::Error>) -> Result<Response, ApiError> {
    let response = response.map_err(ApiError::Transport)?;
    let status = response.status();

    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status(status.as_u16()))
    }
}

async fn decode<T: DeserializeOwned>(
    response: Result<Response, reqwest::Error>,
) -> Result<T, ApiError> {
    expect_success(response)?
        .json::<T>()
        .await
        .map_err(ApiError::Decode)
}

#[async_trait(?Send)]
impl CatalogApi for HttpCatalogApi {
    async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        decode(self.client.get(&self.base_url).send().await).await
    }

    async fn create_product(&self, payload: &ProductPayload) -> Result<Product, ApiError> {
        decode(self.client.post(&self.base_url).json(payload).send().await).await
    }

    async fn update_product(
        &self,
        id: i64,
        payload: &ProductPayload,
    ) -> Result<Product, ApiError> {
        decode(
            self.client
                .put(self.product_url(id))
                .json(payload)
                .send()
                .await,
        )
        .await
    }

    async fn delete_product(&self, id: i64) -> Result<(), ApiError> {
        expect_success(self.client.delete(self.product_url(id)).send().await)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn product_urls_hang_off_the_base_url() {
        let api = HttpCatalogApi::new("http://localhost:8698/api/products/");

        assert_eq!(api.base_url(), "http://localhost:8698/api/products");
        assert_eq!(api.product_url(4), "http://localhost:8698/api/products/4");
    }

    #[test]
    fn products_decode_from_server_json() -> TestResult {
        let product: Product = serde_json::from_value(json!({
            "id": 1,
            "name": "Pen",
            "price": 1.5,
            "description": null,
            "createdAt": "2026-03-01T09:30:00.123456Z",
        }))?;

        assert_eq!(product.price, Decimal::new(150, 2));
        assert_eq!(product.description, None);
        assert_eq!(
            product.created_at,
            "2026-03-01T09:30:00.123456Z".parse::<Timestamp>()?
        );

        Ok(())
    }

    #[test]
    fn payload_sends_price_as_a_number() -> TestResult {
        let payload = ProductPayload {
            name: "Pen".to_string(),
            price: Decimal::new(250, 2),
            description: None,
        };

        assert_eq!(
            serde_json::to_value(&payload)?,
            json!({ "name": "Pen", "price": 2.5, "description": null })
        );

        Ok(())
    }

    fn pen() -> Product {
        Product {
            id: 1,
            name: "Pen".to_string(),
            price: Decimal::new(150, 2),
            description: None,
            created_at: Timestamp::UNIX_EPOCH,
        }
    }

    #[test]
    fn edited_products_get_a_new_row_key() {
        let original = pen();
        let renamed = Product {
            name: "Pen v2".to_string(),
            ..pen()
        };
        let repriced = Product {
            price: Decimal::new(200, 2),
            ..pen()
        };
        let described = Product {
            description: Some("blue".to_string()),
            ..pen()
        };

        assert_eq!(original.row_key(), pen().row_key());

        for edited in [renamed, repriced, described] {
            assert_ne!(
                original.row_key(),
                edited.row_key(),
                "{edited:?} should not reuse the row"
            );
        }
    }

    #[test]
    fn largest_storable_price_decodes_exactly() -> TestResult {
        let product: Product = serde_json::from_str(
            r#"{"id":9,"name":"Yacht","price":9999999999999.99,"description":null,"createdAt":"2026-03-01T09:30:00Z"}"#,
        )?;

        assert_eq!(product.price, Decimal::new(999_999_999_999_999, 2));

        Ok(())
    }
}
