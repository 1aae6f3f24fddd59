//! Catalog fetcher: one GET to the product endpoint at startup.

use crate::shared::api_utils::{decode_json, FetchError};
use contracts::domain::a001_product::aggregate::Product;
use gloo_net::http::Request;

/// Fetch the full product list
pub async fn fetch_products(url: &str) -> Result<Vec<Product>, FetchError> {
    log::debug!("Loading products: {}", url);

    let response = Request::get(url)
        .header("Accept", "application/json")
        .send()
        .await?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    let body = response
        .text()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))?;
    decode_json(&body)
}

/// Fetch failures are logged and turned into an empty catalog
pub fn catalog_or_empty(result: Result<Vec<Product>, FetchError>) -> Vec<Product> {
    match result {
        Ok(products) => {
            log::info!("Loaded {} products", products.len());
            products
        }
        Err(e) => {
            log::error!("Failed to load products: {}", e);
            Vec::new()
        }
    }
}

/// Load the catalog once. Never fails; see [`catalog_or_empty`].
pub async fn load_catalog(url: &str) -> Vec<Product> {
    catalog_or_empty(fetch_products(url).await)
}
