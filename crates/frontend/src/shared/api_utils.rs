//! HTTP helpers for the static data files.

use contracts::domain::a001_dungeon::CatalogError;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Why a data source could not finish loading
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("request to {url} failed: {message}")]
    Request { url: String, message: String },

    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("failed to parse {url}: {message}")]
    Decode { url: String, message: String },

    #[error("invalid catalog: {0}")]
    Catalog(#[from] CatalogError),
}

/// GET a JSON document and decode it
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, LoadError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| LoadError::Request {
            url: url.to_string(),
            message: e.to_string(),
        })?;

    if !response.ok() {
        return Err(LoadError::Status {
            url: url.to_string(),
            status: response.status(),
        });
    }

    response.json::<T>().await.map_err(|e| LoadError::Decode {
        url: url.to_string(),
        message: e.to_string(),
    })
}
