use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CACHE_CONTROL, EXPIRES, PRAGMA};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::services::api::{ApiError, ApiResponse, Inventory, Item, ItemPayload};

/// HTTP client for the inventory backend.
#[derive(Debug, Clone)]
pub struct InventoryClient {
    http: reqwest::Client,
    base_url: String,
}

impl InventoryClient {
    pub fn new(base_url: String) -> Self {
        // The backend sits behind a caching proxy, so ask for fresh data on
        // every request.
        let mut headers = HeaderMap::new();
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));
        headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));
        headers.insert(EXPIRES, HeaderValue::from_static("0"));
        Self {
            http: reqwest::Client::builder()
                .default_headers(headers)
                .build()
                .expect("failed to build the http client"),
            base_url,
        }
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), endpoint)
    }

    async fn get_data<T: DeserializeOwned>(
        &self,
        endpoint: &str,
    ) -> Result<ApiResponse<T>, ApiError> {
        let url = self.url(endpoint);
        tracing::debug!("GET {}", url);
        let response = self.http.get(&url).send().await?;
        Self::unwrap_envelope(response).await
    }

    async fn post_data<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<ApiResponse<T>, ApiError> {
        let url = self.url(endpoint);
        tracing::debug!("POST {}", url);
        let response = self.http.post(&url).json(body).send().await?;
        Self::unwrap_envelope(response).await
    }

    async fn unwrap_envelope<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<ApiResponse<T>, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_error_body(status.as_u16(), &body));
        }
        Ok(response.json::<ApiResponse<T>>().await?)
    }
}

#[async_trait]
impl Inventory for InventoryClient {
    async fn list_items(&self) -> Result<Vec<Item>, ApiError> {
        let response: ApiResponse<Vec<Item>> = self.get_data("get/allitems").await?;
        if !response.is_success() {
            return Err(ApiError {
                http_status: None,
                error: response
                    .message
                    .unwrap_or_else(|| "Something went wrong".to_string()),
            });
        }
        Ok(response.data.unwrap_or_default())
    }

    async fn upsert_item(&self, payload: ItemPayload) -> Result<ApiResponse<Item>, ApiError> {
        self.post_data("add/item", &payload).await
    }

    async fn delete_item(&self, id: u64) -> Result<ApiResponse<Item>, ApiError> {
        self.get_data(&format!("delete/item/{}", id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_urls() {
        let client = InventoryClient::new("http://localhost:8080/api/v1/".to_string());
        assert_eq!(
            client.url("get/allitems"),
            "http://localhost:8080/api/v1/get/allitems"
        );
        assert_eq!(
            client.url("delete/item/42"),
            "http://localhost:8080/api/v1/delete/item/42"
        );
    }
}
