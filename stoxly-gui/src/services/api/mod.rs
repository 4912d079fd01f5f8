//! Client for the remote inventory API.

pub mod client;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Value of the `status` field of a successful [`ApiResponse`].
pub const STATUS_SUCCESS: &str = "SUCCESS";

/// Items with a stock strictly below this threshold are considered low
/// on stock.
pub const LOW_STOCK_THRESHOLD: u32 = 10;

/// An inventory item as stored by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: u64,
    pub name: String,
    pub stock: u32,
}

impl Item {
    pub fn is_low_stock(&self) -> bool {
        self.stock < LOW_STOCK_THRESHOLD
    }
}

/// Payload of the item upsert endpoint. An item with no `id` is created,
/// one with an `id` overwrites the stored item.
#[derive(Debug, Clone, Serialize)]
pub struct ItemPayload {
    pub id: Option<u64>,
    pub name: String,
    pub stock: u32,
}

/// Envelope used by every endpoint of the backend.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub status: String,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub http_status: Option<u16>,
    pub error: String,
}

impl ApiError {
    /// The backend gave no usable error payload.
    pub fn something_went_wrong(http_status: Option<u16>) -> Self {
        Self {
            http_status,
            error: "Something went wrong".to_string(),
        }
    }

    /// Extract the error detail from the body of a non-2xx response. Error
    /// bodies use the same envelope as successful ones, with the detail in
    /// `message`.
    pub fn from_error_body(http_status: u16, body: &str) -> Self {
        if let Ok(response) = serde_json::from_str::<ApiResponse<()>>(body) {
            if let Some(message) = response.message {
                return Self {
                    http_status: Some(http_status),
                    error: message,
                };
            }
        }
        Self::something_went_wrong(Some(http_status))
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if let Some(status) = self.http_status {
            write!(f, "{} (HTTP {})", self.error, status)
        } else {
            write!(f, "{}", self.error)
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        tracing::error!("API request error: {}", e);
        Self::something_went_wrong(e.status().map(|s| s.as_u16()))
    }
}

/// Interface to the inventory backend. The dashboard is generic over it so
/// tests can substitute a fake.
#[async_trait]
pub trait Inventory {
    /// Fetch every item in the stock.
    async fn list_items(&self) -> Result<Vec<Item>, ApiError>;
    /// Create an item, or overwrite one if the payload carries an id.
    async fn upsert_item(&self, payload: ItemPayload) -> Result<ApiResponse<Item>, ApiError>;
    /// Delete the item with the given id.
    async fn delete_item(&self, id: u64) -> Result<ApiResponse<Item>, ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_low_stock() {
        let item = |stock| Item {
            id: 1,
            name: "Rice".to_string(),
            stock,
        };
        assert!(item(0).is_low_stock());
        assert!(item(9).is_low_stock());
        assert!(!item(10).is_low_stock());
        assert!(!item(250).is_low_stock());
    }

    #[test]
    fn response_deserialization() {
        let response: ApiResponse<Vec<Item>> = serde_json::from_str(
            r#"{
                "status": "SUCCESS",
                "message": "Items fetched",
                "data": [{"id": 1, "name": "Wheat", "stock": 5}]
            }"#,
        )
        .unwrap();
        assert!(response.is_success());
        assert_eq!(response.data.unwrap()[0].name, "Wheat");

        let response: ApiResponse<Vec<Item>> = serde_json::from_str(
            r#"{"status": "FAILURE", "message": "No such item", "data": null}"#,
        )
        .unwrap();
        assert!(!response.is_success());
        assert_eq!(response.message.as_deref(), Some("No such item"));
    }

    #[test]
    fn error_from_failed_request_body() {
        let error =
            ApiError::from_error_body(404, r#"{"status": "FAILURE", "message": "No such item"}"#);
        assert_eq!(error.error, "No such item");
        assert_eq!(error.http_status, Some(404));

        let error = ApiError::from_error_body(500, "<html>Internal Server Error</html>");
        assert_eq!(error.error, "Something went wrong");
        assert_eq!(error.http_status, Some(500));
    }
}
