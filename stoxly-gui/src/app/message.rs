use crate::app::view;
use crate::services::api::{ApiError, ApiResponse, Item};

#[derive(Debug, Clone)]
pub enum Message {
    View(view::Message),
    Items(Result<Vec<Item>, ApiError>),
    Upserted(Result<ApiResponse<Item>, ApiError>),
    Deleted(Result<ApiResponse<Item>, ApiError>),
}
