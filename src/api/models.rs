use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::core::errors::SplitterError;
use crate::core::models::BalanceSummary;

// Request structs for JSON payloads
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateGroupRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub member_ids: Vec<String>,
    /// Defaults to the configured current user.
    #[serde(default)]
    pub created_by_id: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BalanceResponse {
    pub user_id: String,
    /// Absent for the balance across all groups.
    pub group_id: Option<String>,
    pub summary: BalanceSummary,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

// Newtype wrapper for SplitterError to implement IntoResponse
pub struct ApiError(pub SplitterError);

impl From<SplitterError> for ApiError {
    fn from(err: SplitterError) -> Self {
        ApiError(err)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            SplitterError::InvalidExpenseInput(..) | SplitterError::InvalidGroupInput(..) => {
                StatusCode::BAD_REQUEST
            }
            SplitterError::UnknownReference(..) => StatusCode::NOT_FOUND,
            SplitterError::StorageError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let error_message = match self.0 {
            SplitterError::InvalidExpenseInput(_, detail) | SplitterError::InvalidGroupInput(_, detail) => {
                format!("{}: {}", detail.title, detail.description)
            }
            SplitterError::UnknownReference(kind, id) => format!("Unknown {} {}", kind, id),
            SplitterError::StorageError(msg) => {
                log::error!("Storage failure while handling request: {}", msg);
                format!("Storage error: {}", msg)
            }
        };
        (status, Json(ErrorResponse { error: error_message })).into_response()
    }
}
