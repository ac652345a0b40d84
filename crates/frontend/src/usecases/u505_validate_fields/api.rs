use crate::shared::remote;
use contracts::shared::error::ApiError;
use contracts::usecases::common::Ack;
use contracts::usecases::u505_validate_fields::{ExportFormat, JustifyRequest, JustifyResponse};

pub async fn justify_field(request: &JustifyRequest) -> Result<JustifyResponse, ApiError> {
    remote::post_json("/justify_field", request).await
}

/// Exported file content
pub async fn export_data(format: ExportFormat) -> Result<Vec<u8>, ApiError> {
    remote::get_bytes(&format.path()).await
}

/// Clears every document, category and catalog held by the backend
pub async fn reset_all() -> Result<Ack, ApiError> {
    remote::post_empty("/reset_all").await
}
