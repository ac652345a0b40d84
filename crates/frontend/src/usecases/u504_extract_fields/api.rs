use crate::shared::remote;
use contracts::shared::error::ApiError;
use contracts::usecases::u504_extract_fields::{ExtractRequest, ExtractResponse};

pub async fn extract_fields(request: &ExtractRequest) -> Result<ExtractResponse, ApiError> {
    remote::post_json("/extract_fields", request).await
}
