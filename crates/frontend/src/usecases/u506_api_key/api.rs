use crate::shared::remote;
use contracts::shared::error::ApiError;
use contracts::usecases::common::Ack;
use contracts::usecases::u502_categorize_documents::{ClusterRequest, ClusterResponse};
use contracts::usecases::u506_api_key::{ApiKeyStatus, SaveApiKeyRequest};

pub async fn get_api_key_status() -> Result<ApiKeyStatus, ApiError> {
    remote::get_json("/api_key").await
}

pub async fn save_api_key(request: &SaveApiKeyRequest) -> Result<(), ApiError> {
    let _: Ack = remote::post_json("/api_key", request).await?;
    Ok(())
}

/// Checks a key with a one-document clustering request
pub async fn test_api_key(api_key: &str) -> Result<(), ApiError> {
    let _: ClusterResponse =
        remote::post_json("/cluster_documents", &ClusterRequest::key_check(api_key)).await?;
    Ok(())
}
