use crate::shared::remote;
use contracts::shared::error::ApiError;
use contracts::usecases::u502_categorize_documents::{
    ClusterRequest, ClusterResponse, OrganizeRequest, OrganizeResponse, VisualizationResponse,
};

pub async fn cluster_documents(request: &ClusterRequest) -> Result<ClusterResponse, ApiError> {
    remote::post_json("/cluster_documents", request).await
}

pub async fn organize_documents(request: &OrganizeRequest) -> Result<OrganizeResponse, ApiError> {
    remote::post_json("/organize_documents_with_ai", request).await
}

pub async fn get_cluster_visualization() -> Result<VisualizationResponse, ApiError> {
    remote::get_json("/get_cluster_visualization").await
}
