use crate::shared::remote;
use contracts::shared::error::ApiError;
use contracts::usecases::u503_define_catalog::{
    DescriptionsRequest, DescriptionsResponse, GenerateAllFieldsRequest,
    GenerateAllFieldsResponse, GenerateFieldsRequest, GenerateFieldsResponse,
};

pub async fn generate_fields(request: &GenerateFieldsRequest) -> Result<GenerateFieldsResponse, ApiError> {
    remote::post_json("/generate_fields", request).await
}

pub async fn generate_all_fields(
    request: &GenerateAllFieldsRequest,
) -> Result<GenerateAllFieldsResponse, ApiError> {
    remote::post_json("/generate_all_fields", request).await
}

pub async fn generate_descriptions(
    request: &DescriptionsRequest,
) -> Result<DescriptionsResponse, ApiError> {
    remote::post_json("/generate_field_descriptions", request).await
}
