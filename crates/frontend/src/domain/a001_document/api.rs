use crate::shared::remote;
use contracts::domain::a001_document::Document;
use contracts::shared::error::ApiError;
use contracts::usecases::common::Ack;
use contracts::usecases::u502_categorize_documents::{
    CategoriesResponse, DocumentsResponse, UpdateCategoryRequest,
};
use contracts::usecases::u505_validate_fields::UpdateDocumentRequest;

pub async fn get_all_documents() -> Result<Vec<Document>, ApiError> {
    let response: DocumentsResponse = remote::get_json("/get_all_documents").await?;
    Ok(response.documents)
}

pub async fn get_document(id: &str) -> Result<Document, ApiError> {
    let path = format!("/get_document/{}", urlencoding::encode(id));
    remote::get_json(&path).await
}

pub async fn get_categories() -> Result<CategoriesResponse, ApiError> {
    remote::get_json("/get_categories").await
}

/// Persists the category of one document; `None` removes it
pub async fn update_document_category(doc_id: &str, category: Option<&str>) -> Result<(), ApiError> {
    let request = UpdateCategoryRequest {
        doc_id: doc_id.to_string(),
        category: category.map(str::to_string),
    };
    let _: Ack = remote::post_json("/update_document_category", &request).await?;
    Ok(())
}

pub async fn update_document(document: Document) -> Result<(), ApiError> {
    let request = UpdateDocumentRequest { document };
    let _: Ack = remote::post_json("/update_document", &request).await?;
    Ok(())
}
