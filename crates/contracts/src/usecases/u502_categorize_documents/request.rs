use crate::domain::a001_document::Document;
use serde::{Deserialize, Serialize};

/// `/update_document_category` body; `None` removes the category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateCategoryRequest {
    pub doc_id: String,
    pub category: Option<String>,
}

/// `/cluster_documents` body.
/// Without `api_key` the backend falls back to the stored key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterRequest {
    pub documents: Vec<Document>,

    pub api_key: Option<String>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub instructions: String,
}

impl ClusterRequest {
    /// One-document request used to check that a key is accepted
    pub fn key_check(api_key: &str) -> Self {
        Self {
            documents: vec![Document::new("test", "Test", "Test document")],
            api_key: Some(api_key.to_string()),
            instructions: String::new(),
        }
    }
}

/// `/organize_documents_with_ai` body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganizeRequest {
    /// Uncategorized documents only
    pub documents: Vec<Document>,
    pub categories: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_category_sends_null() {
        let req = UpdateCategoryRequest {
            doc_id: "d1".into(),
            category: None,
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            serde_json::json!({"doc_id": "d1", "category": null})
        );
    }

    #[test]
    fn test_cluster_request_without_key() {
        let req = ClusterRequest {
            documents: vec![],
            api_key: None,
            instructions: String::new(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert!(json["api_key"].is_null());
        assert!(json.get("instructions").is_none());
    }

    #[test]
    fn test_key_check_has_one_document() {
        let req = ClusterRequest::key_check("sk-123");
        assert_eq!(req.documents.len(), 1);
        assert_eq!(req.api_key.as_deref(), Some("sk-123"));
    }
}
