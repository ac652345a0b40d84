use crate::domain::a001_document::Document;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// `/get_all_documents` response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentsResponse {
    #[serde(default)]
    pub documents: Vec<Document>,
}

/// `/get_categories` response: category name → documents
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoriesResponse {
    #[serde(default)]
    pub categories: IndexMap<String, Vec<Document>>,
}

/// `/cluster_documents` response. Clustering is applied server-side, the
/// cluster description is not interpreted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClusterResponse {
    #[serde(default)]
    pub clusters: serde_json::Value,
}

/// Category proposed for one document; `None` when the AI found no match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizedDocument {
    pub id: String,
    pub category: Option<String>,
}

/// `/organize_documents_with_ai` response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrganizeResponse {
    #[serde(default)]
    pub success: bool,

    #[serde(default)]
    pub organized_documents: Vec<OrganizedDocument>,
}

/// `/get_cluster_visualization` response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisualizationResponse {
    /// Base64-encoded PNG
    pub visualization: String,
}

impl VisualizationResponse {
    pub fn data_url(&self) -> String {
        format!("data:image/png;base64,{}", self.visualization)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_keep_backend_order() {
        let res: CategoriesResponse = serde_json::from_str(
            r#"{"categories": {"Notes": [{"id": "n1"}], "Factures": []}}"#,
        )
        .unwrap();
        let names: Vec<_> = res.categories.keys().cloned().collect();
        assert_eq!(names, vec!["Notes", "Factures"]);
        assert_eq!(res.categories["Notes"][0].id, "n1");
    }

    #[test]
    fn test_organize_response_with_null_category() {
        let res: OrganizeResponse = serde_json::from_str(
            r#"{"success": true, "organized_documents": [{"id": "a", "category": "Factures"}, {"id": "b", "category": null}]}"#,
        )
        .unwrap();
        assert_eq!(res.organized_documents[1].category, None);
    }

    #[test]
    fn test_visualization_data_url() {
        let res = VisualizationResponse {
            visualization: "iVBOR".into(),
        };
        assert_eq!(res.data_url(), "data:image/png;base64,iVBOR");
    }
}
