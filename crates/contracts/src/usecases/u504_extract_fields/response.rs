use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Extraction outcome for one document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentExtraction {
    pub success: bool,

    #[serde(default)]
    pub document_title: String,

    #[serde(default)]
    pub extracted_fields: IndexMap<String, serde_json::Value>,

    #[serde(default)]
    pub field_count: usize,

    #[serde(default)]
    pub error: Option<String>,
}

/// `/extract_fields` response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractResponse {
    /// Document id → outcome
    #[serde(default)]
    pub results: IndexMap<String, DocumentExtraction>,

    #[serde(default)]
    pub total_documents: usize,

    #[serde(default)]
    pub processed_documents: usize,

    #[serde(default)]
    pub total_fields_extracted: usize,
}

impl ExtractResponse {
    pub fn errors(&self) -> usize {
        self.total_documents.saturating_sub(self.processed_documents)
    }

    pub fn progress_text(&self) -> String {
        format!(
            "Terminé: {}/{} documents traités",
            self.processed_documents, self.total_documents
        )
    }

    pub fn success_message(&self) -> String {
        format!(
            "Extraction terminée: {} documents traités avec succès",
            self.processed_documents
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_counts() {
        let res: ExtractResponse = serde_json::from_str(
            r#"{"results": {
                "d1": {"success": true, "document_title": "Facture", "extracted_fields": {"montant": 1200}, "field_count": 1},
                "d2": {"success": false, "error": "timeout", "document_title": "Contrat", "extracted_fields": {}, "field_count": 0}
               }, "total_documents": 3, "processed_documents": 1, "total_fields_extracted": 1}"#,
        )
        .unwrap();
        assert_eq!(res.errors(), 2);
        assert_eq!(res.progress_text(), "Terminé: 1/3 documents traités");
        assert_eq!(res.results["d2"].error.as_deref(), Some("timeout"));
        assert_eq!(res.results["d1"].extracted_fields["montant"], 1200);
    }
}
