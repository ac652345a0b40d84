use crate::domain::a001_document::Document;
use serde::{Deserialize, Serialize};

/// `/justify_field` body; the backend uses its stored API key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JustifyRequest {
    pub document_content: String,
    pub field_name: String,
    pub field_value: String,
    pub document_id: String,
}

impl JustifyRequest {
    /// `None` when the field has no value to justify
    pub fn for_field(document: &Document, field_name: &str) -> Option<Self> {
        let value = document.field_value(field_name);
        if value.is_empty() {
            return None;
        }
        Some(Self {
            document_content: document.content.clone(),
            field_name: field_name.to_string(),
            field_value: value,
            document_id: document.id.clone(),
        })
    }
}

/// `/update_document` body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateDocumentRequest {
    pub document: Document,
}

/// Format of `/export_data`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Excel,
    Csv,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Excel => "excel",
            ExportFormat::Csv => "csv",
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            ExportFormat::Excel => "extracted_data.xlsx",
            ExportFormat::Csv => "extracted_data.csv",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ExportFormat::Excel => "Excel",
            ExportFormat::Csv => "CSV",
        }
    }

    /// Path and query of the export endpoint
    pub fn path(&self) -> String {
        format!("/export_data?format={}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_justify_request_needs_value() {
        let mut doc = Document::new("d1", "Facture", "Total: 1200 EUR");
        assert_eq!(JustifyRequest::for_field(&doc, "montant"), None);

        doc.set_field_value("montant", "1200");
        let req = JustifyRequest::for_field(&doc, "montant").unwrap();
        assert_eq!(req.field_value, "1200");
        assert_eq!(req.document_id, "d1");
    }

    #[test]
    fn test_export_paths() {
        assert_eq!(ExportFormat::Excel.path(), "/export_data?format=excel");
        assert_eq!(ExportFormat::Csv.file_name(), "extracted_data.csv");
    }
}
