use crate::domain::a001_document::{Document, DocumentKind};
use serde::{Deserialize, Serialize};

/// `/upload` response; records carry no content
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub documents: Vec<Document>,
}

/// `/get_excel_columns` response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExcelColumnsResponse {
    #[serde(default)]
    pub columns: Vec<String>,

    #[serde(default)]
    pub total_rows: usize,
}

/// Row created by a spreadsheet import; content is truncated by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportedRow {
    pub id: String,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub content: String,

    #[serde(default)]
    pub row_index: u32,
}

impl ImportedRow {
    /// Card record for the upload list
    pub fn into_document(self) -> Document {
        let mut doc = Document::new(self.id, self.title, self.content);
        doc.kind = DocumentKind::ExcelRow;
        doc.row_index = Some(self.row_index);
        doc
    }
}

/// `/upload_excel` response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExcelImportResponse {
    #[serde(default)]
    pub success: bool,

    #[serde(default)]
    pub documents: Vec<ImportedRow>,

    #[serde(default)]
    pub total_rows: usize,
}

impl ExcelImportResponse {
    pub fn message(&self) -> String {
        format!("{} lignes importées avec succès", self.documents.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_response() {
        let res: ExcelColumnsResponse =
            serde_json::from_str(r#"{"columns": ["Titre", "Texte"], "total_rows": 42}"#).unwrap();
        assert_eq!(res.columns, vec!["Titre", "Texte"]);
        assert_eq!(res.total_rows, 42);
    }

    #[test]
    fn test_import_response_message() {
        let res: ExcelImportResponse = serde_json::from_str(
            r#"{"success": true, "total_rows": 2, "documents": [
                {"id": "a", "title": "Ligne 1", "content": "x", "row_index": 1},
                {"id": "b", "title": "Ligne 2", "content": "y", "row_index": 2}]}"#,
        )
        .unwrap();
        assert_eq!(res.message(), "2 lignes importées avec succès");

        let doc = res.documents[1].clone().into_document();
        assert_eq!(doc.kind, DocumentKind::ExcelRow);
        assert_eq!(doc.row_index, Some(2));
    }
}
