use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Number of characters shown on a document card before the ellipsis
pub const PREVIEW_LENGTH: usize = 100;

/// Origin of a document record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    /// Uploaded file (PDF, DOCX, image, text)
    #[default]
    Document,
    /// One row of an imported spreadsheet
    ExcelRow,
}

impl DocumentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::Document => "document",
            DocumentKind::ExcelRow => "excel_row",
        }
    }

    /// Label shown in previews
    pub fn display_name(&self) -> &'static str {
        match self {
            DocumentKind::Document => "Document",
            DocumentKind::ExcelRow => "Ligne Excel",
        }
    }
}

/// Passage of the document supporting an extracted value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Justification {
    #[serde(default)]
    pub passage: String,
}

/// Document as stored by the backend.
///
/// `category` is authoritative for category membership; category lists are
/// always derived from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,

    #[serde(default)]
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,

    /// Upload responses omit the content
    #[serde(default)]
    pub content: String,

    #[serde(rename = "type", default)]
    pub kind: DocumentKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_index: Option<u32>,

    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub extracted_fields: IndexMap<String, serde_json::Value>,

    #[serde(default)]
    pub justifications: IndexMap<String, Justification>,

    /// Dirty flag, cleared after a successful save
    #[serde(default)]
    pub modified: bool,

    /// Attributes the client does not interpret, sent back untouched
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Document {
    pub fn new(id: impl Into<String>, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            filename: None,
            content: content.into(),
            kind: DocumentKind::Document,
            row_index: None,
            category: None,
            extracted_fields: IndexMap::new(),
            justifications: IndexMap::new(),
            modified: false,
            extra: serde_json::Map::new(),
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Empty category names count as uncategorized
    pub fn category_name(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }

    pub fn is_categorized(&self) -> bool {
        self.category_name().is_some()
    }

    /// Card preview: first characters of the content
    pub fn preview(&self) -> String {
        if self.content.is_empty() {
            return "Aucun contenu".to_string();
        }
        let mut chars = self.content.chars();
        let head: String = chars.by_ref().take(PREVIEW_LENGTH).collect();
        if chars.next().is_some() {
            format!("{}...", head)
        } else {
            head
        }
    }

    /// Extracted value rendered as an input string
    pub fn field_value(&self, field_name: &str) -> String {
        match self.extracted_fields.get(field_name) {
            None | Some(serde_json::Value::Null) => String::new(),
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }

    /// User edit of an extracted value; marks the document as modified
    pub fn set_field_value(&mut self, field_name: &str, value: impl Into<String>) {
        self.extracted_fields
            .insert(field_name.to_string(), serde_json::Value::String(value.into()));
        self.modified = true;
    }

    pub fn passage_for(&self, field_name: &str) -> Option<&str> {
        self.justifications
            .get(field_name)
            .map(|j| j.passage.as_str())
            .filter(|p| !p.is_empty())
    }

    pub fn set_justification(&mut self, field_name: &str, passage: impl Into<String>) {
        self.justifications.insert(
            field_name.to_string(),
            Justification {
                passage: passage.into(),
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_upload_record_without_content() {
        let doc: Document = serde_json::from_str(
            r#"{"id": "a1", "title": "facture.pdf", "filename": "facture.pdf", "type": "document"}"#,
        )
        .unwrap();
        assert_eq!(doc.id, "a1");
        assert_eq!(doc.content, "");
        assert_eq!(doc.kind, DocumentKind::Document);
        assert!(!doc.is_categorized());
        assert!(!doc.modified);
    }

    #[test]
    fn test_unknown_attributes_survive_round_trip() {
        let raw = r#"{"id": "r3", "title": "Row 3", "content": "x", "type": "excel_row",
                      "row_index": 3, "category": "Factures", "source_sheet": "Feuil1"}"#;
        let doc: Document = serde_json::from_str(raw).unwrap();
        assert_eq!(doc.kind, DocumentKind::ExcelRow);
        assert_eq!(doc.row_index, Some(3));

        let back = serde_json::to_value(&doc).unwrap();
        assert_eq!(back["source_sheet"], "Feuil1");
        assert_eq!(back["type"], "excel_row");
    }

    #[test]
    fn test_empty_category_is_uncategorized() {
        let doc = Document::new("d", "t", "c").with_category("");
        assert_eq!(doc.category_name(), None);
    }

    #[test]
    fn test_preview_truncates_on_char_boundary() {
        let doc = Document::new("d", "t", "é".repeat(150));
        let preview = doc.preview();
        assert!(preview.ends_with("..."));
        assert_eq!(preview.chars().count(), PREVIEW_LENGTH + 3);

        assert_eq!(Document::new("d", "t", "").preview(), "Aucun contenu");
        assert_eq!(Document::new("d", "t", "court").preview(), "court");
    }

    #[test]
    fn test_set_field_value_marks_modified() {
        let mut doc = Document::new("d", "t", "c");
        doc.extracted_fields
            .insert("montant".into(), serde_json::json!(1200));
        assert_eq!(doc.field_value("montant"), "1200");
        assert_eq!(doc.field_value("absent"), "");

        doc.set_field_value("montant", "1300");
        assert!(doc.modified);
        assert_eq!(doc.field_value("montant"), "1300");
    }
}
