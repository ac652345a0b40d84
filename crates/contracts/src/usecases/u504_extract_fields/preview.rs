use crate::domain::a001_document::Document;
use crate::domain::a003_catalog::Catalog;
use indexmap::IndexMap;

/// Bucket of documents without a category
pub const UNCATEGORIZED_LABEL: &str = "Non catégorisé";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewLine {
    pub category: String,
    pub documents: usize,
    /// Fields defined for the category, 0 when it is absent from the catalog
    pub fields: usize,
}

/// Documents per category about to be extracted
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExtractionPreview {
    pub total_documents: usize,
    pub lines: Vec<PreviewLine>,
}

impl ExtractionPreview {
    pub fn compute(documents: &[Document], catalog: &Catalog) -> Self {
        let mut counts: IndexMap<&str, usize> = IndexMap::new();
        for doc in documents {
            let category = doc.category_name().unwrap_or(UNCATEGORIZED_LABEL);
            *counts.entry(category).or_default() += 1;
        }

        let lines = counts
            .into_iter()
            .map(|(category, documents)| PreviewLine {
                category: category.to_string(),
                documents,
                fields: catalog.get(category).map_or(0, |f| f.len()),
            })
            .collect();

        Self {
            total_documents: documents.len(),
            lines,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_catalog::{FieldDefinition, FieldType};

    #[test]
    fn test_preview_buckets_uncategorized() {
        let docs = vec![
            Document::new("a", "A", "").with_category("Factures"),
            Document::new("b", "B", ""),
            Document::new("c", "C", "").with_category("Factures"),
        ];
        let mut catalog = Catalog::new();
        catalog
            .entry("Factures".into())
            .or_default()
            .insert("montant".into(), FieldDefinition::new(FieldType::Number, ""));

        let preview = ExtractionPreview::compute(&docs, &catalog);
        assert_eq!(preview.total_documents, 3);
        assert_eq!(
            preview.lines,
            vec![
                PreviewLine {
                    category: "Factures".into(),
                    documents: 2,
                    fields: 1
                },
                PreviewLine {
                    category: UNCATEGORIZED_LABEL.into(),
                    documents: 1,
                    fields: 0
                },
            ]
        );
    }
}
