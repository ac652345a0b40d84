//! In-memory category board: documents grouped by their `category` field.
//!
//! The rendered set of category names is the union of the categories seen on
//! documents and the categories created explicitly, in first-seen order.
//! Explicitly created categories stay on the board while empty.

use crate::domain::a001_document::Document;
use crate::shared::error::ValidationError;
use crate::usecases::u502_categorize_documents::OrganizedDocument;
use indexmap::IndexSet;

/// Local category change of one document, kept so it can be compensated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryMove {
    pub doc_id: String,
    pub from: Option<String>,
    pub to: Option<String>,
}

impl CategoryMove {
    pub fn is_noop(&self) -> bool {
        self.from == self.to
    }
}

/// Result of applying an AI organization response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OrganizeOutcome {
    pub organized: usize,
    pub unclassified: usize,
}

impl OrganizeOutcome {
    pub fn message(&self) -> String {
        let mut message = format!(
            "Organisation terminée ! {} documents catégorisés",
            self.organized
        );
        if self.unclassified > 0 {
            message.push_str(&format!(", {} documents non classés", self.unclassified));
        }
        message
    }
}

#[derive(Debug, Clone, Default)]
pub struct CategoryStore {
    documents: Vec<Document>,
    /// Categories created by the user or taken from a catalog file
    created: IndexSet<String>,
    /// Display order of every known category
    order: IndexSet<String>,
}

impl CategoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_documents(documents: Vec<Document>) -> Self {
        let mut store = Self::new();
        store.load(documents);
        store
    }

    /// Replaces the documents and rebuilds the board.
    /// Explicitly created categories are kept.
    pub fn load(&mut self, documents: Vec<Document>) {
        self.documents = documents;
        self.rebuild_order();
    }

    /// Replaces the explicit categories, e.g. with the names of a loaded catalog
    pub fn reset_categories<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.created = names
            .into_iter()
            .map(Into::into)
            .filter(|n: &String| !n.is_empty())
            .collect();
        self.rebuild_order();
    }

    fn rebuild_order(&mut self) {
        let mut order = IndexSet::new();
        for doc in &self.documents {
            if let Some(name) = doc.category_name() {
                order.insert(name.to_string());
            }
        }
        for name in &self.created {
            order.insert(name.clone());
        }
        self.order = order;
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn document(&self, doc_id: &str) -> Option<&Document> {
        self.documents.iter().find(|d| d.id == doc_id)
    }

    pub fn uncategorized(&self) -> Vec<&Document> {
        self.documents.iter().filter(|d| !d.is_categorized()).collect()
    }

    pub fn category_names(&self) -> Vec<&str> {
        self.order.iter().map(String::as_str).collect()
    }

    pub fn has_categories(&self) -> bool {
        !self.order.is_empty()
    }

    pub fn contains_category(&self, name: &str) -> bool {
        self.order.contains(name)
    }

    pub fn documents_in(&self, name: &str) -> Vec<&Document> {
        self.documents
            .iter()
            .filter(|d| d.category_name() == Some(name))
            .collect()
    }

    pub fn count(&self, name: &str) -> usize {
        self.documents
            .iter()
            .filter(|d| d.category_name() == Some(name))
            .count()
    }

    /// Creates an empty category. Returns the trimmed name.
    pub fn add_category(&mut self, name: &str) -> Result<String, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyCategoryName);
        }
        if self.order.contains(name) {
            return Err(ValidationError::DuplicateCategory(name.to_string()));
        }
        self.created.insert(name.to_string());
        self.order.insert(name.to_string());
        Ok(name.to_string())
    }

    /// Moves a document to `to` (`None` = uncategorized) and returns the
    /// applied move. The source list is left untouched on the board even
    /// when it becomes empty.
    pub fn move_document(
        &mut self,
        doc_id: &str,
        to: Option<&str>,
    ) -> Result<CategoryMove, ValidationError> {
        let to = to.filter(|c| !c.is_empty()).map(str::to_string);
        let doc = self
            .documents
            .iter_mut()
            .find(|d| d.id == doc_id)
            .ok_or_else(|| ValidationError::UnknownDocument(doc_id.to_string()))?;

        let from = doc.category_name().map(str::to_string);
        doc.category = to.clone();

        if let Some(name) = &to {
            if !self.order.contains(name) {
                self.created.insert(name.clone());
                self.order.insert(name.clone());
            }
        }

        Ok(CategoryMove {
            doc_id: doc_id.to_string(),
            from,
            to,
        })
    }

    /// Undoes `mv` if the document is still where `mv` put it.
    /// Returns false when a later move superseded it.
    pub fn revert(&mut self, mv: &CategoryMove) -> bool {
        let Some(doc) = self.documents.iter_mut().find(|d| d.id == mv.doc_id) else {
            return false;
        };
        if doc.category_name() != mv.to.as_deref() {
            return false;
        }
        doc.category = mv.from.clone();
        true
    }

    /// Applies categories proposed by the AI organizer.
    /// Entries with a null category leave the document untouched.
    pub fn apply_organization(&mut self, organized: &[OrganizedDocument]) -> OrganizeOutcome {
        let mut outcome = OrganizeOutcome::default();
        for entry in organized {
            match entry.category.as_deref().filter(|c| !c.is_empty()) {
                Some(category) => {
                    outcome.organized += 1;
                    if let Some(doc) = self.documents.iter_mut().find(|d| d.id == entry.id) {
                        doc.category = Some(category.to_string());
                        self.order.insert(category.to_string());
                    }
                }
                None => outcome.unclassified += 1,
            }
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CategoryStore {
        CategoryStore::from_documents(vec![
            Document::new("d1", "Facture 1", "...").with_category("Factures"),
            Document::new("d2", "Contrat", "..."),
            Document::new("d3", "Facture 2", "...").with_category("Factures"),
            Document::new("d4", "Note", "...").with_category("Notes"),
        ])
    }

    #[test]
    fn test_load_partitions_documents() {
        let store = sample();
        assert_eq!(store.category_names(), vec!["Factures", "Notes"]);
        assert_eq!(store.uncategorized().len(), 1);
        assert_eq!(store.count("Factures"), 2);
        assert_eq!(store.count("Notes"), 1);
    }

    #[test]
    fn test_add_category_rejects_duplicate() {
        let mut store = sample();
        assert_eq!(store.add_category("  Devis "), Ok("Devis".to_string()));
        assert_eq!(
            store.add_category("Devis"),
            Err(ValidationError::DuplicateCategory("Devis".into()))
        );
        assert_eq!(
            store.category_names().iter().filter(|n| **n == "Devis").count(),
            1
        );
        assert_eq!(store.count("Devis"), 0);
    }

    #[test]
    fn test_add_category_rejects_empty_and_existing_document_category() {
        let mut store = sample();
        assert_eq!(store.add_category("   "), Err(ValidationError::EmptyCategoryName));
        assert!(matches!(
            store.add_category("Notes"),
            Err(ValidationError::DuplicateCategory(_))
        ));
    }

    #[test]
    fn test_move_document_between_categories() {
        let mut store = sample();
        let mv = store.move_document("d1", Some("Notes")).unwrap();
        assert_eq!(mv.from.as_deref(), Some("Factures"));
        assert_eq!(mv.to.as_deref(), Some("Notes"));

        let in_notes: Vec<_> = store.documents_in("Notes").iter().map(|d| d.id.clone()).collect();
        assert!(in_notes.contains(&"d1".to_string()));
        assert!(store.documents_in("Factures").iter().all(|d| d.id != "d1"));
        assert!(store.uncategorized().iter().all(|d| d.id != "d1"));
    }

    #[test]
    fn test_move_document_to_uncategorized_keeps_empty_category() {
        let mut store = sample();
        store.move_document("d4", None).unwrap();
        assert!(store.uncategorized().iter().any(|d| d.id == "d4"));
        assert_eq!(store.count("Notes"), 0);
        assert!(store.contains_category("Notes"));
    }

    #[test]
    fn test_move_unknown_document() {
        let mut store = sample();
        assert_eq!(
            store.move_document("zz", Some("Notes")),
            Err(ValidationError::UnknownDocument("zz".into()))
        );
    }

    #[test]
    fn test_same_category_move_is_noop() {
        let mut store = sample();
        let mv = store.move_document("d1", Some("Factures")).unwrap();
        assert!(mv.is_noop());
        assert_eq!(store.count("Factures"), 2);
    }

    #[test]
    fn test_revert_restores_source() {
        let mut store = sample();
        let mv = store.move_document("d2", Some("Notes")).unwrap();
        assert!(store.revert(&mv));
        assert!(store.uncategorized().iter().any(|d| d.id == "d2"));
        assert_eq!(store.count("Notes"), 1);
    }

    #[test]
    fn test_revert_skipped_when_superseded() {
        let mut store = sample();
        let first = store.move_document("d2", Some("Notes")).unwrap();
        store.move_document("d2", Some("Factures")).unwrap();

        assert!(!store.revert(&first));
        assert_eq!(
            store.document("d2").and_then(|d| d.category_name()),
            Some("Factures")
        );
    }

    #[test]
    fn test_reload_keeps_created_categories() {
        let mut store = sample();
        store.add_category("Devis").unwrap();
        store.load(vec![Document::new("d9", "x", "y").with_category("Courriers")]);
        assert_eq!(store.category_names(), vec!["Courriers", "Devis"]);
    }

    #[test]
    fn test_reset_categories_from_catalog() {
        let mut store = CategoryStore::new();
        store.reset_categories(["Invoices", "Contracts"]);
        assert_eq!(store.category_names(), vec!["Invoices", "Contracts"]);
        assert_eq!(store.count("Invoices"), 0);
        assert_eq!(store.count("Contracts"), 0);
    }

    #[test]
    fn test_apply_organization_counts() {
        let mut store = sample();
        let outcome = store.apply_organization(&[
            OrganizedDocument {
                id: "d2".into(),
                category: Some("Contrats".into()),
            },
            OrganizedDocument {
                id: "d4".into(),
                category: None,
            },
        ]);
        assert_eq!(
            outcome,
            OrganizeOutcome {
                organized: 1,
                unclassified: 1
            }
        );
        assert_eq!(store.count("Contrats"), 1);
        assert!(store.contains_category("Contrats"));
        assert_eq!(
            outcome.message(),
            "Organisation terminée ! 1 documents catégorisés, 1 documents non classés"
        );
    }
}
