use crate::domain::a001_document::Document;
use std::collections::VecDeque;

/// Sequential justification of every valued field of one document.
/// The run ends as soon as another document is selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JustifyRun {
    doc_id: String,
    pending: VecDeque<String>,
}

impl JustifyRun {
    pub fn new(document: &Document) -> Self {
        Self {
            doc_id: document.id.clone(),
            pending: document
                .extracted_fields
                .keys()
                .filter(|field| !document.field_value(field).is_empty())
                .cloned()
                .collect(),
        }
    }

    pub fn doc_id(&self) -> &str {
        &self.doc_id
    }

    pub fn targets(&self, selected: Option<&str>) -> bool {
        selected == Some(self.doc_id.as_str())
    }

    /// Next field to justify while `selected` is still the run's document
    pub fn next_field(&mut self, selected: Option<&str>) -> Option<String> {
        if !self.targets(selected) {
            self.pending.clear();
            return None;
        }
        self.pending.pop_front()
    }

    pub fn remaining(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invoice() -> Document {
        let mut doc = Document::new("d1", "Facture", "Total: 1200 EUR, client ACME");
        doc.set_field_value("montant", "1200");
        doc.set_field_value("devise", "");
        doc.set_field_value("client", "ACME");
        doc
    }

    #[test]
    fn test_run_walks_valued_fields_in_order() {
        let mut run = JustifyRun::new(&invoice());
        assert_eq!(run.remaining(), 2);
        assert_eq!(run.next_field(Some("d1")).as_deref(), Some("montant"));
        assert_eq!(run.next_field(Some("d1")).as_deref(), Some("client"));
        assert_eq!(run.next_field(Some("d1")), None);
    }

    #[test]
    fn test_run_stops_when_another_document_is_selected() {
        let mut run = JustifyRun::new(&invoice());
        assert_eq!(run.next_field(Some("d1")).as_deref(), Some("montant"));

        assert_eq!(run.next_field(Some("d2")), None);
        assert_eq!(run.remaining(), 0);
        // Coming back to the document does not resume the run
        assert_eq!(run.next_field(Some("d1")), None);
        assert!(!run.targets(None));
    }
}
