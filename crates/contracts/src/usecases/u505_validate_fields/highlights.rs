use crate::domain::a001_document::Document;
use crate::shared::highlight::{FieldColors, HighlightRequest};

/// Highlights for every justified field of `document`, in field order.
/// Colors are assigned on first encounter.
pub fn justified_highlights(document: &Document, colors: &mut FieldColors) -> Vec<HighlightRequest> {
    document
        .justifications
        .keys()
        .filter_map(|field| {
            let passage = document.passage_for(field)?;
            Some(HighlightRequest::new(
                field.clone(),
                passage,
                colors.color_for(field),
            ))
        })
        .collect()
}

/// Highlight of the extracted value itself
pub fn value_highlight(
    document: &Document,
    field: &str,
    colors: &mut FieldColors,
) -> Option<HighlightRequest> {
    let value = document.field_value(field);
    if value.is_empty() {
        return None;
    }
    Some(HighlightRequest::new(field, value, colors.color_for(field)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::highlight::{highlight_all, PALETTE};

    #[test]
    fn test_justified_fields_get_stable_colors() {
        let mut doc = Document::new("d1", "Facture", "Client ACME, total 1200 EUR");
        doc.set_justification("client", "Client ACME");
        doc.set_justification("vide", "");
        doc.set_justification("total", "1200 EUR");

        let mut colors = FieldColors::new();
        let requests = justified_highlights(&doc, &mut colors);
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].color, PALETTE[0]);
        assert_eq!(requests[1].color, PALETTE[1]);

        let again = justified_highlights(&doc, &mut colors);
        assert_eq!(again, requests);

        let segments = highlight_all(&doc.content, &requests);
        assert_eq!(segments.iter().filter(|s| s.mark.is_some()).count(), 2);
    }

    #[test]
    fn test_value_highlight_skips_empty_value() {
        let mut doc = Document::new("d1", "t", "c");
        let mut colors = FieldColors::new();
        assert!(value_highlight(&doc, "montant", &mut colors).is_none());
        doc.set_field_value("montant", "1200");
        let req = value_highlight(&doc, "montant", &mut colors).unwrap();
        assert_eq!(req.passage, "1200");
    }
}
