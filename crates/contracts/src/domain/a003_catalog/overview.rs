//! Category cards of the field selection page.
//!
//! The category board and the catalog are independent mappings; cards are
//! built from the union of their names.

use super::aggregate::Catalog;
use crate::domain::a001_document::Document;
use indexmap::{IndexMap, IndexSet};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCard {
    pub name: String,
    pub document_count: usize,
    pub field_count: usize,
}

impl CategoryCard {
    pub fn field_count_label(&self) -> String {
        format!("{} champs", self.field_count)
    }

    pub fn document_count_label(&self) -> String {
        format!("{} documents", self.document_count)
    }
}

/// Names of `first` followed by the names of `second` not already present
pub fn union_category_names<'a, A, B>(first: A, second: B) -> Vec<String>
where
    A: IntoIterator<Item = &'a str>,
    B: IntoIterator<Item = &'a str>,
{
    let names: IndexSet<&str> = first.into_iter().chain(second).collect();
    names.into_iter().map(str::to_string).collect()
}

pub fn category_overview(categories: &IndexMap<String, Vec<Document>>, catalog: &Catalog) -> Vec<CategoryCard> {
    union_category_names(
        categories.keys().map(String::as_str),
        catalog.keys().map(String::as_str),
    )
    .into_iter()
    .map(|name| CategoryCard {
        document_count: categories.get(&name).map(Vec::len).unwrap_or(0),
        field_count: catalog.get(&name).map(|f| f.len()).unwrap_or(0),
        name,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_file_with_empty_categories() {
        let catalog: Catalog =
            serde_json::from_str(r#"{"Invoices": {}, "Contracts": {}}"#).unwrap();
        let cards = category_overview(&IndexMap::new(), &catalog);

        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].name, "Invoices");
        assert_eq!(cards[1].name, "Contracts");
        for card in &cards {
            assert_eq!(card.field_count_label(), "0 champs");
            assert_eq!(card.document_count, 0);
        }
    }

    #[test]
    fn test_union_keeps_board_order_first() {
        let mut categories = IndexMap::new();
        categories.insert(
            "Factures".to_string(),
            vec![Document::new("d1", "t", "c").with_category("Factures")],
        );
        categories.insert("Notes".to_string(), vec![]);
        let catalog: Catalog =
            serde_json::from_str(r#"{"Contrats": {"parties": {}}, "Factures": {"montant": {}}}"#)
                .unwrap();

        let cards = category_overview(&categories, &catalog);
        let names: Vec<_> = cards.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Factures", "Notes", "Contrats"]);
        assert_eq!(cards[0].document_count, 1);
        assert_eq!(cards[0].field_count, 1);
        assert_eq!(cards[2].field_count, 1);
    }

    #[test]
    fn test_card_badge_labels() {
        let card = CategoryCard {
            name: "Factures".into(),
            document_count: 3,
            field_count: 7,
        };
        assert_eq!(card.document_count_label(), "3 documents");
        assert_eq!(card.field_count_label(), "7 champs");
    }
}
