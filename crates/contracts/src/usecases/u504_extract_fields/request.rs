use crate::domain::a001_document::Document;
use crate::domain::a003_catalog::Catalog;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Category → field → description edited on the extraction page
pub type FieldDescriptions = IndexMap<String, IndexMap<String, String>>;

/// `/extract_fields` body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractRequest {
    pub documents: Vec<Document>,
    pub catalog: Catalog,
    pub field_descriptions: FieldDescriptions,
    pub api_key: Option<String>,

    #[serde(default)]
    pub instructions: String,
}

/// Descriptions prefilled from the catalog
pub fn descriptions_from_catalog(catalog: &Catalog) -> FieldDescriptions {
    catalog
        .iter()
        .map(|(category, fields)| {
            let descriptions = fields
                .iter()
                .map(|(name, field)| (name.clone(), field.description.clone()))
                .collect();
            (category.clone(), descriptions)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_catalog::{FieldDefinition, FieldType};

    #[test]
    fn test_descriptions_prefilled_from_catalog() {
        let mut catalog = Catalog::new();
        catalog.entry("Factures".into()).or_default().insert(
            "montant".into(),
            FieldDefinition::new(FieldType::Number, "Montant TTC"),
        );
        catalog.entry("Notes".into()).or_default();

        let descriptions = descriptions_from_catalog(&catalog);
        assert_eq!(descriptions["Factures"]["montant"], "Montant TTC");
        assert!(descriptions["Notes"].is_empty());
    }
}
