use crate::domain::a003_catalog::{Catalog, FieldType};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Field definition proposed by the AI generator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedField {
    pub name: String,

    #[serde(rename = "type", default)]
    pub field_type: FieldType,

    #[serde(default)]
    pub description: String,
}

/// `/generate_fields` response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateFieldsResponse {
    #[serde(default)]
    pub fields: Vec<GeneratedField>,
}

/// Outcome of the generation for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryGenerationResult {
    pub success: bool,

    #[serde(default)]
    pub count: Option<usize>,

    #[serde(default)]
    pub fields: Vec<GeneratedField>,

    #[serde(default)]
    pub error: Option<String>,
}

/// `/generate_all_fields` response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateAllFieldsResponse {
    #[serde(default)]
    pub results: IndexMap<String, CategoryGenerationResult>,

    #[serde(default)]
    pub total_categories: usize,

    #[serde(default)]
    pub successful_categories: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedDescription {
    pub category: String,

    #[serde(rename = "fieldName")]
    pub field_name: String,

    pub description: String,
}

/// `/generate_field_descriptions` response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DescriptionsResponse {
    #[serde(default)]
    pub descriptions: Vec<GeneratedDescription>,
}

/// `/upload_catalog` response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UploadCatalogResponse {
    #[serde(default)]
    pub success: bool,

    #[serde(default)]
    pub catalog: Catalog,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_fields_response_with_failed_category() {
        let res: GenerateAllFieldsResponse = serde_json::from_str(
            r#"{"results": {
                "Factures": {"success": true, "count": 1, "fields": [{"name": "montant", "type": "number", "description": "Montant"}]},
                "Contrats": {"success": false, "error": "quota", "fields": [], "count": 0}
               }, "total_categories": 2, "successful_categories": 1}"#,
        )
        .unwrap();
        assert_eq!(res.total_categories, 2);
        assert!(res.results["Factures"].success);
        assert_eq!(res.results["Factures"].fields[0].field_type, FieldType::Number);
        assert_eq!(res.results["Contrats"].error.as_deref(), Some("quota"));
    }

    #[test]
    fn test_uploaded_catalog_with_empty_categories() {
        let res: UploadCatalogResponse = serde_json::from_str(
            r#"{"success": true, "catalog": {"Invoices": {}, "Contracts": {}}}"#,
        )
        .unwrap();
        let names: Vec<_> = res.catalog.keys().cloned().collect();
        assert_eq!(names, vec!["Invoices", "Contracts"]);
        assert!(res.catalog.values().all(|fields| fields.is_empty()));
    }
}
