use super::field_count::FieldCount;
use crate::domain::a001_document::Document;
use crate::domain::a003_catalog::{Catalog, FieldType};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Multipart field of `/upload_catalog`
pub const CATALOG_FILE_FIELD: &str = "catalog_file";

/// Name of the downloaded catalog file
pub const CATALOG_FILE_NAME: &str = "catalog.json";

/// `{catalog}` body of `/save_catalog` and response of `/get_catalog`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogEnvelope {
    #[serde(default)]
    pub catalog: Catalog,
}

/// `/generate_fields` body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateFieldsRequest {
    pub category: String,
    pub documents: Vec<Document>,
    pub num_fields: FieldCount,
    /// Names already defined anywhere in the catalog
    pub existing_fields: Vec<String>,
    pub api_key: Option<String>,
    pub instructions: Option<String>,
}

/// `/generate_all_fields` body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateAllFieldsRequest {
    pub categories: IndexMap<String, Vec<Document>>,
    pub num_fields: FieldCount,
    pub api_key: Option<String>,
    pub instructions: Option<String>,
}

/// Field sent to `/generate_field_descriptions`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldNeedingDescription {
    pub category: String,

    #[serde(rename = "fieldName")]
    pub field_name: String,

    #[serde(rename = "type")]
    pub field_type: FieldType,
}

/// `/generate_field_descriptions` body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DescriptionsRequest {
    pub fields: Vec<FieldNeedingDescription>,
    pub catalog: Catalog,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_needing_description_wire_names() {
        let field = FieldNeedingDescription {
            category: "Factures".into(),
            field_name: "montant".into(),
            field_type: FieldType::Number,
        };
        assert_eq!(
            serde_json::to_value(&field).unwrap(),
            serde_json::json!({"category": "Factures", "fieldName": "montant", "type": "number"})
        );
    }

    #[test]
    fn test_generate_request_sends_count_as_number() {
        let req = GenerateFieldsRequest {
            category: "Factures".into(),
            documents: vec![],
            num_fields: FieldCount::new(6).unwrap(),
            existing_fields: vec!["montant".into()],
            api_key: None,
            instructions: None,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["num_fields"], 6);
        assert!(json["api_key"].is_null());
    }
}
