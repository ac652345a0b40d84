use crate::shared::error::ValidationError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Category name → field definitions
pub type Catalog = IndexMap<String, CategoryFields>;

/// Field name → definition
pub type CategoryFields = IndexMap<String, FieldDefinition>;

/// Value type of an extracted field. Types this client does not know are
/// kept verbatim so they survive a save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    #[default]
    Text,
    Number,
    Date,
    Boolean,
    #[serde(untagged)]
    Other(String),
}

impl FieldType {
    pub fn as_str(&self) -> &str {
        match self {
            FieldType::Text => "text",
            FieldType::Number => "number",
            FieldType::Date => "date",
            FieldType::Boolean => "boolean",
            FieldType::Other(name) => name,
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            FieldType::Text => "Texte",
            FieldType::Number => "Nombre",
            FieldType::Date => "Date",
            FieldType::Boolean => "Booléen",
            FieldType::Other(name) => name,
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "text" | "" => FieldType::Text,
            "number" => FieldType::Number,
            "date" => FieldType::Date,
            "boolean" => FieldType::Boolean,
            other => FieldType::Other(other.to_string()),
        }
    }

    /// Types offered by the field forms
    pub fn all() -> [FieldType; 4] {
        [
            FieldType::Text,
            FieldType::Number,
            FieldType::Date,
            FieldType::Boolean,
        ]
    }
}

/// Definition of one field to extract
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FieldDefinition {
    #[serde(rename = "type", default)]
    pub field_type: FieldType,

    #[serde(default)]
    pub description: String,

    /// Closed enumeration of valid values; empty means unconstrained
    #[serde(default)]
    pub allowed_values: Vec<String>,

    /// Attributes set by the backend that this client does not edit
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FieldDefinition {
    pub fn new(field_type: FieldType, description: impl Into<String>) -> Self {
        Self {
            field_type,
            description: description.into(),
            allowed_values: Vec::new(),
            extra: Map::new(),
        }
    }

    pub fn has_description(&self) -> bool {
        !self.description.trim().is_empty()
    }
}

/// Adds `value` to an allowed-values list, keeping it set-like.
/// Comparison is exact and case-sensitive.
pub fn push_allowed_value(values: &mut Vec<String>, value: &str) -> Result<String, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::EmptyAllowedValue);
    }
    if values.iter().any(|v| v == value) {
        return Err(ValidationError::DuplicateAllowedValue(value.to_string()));
    }
    values.push(value.to_string());
    Ok(value.to_string())
}

/// Edit-form state of a field, applied to the catalog on save
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldDraft {
    pub name: String,
    pub field_type: FieldType,
    pub description: String,
    pub allowed_values: Vec<String>,
}

impl FieldDraft {
    pub fn from_field(name: &str, field: &FieldDefinition) -> Self {
        Self {
            name: name.to_string(),
            field_type: field.field_type.clone(),
            description: field.description.clone(),
            allowed_values: field.allowed_values.clone(),
        }
    }

    pub fn add_allowed_value(&mut self, value: &str) -> Result<String, ValidationError> {
        push_allowed_value(&mut self.allowed_values, value)
    }

    pub fn remove_allowed_value(&mut self, value: &str) {
        self.allowed_values.retain(|v| v != value);
    }

    /// Definition carrying the draft's edits over the attributes of `base`
    pub fn apply_to(&self, base: &FieldDefinition) -> FieldDefinition {
        FieldDefinition {
            field_type: self.field_type.clone(),
            description: self.description.trim().to_string(),
            allowed_values: self.allowed_values.clone(),
            extra: base.extra.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_parses_partial_definitions() {
        let catalog: Catalog = serde_json::from_str(
            r#"{"Factures": {"montant": {"type": "number"}, "client": {"description": "Nom"}}}"#,
        )
        .unwrap();
        let fields = &catalog["Factures"];
        assert_eq!(fields["montant"].field_type, FieldType::Number);
        assert_eq!(fields["montant"].description, "");
        assert_eq!(fields["client"].field_type, FieldType::Text);
        assert!(fields["client"].allowed_values.is_empty());
    }

    #[test]
    fn test_unknown_type_is_kept() {
        let field: FieldDefinition =
            serde_json::from_str(r#"{"type": "currency", "description": "x"}"#).unwrap();
        assert_eq!(field.field_type, FieldType::Other("currency".into()));
        assert_eq!(field.field_type.display_name(), "currency");
        assert_eq!(serde_json::to_value(&field.field_type).unwrap(), "currency");
    }

    #[test]
    fn test_catalog_round_trip_keeps_backend_attributes() {
        let raw = serde_json::json!({
            "Factures": {
                "statut": {
                    "type": "list",
                    "description": "Statut",
                    "allowed_values": ["payée"],
                    "required": true
                },
                "montant": {"type": "number", "description": "", "allowed_values": []}
            }
        });
        let catalog: Catalog = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(catalog["Factures"]["statut"].extra["required"], true);
        assert_eq!(serde_json::to_value(&catalog).unwrap(), raw);
    }

    #[test]
    fn test_draft_keeps_untouched_attributes() {
        let field: FieldDefinition =
            serde_json::from_str(r#"{"type": "number", "unit": "EUR"}"#).unwrap();
        let mut draft = FieldDraft::from_field("montant", &field);
        draft.description = " Montant TTC ".into();

        let edited = draft.apply_to(&field);
        assert_eq!(edited.description, "Montant TTC");
        assert_eq!(edited.field_type, FieldType::Number);
        assert_eq!(edited.extra["unit"], "EUR");
    }

    #[test]
    fn test_catalog_keeps_field_order() {
        let raw = r#"{"C": {"zeta": {}, "alpha": {}, "mu": {}}}"#;
        let catalog: Catalog = serde_json::from_str(raw).unwrap();
        let names: Vec<_> = catalog["C"].keys().cloned().collect();
        assert_eq!(names, vec!["zeta", "alpha", "mu"]);
    }

    #[test]
    fn test_draft_allowed_values_are_set_like() {
        let mut draft = FieldDraft::default();
        draft.add_allowed_value("Payée").unwrap();
        assert_eq!(
            draft.add_allowed_value("Payée"),
            Err(ValidationError::DuplicateAllowedValue("Payée".into()))
        );
        draft.add_allowed_value("payée").unwrap();
        assert_eq!(draft.allowed_values, vec!["Payée", "payée"]);

        draft.remove_allowed_value("Payée");
        assert_eq!(draft.allowed_values, vec!["payée"]);
    }
}
