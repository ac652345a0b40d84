//! Editable catalog: per-category field definitions.
//!
//! Mutations are local; the whole catalog is pushed to the backend on save.

use super::aggregate::{push_allowed_value, Catalog, CategoryFields, FieldDefinition, FieldDraft, FieldType};
use crate::shared::error::ValidationError;
use crate::shared::progress::{ItemStatus, ProgressItem};
use crate::usecases::u503_define_catalog::{
    CategoryGenerationResult, FieldNeedingDescription, GeneratedDescription, GeneratedField,
};
use indexmap::IndexMap;

/// Whether `add_field` created a field or replaced one with the same name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldInsert {
    Created,
    Replaced,
}

/// Outcome of a bulk generation: progress rows and number of successful categories
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenerationSummary {
    pub items: Vec<ProgressItem>,
    pub succeeded: usize,
}

#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    catalog: Catalog,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_catalog(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn load(&mut self, catalog: Catalog) {
        self.catalog = catalog;
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn category_names(&self) -> Vec<&str> {
        self.catalog.keys().map(String::as_str).collect()
    }

    pub fn fields(&self, category: &str) -> Option<&CategoryFields> {
        self.catalog.get(category)
    }

    pub fn field(&self, category: &str, name: &str) -> Option<&FieldDefinition> {
        self.catalog.get(category).and_then(|f| f.get(name))
    }

    pub fn field_count(&self, category: &str) -> usize {
        self.catalog.get(category).map(|f| f.len()).unwrap_or(0)
    }

    pub fn ensure_category(&mut self, category: &str) -> &mut CategoryFields {
        self.catalog.entry(category.to_string()).or_default()
    }

    fn fields_mut(&mut self, category: &str) -> Result<&mut CategoryFields, ValidationError> {
        self.catalog
            .get_mut(category)
            .ok_or_else(|| ValidationError::UnknownCategory(category.to_string()))
    }

    fn field_mut(&mut self, category: &str, name: &str) -> Result<&mut FieldDefinition, ValidationError> {
        self.fields_mut(category)?
            .get_mut(name)
            .ok_or_else(|| ValidationError::UnknownField {
                category: category.to_string(),
                field: name.to_string(),
            })
    }

    /// Adds a field, creating the category when absent.
    /// An existing field with the same name is overwritten.
    pub fn add_field(
        &mut self,
        category: &str,
        name: &str,
        field_type: FieldType,
        description: &str,
    ) -> Result<FieldInsert, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyFieldName);
        }
        let fields = self.ensure_category(category);
        let previous = fields.insert(
            name.to_string(),
            FieldDefinition::new(field_type, description.trim()),
        );
        Ok(match previous {
            Some(_) => FieldInsert::Replaced,
            None => FieldInsert::Created,
        })
    }

    pub fn delete_field(&mut self, category: &str, name: &str) -> Result<FieldDefinition, ValidationError> {
        self.fields_mut(category)?
            .shift_remove(name)
            .ok_or_else(|| ValidationError::UnknownField {
                category: category.to_string(),
                field: name.to_string(),
            })
    }

    /// Renames a field in place, keeping its attributes and position
    pub fn rename_field(&mut self, category: &str, old_name: &str, new_name: &str) -> Result<(), ValidationError> {
        let definition = self.check_rename(category, old_name, new_name)?.clone();
        self.replace_field(category, old_name, new_name.trim(), definition)
    }

    /// Applies the edit form: new name plus replaced type, description and
    /// allowed values
    pub fn update_field(&mut self, category: &str, old_name: &str, draft: &FieldDraft) -> Result<(), ValidationError> {
        let definition = draft.apply_to(self.check_rename(category, old_name, &draft.name)?);
        self.replace_field(category, old_name, draft.name.trim(), definition)
    }

    fn check_rename(&self, category: &str, old_name: &str, new_name: &str) -> Result<&FieldDefinition, ValidationError> {
        let new_name = new_name.trim();
        if new_name.is_empty() {
            return Err(ValidationError::EmptyFieldName);
        }
        let fields = self
            .catalog
            .get(category)
            .ok_or_else(|| ValidationError::UnknownCategory(category.to_string()))?;
        let current = fields.get(old_name).ok_or_else(|| ValidationError::UnknownField {
            category: category.to_string(),
            field: old_name.to_string(),
        })?;
        if new_name != old_name && fields.contains_key(new_name) {
            return Err(ValidationError::DuplicateField(new_name.to_string()));
        }
        Ok(current)
    }

    fn replace_field(
        &mut self,
        category: &str,
        old_name: &str,
        new_name: &str,
        definition: FieldDefinition,
    ) -> Result<(), ValidationError> {
        let fields = self.fields_mut(category)?;
        if new_name == old_name {
            if let Some(existing) = fields.get_mut(old_name) {
                *existing = definition;
            }
            return Ok(());
        }
        let index = fields.get_index_of(old_name).unwrap_or(fields.len());
        fields.shift_remove(old_name);
        fields.shift_insert(index, new_name.to_string(), definition);
        Ok(())
    }

    pub fn add_allowed_value(&mut self, category: &str, field: &str, value: &str) -> Result<String, ValidationError> {
        let definition = self.field_mut(category, field)?;
        push_allowed_value(&mut definition.allowed_values, value)
    }

    /// Removes an allowed value by exact match. Returns whether it was present.
    pub fn remove_allowed_value(&mut self, category: &str, field: &str, value: &str) -> Result<bool, ValidationError> {
        let definition = self.field_mut(category, field)?;
        let before = definition.allowed_values.len();
        definition.allowed_values.retain(|v| v != value);
        Ok(definition.allowed_values.len() != before)
    }

    /// Merges AI-generated fields into `category`, overwriting same-name
    /// fields. Returns the number of merged fields.
    pub fn merge_generated(&mut self, category: &str, generated: &[GeneratedField]) -> usize {
        let fields = self.ensure_category(category);
        for field in generated {
            fields.insert(
                field.name.clone(),
                FieldDefinition::new(field.field_type.clone(), field.description.clone()),
            );
        }
        generated.len()
    }

    /// Merges the successful categories of a bulk generation. Failed
    /// categories are reported but do not undo the successful ones.
    pub fn apply_generation_results(
        &mut self,
        results: &IndexMap<String, CategoryGenerationResult>,
    ) -> GenerationSummary {
        let mut summary = GenerationSummary::default();
        for (category, result) in results {
            if result.success {
                self.merge_generated(category, &result.fields);
                summary.succeeded += 1;
            }
            summary.items.push(ProgressItem {
                name: category.clone(),
                status: if result.success {
                    ItemStatus::Success
                } else {
                    ItemStatus::Error
                },
                count: result.count,
                error: result.error.clone(),
            });
        }
        summary
    }

    pub fn fields_missing_description(&self) -> Vec<FieldNeedingDescription> {
        self.catalog
            .iter()
            .flat_map(|(category, fields)| {
                fields
                    .iter()
                    .filter(|(_, f)| !f.has_description())
                    .map(move |(name, f)| FieldNeedingDescription {
                        category: category.clone(),
                        field_name: name.clone(),
                        field_type: f.field_type.clone(),
                    })
            })
            .collect()
    }

    /// Writes generated descriptions onto existing fields.
    /// Returns how many were applied.
    pub fn apply_descriptions(&mut self, descriptions: &[GeneratedDescription]) -> usize {
        let mut applied = 0;
        for d in descriptions {
            if let Some(field) = self
                .catalog
                .get_mut(&d.category)
                .and_then(|f| f.get_mut(&d.field_name))
            {
                field.description = d.description.clone();
                applied += 1;
            }
        }
        applied
    }

    /// Pretty JSON used for the `catalog.json` download
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> CatalogStore {
        let mut store = CatalogStore::new();
        store
            .add_field("Factures", "montant", FieldType::Number, "Montant TTC")
            .unwrap();
        store
            .add_field("Factures", "client", FieldType::Text, "")
            .unwrap();
        store
            .add_field("Factures", "date", FieldType::Date, "Date d'émission")
            .unwrap();
        store
    }

    #[test]
    fn test_add_field_creates_category() {
        let mut store = CatalogStore::new();
        let insert = store.add_field("Contrats", "parties", FieldType::Text, " Parties ").unwrap();
        assert_eq!(insert, FieldInsert::Created);
        assert_eq!(store.field_count("Contrats"), 1);
        assert_eq!(store.field("Contrats", "parties").unwrap().description, "Parties");
    }

    #[test]
    fn test_add_field_overwrites_silently() {
        let mut store = store();
        store
            .add_allowed_value("Factures", "montant", "100")
            .unwrap();
        let insert = store
            .add_field("Factures", "montant", FieldType::Text, "autre")
            .unwrap();
        assert_eq!(insert, FieldInsert::Replaced);
        let field = store.field("Factures", "montant").unwrap();
        assert_eq!(field.field_type, FieldType::Text);
        assert!(field.allowed_values.is_empty());
        assert_eq!(store.field_count("Factures"), 3);
    }

    #[test]
    fn test_add_field_rejects_empty_name() {
        let mut store = CatalogStore::new();
        assert_eq!(
            store.add_field("Factures", "  ", FieldType::Text, ""),
            Err(ValidationError::EmptyFieldName)
        );
        assert!(store.fields("Factures").is_none());
    }

    #[test]
    fn test_rename_to_same_name_preserves_attributes() {
        let mut store = store();
        store.add_allowed_value("Factures", "montant", "EUR").unwrap();
        let before = store.field("Factures", "montant").cloned();

        store.rename_field("Factures", "montant", "montant").unwrap();

        assert_eq!(store.field("Factures", "montant").cloned(), before);
        let names: Vec<_> = store.fields("Factures").unwrap().keys().cloned().collect();
        assert_eq!(names, vec!["montant", "client", "date"]);
    }

    #[test]
    fn test_rename_keeps_position_and_attributes() {
        let mut store = store();
        store.rename_field("Factures", "client", "fournisseur").unwrap();
        let names: Vec<_> = store.fields("Factures").unwrap().keys().cloned().collect();
        assert_eq!(names, vec!["montant", "fournisseur", "date"]);
        assert!(store.field("Factures", "client").is_none());
    }

    #[test]
    fn test_rename_rejects_existing_name_and_empty() {
        let mut store = store();
        assert_eq!(
            store.rename_field("Factures", "client", "date"),
            Err(ValidationError::DuplicateField("date".into()))
        );
        assert_eq!(
            store.rename_field("Factures", "client", " "),
            Err(ValidationError::EmptyFieldName)
        );
        assert!(matches!(
            store.rename_field("Factures", "absent", "x"),
            Err(ValidationError::UnknownField { .. })
        ));
    }

    #[test]
    fn test_update_field_replaces_attributes() {
        let mut store = store();
        let mut draft = FieldDraft::from_field("client", store.field("Factures", "client").unwrap());
        draft.name = "nom_client".into();
        draft.description = "Raison sociale".into();
        draft.add_allowed_value("ACME").unwrap();

        store.update_field("Factures", "client", &draft).unwrap();

        let field = store.field("Factures", "nom_client").unwrap();
        assert_eq!(field.description, "Raison sociale");
        assert_eq!(field.allowed_values, vec!["ACME"]);
    }

    #[test]
    fn test_allowed_values_add_is_set_like() {
        let mut store = store();
        store.add_allowed_value("Factures", "client", "ACME").unwrap();
        assert_eq!(
            store.add_allowed_value("Factures", "client", "ACME"),
            Err(ValidationError::DuplicateAllowedValue("ACME".into()))
        );
        assert_eq!(
            store.add_allowed_value("Factures", "client", ""),
            Err(ValidationError::EmptyAllowedValue)
        );
        assert_eq!(
            store.field("Factures", "client").unwrap().allowed_values,
            vec!["ACME"]
        );

        assert_eq!(store.remove_allowed_value("Factures", "client", "ACME"), Ok(true));
        assert_eq!(store.remove_allowed_value("Factures", "client", "ACME"), Ok(false));
    }

    #[test]
    fn test_merge_generated_overwrites_same_name() {
        let mut store = store();
        let merged = store.merge_generated(
            "Factures",
            &[
                GeneratedField {
                    name: "montant".into(),
                    field_type: FieldType::Number,
                    description: "Montant total".into(),
                },
                GeneratedField {
                    name: "tva".into(),
                    field_type: FieldType::Number,
                    description: "TVA".into(),
                },
            ],
        );
        assert_eq!(merged, 2);
        assert_eq!(store.field_count("Factures"), 4);
        assert_eq!(store.field("Factures", "montant").unwrap().description, "Montant total");
    }

    #[test]
    fn test_generation_results_keep_successful_categories() {
        let mut store = CatalogStore::new();
        let mut results = IndexMap::new();
        results.insert(
            "Factures".to_string(),
            CategoryGenerationResult {
                success: true,
                count: Some(1),
                fields: vec![GeneratedField {
                    name: "montant".into(),
                    field_type: FieldType::Number,
                    description: "Montant".into(),
                }],
                error: None,
            },
        );
        results.insert(
            "Contrats".to_string(),
            CategoryGenerationResult {
                success: false,
                count: None,
                fields: vec![],
                error: Some("quota".into()),
            },
        );

        let summary = store.apply_generation_results(&results);

        assert_eq!(summary.succeeded, 1);
        assert_eq!(summary.items.len(), 2);
        assert_eq!(summary.items[1].status, ItemStatus::Error);
        assert_eq!(store.field_count("Factures"), 1);
        assert!(store.fields("Contrats").is_none());
    }

    #[test]
    fn test_missing_descriptions_are_filled() {
        let mut store = store();
        let missing = store.fields_missing_description();
        assert_eq!(missing.len(), 1);
        assert_eq!(missing[0].field_name, "client");

        let applied = store.apply_descriptions(&[
            GeneratedDescription {
                category: "Factures".into(),
                field_name: "client".into(),
                description: "Nom du client".into(),
            },
            GeneratedDescription {
                category: "Inconnue".into(),
                field_name: "x".into(),
                description: "ignorée".into(),
            },
        ]);
        assert_eq!(applied, 1);
        assert!(store.fields_missing_description().is_empty());
    }

    #[test]
    fn test_export_after_edits_keeps_backend_attributes() {
        let catalog: Catalog = serde_json::from_str(
            r#"{"Factures": {"statut": {"type": "list", "description": "Statut", "allowed_values": ["payée"], "required": true}}}"#,
        )
        .unwrap();
        let mut store = CatalogStore::from_catalog(catalog);
        store.add_allowed_value("Factures", "statut", "annulée").unwrap();
        let mut draft = FieldDraft::from_field("statut", store.field("Factures", "statut").unwrap());
        draft.name = "etat".into();
        store.update_field("Factures", "statut", &draft).unwrap();

        let exported: serde_json::Value =
            serde_json::from_str(&store.to_json_pretty().unwrap()).unwrap();
        let field = &exported["Factures"]["etat"];
        assert_eq!(field["type"], "list");
        assert_eq!(field["required"], true);
        assert_eq!(field["allowed_values"], serde_json::json!(["payée", "annulée"]));
    }
}
