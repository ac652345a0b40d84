use super::api;
use crate::domain::a001_document::api as documents_api;
use crate::domain::a003_catalog::api as catalog_api;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::api_utils::AppConfig;
use crate::shared::export::download_text;
use crate::shared::status::StatusService;
use contracts::domain::a001_document::Document;
use contracts::domain::a003_catalog::{
    category_overview, CatalogStore, CategoryCard, FieldDraft, FieldInsert, FieldType,
};
use contracts::shared::error::{ClientError, ValidationError};
use contracts::shared::progress::{ProgressItem, ProgressState};
use contracts::usecases::u503_define_catalog::{
    DescriptionsRequest, FieldCount, GenerateAllFieldsRequest, GenerateFieldsRequest,
    CATALOG_FILE_NAME, DEFAULT_FIELD_COUNT,
};
use contracts::usecases::u506_api_key::resolve_api_key;
use gloo_timers::future::TimeoutFuture;
use indexmap::IndexMap;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::File;

/// Modal currently open on the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldModal {
    Add { category: String },
    Edit { category: String, field: String },
    AllowedValues { category: String, field: String },
    Delete { category: String, field: String },
}

#[derive(Clone, Copy)]
pub struct FieldSelectionVm {
    /// Category board as returned by `/get_categories`
    pub categories: RwSignal<IndexMap<String, Vec<Document>>>,
    pub catalog: RwSignal<CatalogStore>,
    pub loading: RwSignal<bool>,

    // AI generation settings
    pub api_key: RwSignal<String>,
    pub num_fields: RwSignal<String>,
    pub instructions: RwSignal<String>,
    pub generating: RwSignal<bool>,
    pub describing: RwSignal<bool>,
    pub progress: RwSignal<Option<ProgressState>>,

    pub modal: RwSignal<Option<FieldModal>>,
    pub field_name: RwSignal<String>,
    pub field_type: RwSignal<FieldType>,
    pub field_description: RwSignal<String>,
    /// Edit form state, including its allowed values
    pub draft: RwSignal<FieldDraft>,
    pub new_value: RwSignal<String>,

    ctx: AppGlobalContext,
    status: StatusService,
}

impl FieldSelectionVm {
    pub fn new(ctx: AppGlobalContext, status: StatusService) -> Self {
        Self {
            categories: RwSignal::new(IndexMap::new()),
            catalog: RwSignal::new(CatalogStore::new()),
            loading: RwSignal::new(false),
            api_key: RwSignal::new(String::new()),
            num_fields: RwSignal::new(DEFAULT_FIELD_COUNT.to_string()),
            instructions: RwSignal::new(String::new()),
            generating: RwSignal::new(false),
            describing: RwSignal::new(false),
            progress: RwSignal::new(None),
            modal: RwSignal::new(None),
            field_name: RwSignal::new(String::new()),
            field_type: RwSignal::new(FieldType::Text),
            field_description: RwSignal::new(String::new()),
            draft: RwSignal::new(FieldDraft::default()),
            new_value: RwSignal::new(String::new()),
            ctx,
            status,
        }
    }

    pub fn load(&self) {
        let this = *self;
        this.loading.set(true);
        spawn_local(async move {
            match documents_api::get_categories().await {
                Ok(response) => this.categories.set(response.categories),
                Err(e) => this.status.report(
                    &ClientError::from(e),
                    "Erreur lors du chargement des catégories",
                ),
            }
            match catalog_api::get_catalog().await {
                Ok(catalog) => this.catalog.update(|c| c.load(catalog)),
                Err(e) => this.status.report(
                    &ClientError::from(e),
                    "Erreur lors du chargement du catalog",
                ),
            }
            this.loading.set(false);
        });
    }

    /// One card per category of the board or the catalog
    pub fn cards(&self) -> Vec<CategoryCard> {
        self.categories
            .with(|categories| self.catalog.with(|c| category_overview(categories, c.catalog())))
    }

    pub fn close_modal(&self) {
        self.modal.set(None);
    }

    fn report(&self, err: ValidationError) {
        self.status.report(&err.into(), "");
    }

    // ---- field CRUD ----

    pub fn open_add(&self, category: String) {
        self.field_name.set(String::new());
        self.field_type.set(FieldType::Text);
        self.field_description.set(String::new());
        self.modal.set(Some(FieldModal::Add { category }));
    }

    pub fn add_field(&self) {
        let Some(FieldModal::Add { category }) = self.modal.get_untracked() else {
            return;
        };
        let name = self.field_name.get_untracked();
        let field_type = self.field_type.get_untracked();
        let description = self.field_description.get_untracked();

        let result = self
            .catalog
            .try_update(|c| c.add_field(&category, &name, field_type, &description));
        match result {
            Some(Ok(insert)) => {
                self.close_modal();
                let verb = match insert {
                    FieldInsert::Created => "ajouté à",
                    FieldInsert::Replaced => "remplacé dans",
                };
                self.status.success(format!(
                    "Champ \"{}\" {} la catégorie \"{}\"",
                    name.trim(),
                    verb,
                    category
                ));
            }
            Some(Err(e)) => self.report(e),
            None => {}
        }
    }

    pub fn open_edit(&self, category: String, field: String) {
        let draft = self.catalog.with_untracked(|c| {
            c.field(&category, &field)
                .map(|definition| FieldDraft::from_field(&field, definition))
        });
        let Some(draft) = draft else {
            self.report(ValidationError::UnknownField { category, field });
            return;
        };
        self.draft.set(draft);
        self.new_value.set(String::new());
        self.modal.set(Some(FieldModal::Edit { category, field }));
    }

    pub fn add_draft_value(&self) {
        let value = self.new_value.get_untracked();
        match self.draft.try_update(|d| d.add_allowed_value(&value)) {
            Some(Ok(_)) => self.new_value.set(String::new()),
            Some(Err(e)) => self.report(e),
            None => {}
        }
    }

    pub fn remove_draft_value(&self, value: String) {
        self.draft.update(|d| d.remove_allowed_value(&value));
    }

    pub fn save_edit(&self) {
        let Some(FieldModal::Edit { category, field }) = self.modal.get_untracked() else {
            return;
        };
        let draft = self.draft.get_untracked();
        match self.catalog.try_update(|c| c.update_field(&category, &field, &draft)) {
            Some(Ok(())) => {
                self.close_modal();
                self.status.success("Champ modifié avec succès");
            }
            Some(Err(e)) => self.report(e),
            None => {}
        }
    }

    pub fn open_allowed_values(&self, category: String, field: String) {
        self.new_value.set(String::new());
        self.modal.set(Some(FieldModal::AllowedValues { category, field }));
    }

    pub fn allowed_values(&self, category: &str, field: &str) -> Vec<String> {
        self.catalog.with(|c| {
            c.field(category, field)
                .map(|f| f.allowed_values.clone())
                .unwrap_or_default()
        })
    }

    pub fn add_allowed_value(&self, category: &str, field: &str) {
        let value = self.new_value.get_untracked();
        match self
            .catalog
            .try_update(|c| c.add_allowed_value(category, field, &value))
        {
            Some(Ok(_)) => self.new_value.set(String::new()),
            Some(Err(e)) => self.report(e),
            None => {}
        }
    }

    pub fn remove_allowed_value(&self, category: &str, field: &str, value: &str) {
        if let Some(Err(e)) = self
            .catalog
            .try_update(|c| c.remove_allowed_value(category, field, value))
        {
            self.report(e);
        }
    }

    pub fn status_saved_values(&self) {
        self.status.success("Valeurs autorisées sauvegardées");
    }

    pub fn confirm_delete(&self, category: String, field: String) {
        self.modal.set(Some(FieldModal::Delete { category, field }));
    }

    pub fn delete_field(&self) {
        let Some(FieldModal::Delete { category, field }) = self.modal.get_untracked() else {
            return;
        };
        self.close_modal();
        match self.catalog.try_update(|c| c.delete_field(&category, &field)) {
            Some(Ok(_)) => self.status.success(format!("Champ \"{}\" supprimé", field)),
            Some(Err(e)) => self.report(e),
            None => {}
        }
    }

    // ---- AI generation ----

    fn generation_settings(&self) -> Result<(FieldCount, Option<String>), ValidationError> {
        let count = FieldCount::parse(&self.num_fields.get_untracked())?;
        let api_key = resolve_api_key(&self.api_key.get_untracked(), self.ctx.has_stored_key())?;
        Ok((count, api_key))
    }

    fn instructions(&self) -> Option<String> {
        let instructions = self.instructions.get_untracked();
        let instructions = instructions.trim();
        (!instructions.is_empty()).then(|| instructions.to_string())
    }

    pub fn generate_for(&self, category: String) {
        let (num_fields, api_key) = match self.generation_settings() {
            Ok(settings) => settings,
            Err(e) => {
                self.report(e);
                return;
            }
        };
        let documents = self
            .categories
            .with_untracked(|c| c.get(&category).cloned().unwrap_or_default());
        let existing_fields = self.catalog.with_untracked(|c| {
            c.fields(&category)
                .map(|f| f.keys().cloned().collect())
                .unwrap_or_default()
        });
        let request = GenerateFieldsRequest {
            category,
            documents,
            num_fields,
            existing_fields,
            api_key,
            instructions: self.instructions(),
        };

        let this = *self;
        this.generating.set(true);
        this.status.info("Génération des champs en cours...");
        spawn_local(async move {
            match api::generate_fields(&request).await {
                Ok(response) => {
                    let merged = this
                        .catalog
                        .try_update(|c| c.merge_generated(&request.category, &response.fields))
                        .unwrap_or(0);
                    this.status
                        .success(format!("{} champs générés avec succès !", merged));
                }
                Err(e) => this
                    .status
                    .report(&ClientError::from(e), "Erreur lors de la génération"),
            }
            this.generating.set(false);
        });
    }

    pub fn generate_all(&self) {
        let categories = self.categories.get_untracked();
        if categories.is_empty() {
            self.report(ValidationError::NoCategories);
            return;
        }
        let (num_fields, api_key) = match self.generation_settings() {
            Ok(settings) => settings,
            Err(e) => {
                self.report(e);
                return;
            }
        };
        let pending = categories.keys().map(ProgressItem::pending).collect();
        let request = GenerateAllFieldsRequest {
            categories,
            num_fields,
            api_key,
            instructions: self.instructions(),
        };

        let this = *self;
        this.generating.set(true);
        this.progress.set(Some(ProgressState::started(pending)));
        spawn_local(async move {
            match api::generate_all_fields(&request).await {
                Ok(response) => {
                    let summary = this
                        .catalog
                        .try_update(|c| c.apply_generation_results(&response.results))
                        .unwrap_or_default();
                    let text = format!(
                        "Terminé: {}/{} catégories traitées",
                        summary.succeeded, response.total_categories
                    );
                    this.progress
                        .update(|p| p.get_or_insert_with(ProgressState::default).finish(text, summary.items));
                    TimeoutFuture::new(AppConfig::PROGRESS_HIDE_MS).await;
                    this.progress.set(None);
                    this.status.success(format!(
                        "Génération terminée: {} catégories traitées avec succès",
                        summary.succeeded
                    ));
                }
                Err(e) => {
                    this.progress.set(None);
                    this.status.report(
                        &ClientError::from(e),
                        "Erreur lors de la génération en masse",
                    );
                }
            }
            this.generating.set(false);
        });
    }

    pub fn generate_descriptions(&self) {
        let (fields, catalog) = self
            .catalog
            .with_untracked(|c| (c.fields_missing_description(), c.catalog().clone()));
        if fields.is_empty() {
            self.report(ValidationError::AllFieldsDescribed);
            return;
        }

        let this = *self;
        this.describing.set(true);
        this.status.info(format!(
            "Génération de descriptions pour {} champs...",
            fields.len()
        ));
        let request = DescriptionsRequest { fields, catalog };
        spawn_local(async move {
            match api::generate_descriptions(&request).await {
                Ok(response) => {
                    let applied = this
                        .catalog
                        .try_update(|c| c.apply_descriptions(&response.descriptions))
                        .unwrap_or(0);
                    this.status
                        .success(format!("Descriptions générées pour {} champs", applied));
                }
                Err(e) => this.status.report(
                    &ClientError::from(e),
                    "Erreur lors de la génération des descriptions",
                ),
            }
            this.describing.set(false);
        });
    }

    // ---- persistence ----

    pub fn save(&self) {
        let catalog = self.catalog.with_untracked(|c| c.catalog().clone());
        let status = self.status;
        spawn_local(async move {
            match catalog_api::save_catalog(catalog).await {
                Ok(()) => status.success("Catalog sauvegardé avec succès !"),
                Err(e) => status.report(&ClientError::from(e), "Erreur lors de la sauvegarde"),
            }
        });
    }

    pub fn download(&self) {
        let status = self.status;
        spawn_local(async move {
            let catalog = match catalog_api::download_catalog().await {
                Ok(catalog) => catalog,
                Err(e) => {
                    status.report(&ClientError::from(e), "Erreur lors du téléchargement");
                    return;
                }
            };
            let written = CatalogStore::from_catalog(catalog)
                .to_json_pretty()
                .map_err(|e| e.to_string())
                .and_then(|json| download_text(&json, CATALOG_FILE_NAME, "application/json"));
            match written {
                Ok(()) => status.success("Catalog téléchargé avec succès"),
                Err(e) => {
                    log::error!("Catalog download failed: {}", e);
                    status.error("Erreur lors du téléchargement du catalog");
                }
            }
        });
    }

    pub fn upload(&self, file: File) {
        let this = *self;
        spawn_local(async move {
            match catalog_api::upload_catalog(file).await {
                Ok(catalog) => {
                    this.catalog.update(|c| c.load(catalog));
                    this.status.success("Catalog chargé avec succès");
                }
                Err(e) => this
                    .status
                    .report(&ClientError::from(e), "Erreur lors du chargement"),
            }
        });
    }
}
