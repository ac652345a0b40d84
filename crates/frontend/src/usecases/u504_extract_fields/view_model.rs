use super::api;
use crate::domain::a001_document::api as documents_api;
use crate::domain::a003_catalog::api as catalog_api;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::api_utils::AppConfig;
use crate::shared::status::StatusService;
use contracts::domain::a001_document::Document;
use contracts::domain::a003_catalog::Catalog;
use contracts::shared::error::{ClientError, ValidationError};
use contracts::shared::progress::ProgressState;
use contracts::usecases::u504_extract_fields::{
    descriptions_from_catalog, ExtractRequest, ExtractResponse, ExtractionPreview,
    FieldDescriptions,
};
use contracts::usecases::u506_api_key::resolve_api_key;
use gloo_timers::future::TimeoutFuture;
use indexmap::IndexMap;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
pub struct ExtractionVm {
    pub documents: RwSignal<Vec<Document>>,
    pub catalog: RwSignal<Catalog>,
    /// Descriptions as edited on the page, prefilled from the catalog
    pub descriptions: RwSignal<FieldDescriptions>,
    pub loading: RwSignal<bool>,

    pub api_key: RwSignal<String>,
    pub instructions: RwSignal<String>,

    pub preview: RwSignal<Option<ExtractionPreview>>,
    pub progress: RwSignal<Option<ProgressState>>,
    pub results: RwSignal<Option<ExtractResponse>>,
    pub extracting: RwSignal<bool>,

    ctx: AppGlobalContext,
    status: StatusService,
}

impl ExtractionVm {
    pub fn new(ctx: AppGlobalContext, status: StatusService) -> Self {
        Self {
            documents: RwSignal::new(Vec::new()),
            catalog: RwSignal::new(Catalog::new()),
            descriptions: RwSignal::new(IndexMap::new()),
            loading: RwSignal::new(false),
            api_key: RwSignal::new(String::new()),
            instructions: RwSignal::new(String::new()),
            preview: RwSignal::new(None),
            progress: RwSignal::new(None),
            results: RwSignal::new(None),
            extracting: RwSignal::new(false),
            ctx,
            status,
        }
    }

    pub fn load(&self) {
        let this = *self;
        this.loading.set(true);
        spawn_local(async move {
            match catalog_api::get_catalog().await {
                Ok(catalog) => {
                    this.descriptions.set(descriptions_from_catalog(&catalog));
                    this.catalog.set(catalog);
                }
                Err(e) => this.status.report(
                    &ClientError::from(e),
                    "Erreur lors du chargement du catalog",
                ),
            }
            match documents_api::get_all_documents().await {
                Ok(documents) => this.documents.set(documents),
                Err(e) => this.status.report(
                    &ClientError::from(e),
                    "Erreur lors du chargement des documents",
                ),
            }
            this.loading.set(false);
        });
    }

    pub fn set_description(&self, category: &str, field: &str, description: String) {
        self.descriptions.update(|d| {
            d.entry(category.to_string())
                .or_default()
                .insert(field.to_string(), description);
        });
    }

    pub fn description(&self, category: &str, field: &str) -> String {
        self.descriptions.with_untracked(|d| {
            d.get(category)
                .and_then(|fields| fields.get(field))
                .cloned()
                .unwrap_or_default()
        })
    }

    /// Checks shared by the preview and the extraction
    fn check_ready(&self) -> Result<Option<String>, ValidationError> {
        let api_key = resolve_api_key(&self.api_key.get_untracked(), self.ctx.has_stored_key())?;
        if self.documents.with_untracked(Vec::is_empty) {
            return Err(ValidationError::NoDocuments);
        }
        Ok(api_key)
    }

    pub fn show_preview(&self) {
        if let Err(e) = self.check_ready() {
            self.status.report(&e.into(), "");
            return;
        }
        let preview = self
            .documents
            .with_untracked(|docs| self.catalog.with_untracked(|c| ExtractionPreview::compute(docs, c)));
        self.preview.set(Some(preview));
    }

    pub fn extract(&self) {
        let api_key = match self.check_ready() {
            Ok(key) => key,
            Err(e) => {
                self.status.report(&e.into(), "");
                return;
            }
        };
        let field_descriptions = self.descriptions.with_untracked(|d| {
            d.iter()
                .map(|(category, fields)| {
                    let trimmed = fields
                        .iter()
                        .map(|(name, text)| (name.clone(), text.trim().to_string()))
                        .collect();
                    (category.clone(), trimmed)
                })
                .collect()
        });
        let request = ExtractRequest {
            documents: self.documents.get_untracked(),
            catalog: self.catalog.get_untracked(),
            field_descriptions,
            api_key,
            instructions: self.instructions.get_untracked().trim().to_string(),
        };

        let this = *self;
        this.extracting.set(true);
        this.results.set(None);
        this.progress.set(Some(ProgressState::started(Vec::new())));
        spawn_local(async move {
            match api::extract_fields(&request).await {
                Ok(response) => {
                    log::info!(
                        "Extraction: {}/{} documents, {} fields",
                        response.processed_documents,
                        response.total_documents,
                        response.total_fields_extracted
                    );
                    let text = response.progress_text();
                    this.progress
                        .update(|p| p.get_or_insert_with(ProgressState::default).finish(text, Vec::new()));
                    let message = response.success_message();
                    this.results.set(Some(response));
                    TimeoutFuture::new(AppConfig::PROGRESS_HIDE_MS).await;
                    this.progress.set(None);
                    this.status.success(message);
                }
                Err(e) => {
                    this.progress.set(None);
                    this.status
                        .report(&ClientError::from(e), "Erreur lors de l'extraction");
                }
            }
            this.extracting.set(false);
        });
    }
}
