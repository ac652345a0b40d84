use super::api;
use crate::domain::a001_document::api as documents_api;
use crate::shared::api_utils::AppConfig;
use crate::shared::export::{download_bytes, mime_for};
use crate::shared::status::StatusService;
use contracts::domain::a001_document::Document;
use contracts::shared::error::{ClientError, ValidationError};
use contracts::shared::highlight::{highlight_all, FieldColors, HighlightRequest, Segment};
use contracts::usecases::u505_validate_fields::{
    justified_highlights, value_highlight, ExportFormat, JustifyRequest, JustifyRun,
};
use gloo_timers::future::TimeoutFuture;
use indexmap::IndexMap;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Justification request of one field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JustifyState {
    Loading,
    Failed,
}

#[derive(Clone, Copy)]
pub struct ValidationVm {
    pub documents: RwSignal<Vec<Document>>,
    pub selected: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,

    /// Field → highlight color, kept for the whole page session
    pub colors: RwSignal<FieldColors>,
    /// Passages currently highlighted in the content
    pub highlights: RwSignal<Vec<HighlightRequest>>,
    pub justify_state: RwSignal<IndexMap<String, JustifyState>>,
    pub justifying_all: RwSignal<bool>,

    pub reset_open: RwSignal<bool>,

    status: StatusService,
}

impl ValidationVm {
    pub fn new(status: StatusService) -> Self {
        Self {
            documents: RwSignal::new(Vec::new()),
            selected: RwSignal::new(None),
            loading: RwSignal::new(false),
            colors: RwSignal::new(FieldColors::new()),
            highlights: RwSignal::new(Vec::new()),
            justify_state: RwSignal::new(IndexMap::new()),
            justifying_all: RwSignal::new(false),
            reset_open: RwSignal::new(false),
            status,
        }
    }

    pub fn load(&self) {
        let this = *self;
        this.loading.set(true);
        spawn_local(async move {
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

    pub fn current(&self) -> Option<Document> {
        let id = self.selected.get()?;
        self.documents.with(|docs| docs.iter().find(|d| d.id == id).cloned())
    }

    fn current_untracked(&self) -> Option<Document> {
        let id = self.selected.get_untracked()?;
        self.documents
            .with_untracked(|docs| docs.iter().find(|d| d.id == id).cloned())
    }

    fn is_selected(&self, id: &str) -> bool {
        self.selected.with_untracked(|s| s.as_deref() == Some(id))
    }

    fn document_untracked(&self, id: &str) -> Option<Document> {
        self.documents
            .with_untracked(|docs| docs.iter().find(|d| d.id == id).cloned())
    }

    fn update_document<R>(&self, id: &str, f: impl FnOnce(&mut Document) -> R) -> Option<R> {
        self.documents
            .try_update(|docs| docs.iter_mut().find(|d| d.id == id).map(f))
            .flatten()
    }

    pub fn select(&self, id: String) {
        self.selected.set(Some(id));
        self.justify_state.set(IndexMap::new());
        self.highlight_justified();
    }

    /// Content of the selected document split around the active highlights
    pub fn segments(&self) -> Vec<Segment> {
        let Some(doc) = self.current() else {
            return Vec::new();
        };
        self.highlights.with(|h| highlight_all(&doc.content, h))
    }

    /// Highlights every justified field of the selected document at once
    pub fn highlight_justified(&self) {
        let Some(doc) = self.current_untracked() else {
            self.highlights.set(Vec::new());
            return;
        };
        let requests = self
            .colors
            .try_update(|colors| justified_highlights(&doc, colors))
            .unwrap_or_default();
        self.highlights.set(requests);
    }

    pub fn highlight_value(&self, field: &str) {
        let Some(doc) = self.current_untracked() else {
            return;
        };
        let request = self
            .colors
            .try_update(|colors| value_highlight(&doc, field, colors))
            .flatten();
        match request {
            Some(request) => self.highlights.set(vec![request]),
            None => self.status.info("Aucune valeur à surligner"),
        }
    }

    pub fn set_field(&self, field: &str, value: String) {
        let Some(id) = self.selected.get_untracked() else {
            return;
        };
        self.update_document(&id, |doc| doc.set_field_value(field, value));
    }

    pub fn color_of(&self, field: &str) -> Option<&'static str> {
        self.colors.with(|c| c.get(field))
    }

    pub fn justify(&self, field: String) {
        let Some(id) = self.selected.get_untracked() else {
            return;
        };
        let this = *self;
        spawn_local(async move {
            this.justify_field(&id, &field).await;
        });
    }

    /// Asks for the passage supporting `field` of document `doc_id` and
    /// stores it on that document. Loading state and highlight only follow
    /// while the document is still selected. Returns whether a passage was
    /// stored.
    async fn justify_field(self, doc_id: &str, field: &str) -> bool {
        let Some(doc) = self.document_untracked(doc_id) else {
            return false;
        };
        let Some(request) = JustifyRequest::for_field(&doc, field) else {
            return false;
        };
        self.justify_state.update(|s| {
            s.insert(field.to_string(), JustifyState::Loading);
        });

        let result = api::justify_field(&request).await;
        let still_selected = self.is_selected(doc_id);
        match result {
            Ok(response) => {
                self.update_document(doc_id, |d| d.set_justification(field, response.passage.clone()));
                if still_selected {
                    self.justify_state.update(|s| {
                        s.shift_remove(field);
                    });
                    let color = self
                        .colors
                        .try_update(|c| c.color_for(field))
                        .unwrap_or_default();
                    self.highlights
                        .set(vec![HighlightRequest::new(field, response.passage, color)]);
                }
                true
            }
            Err(e) => {
                log::warn!("Justification of {} on {} failed: {}", field, doc_id, e);
                if still_selected {
                    self.justify_state.update(|s| {
                        s.insert(field.to_string(), JustifyState::Failed);
                    });
                }
                false
            }
        }
    }

    /// Justifies every extracted field one after the other, then highlights
    /// all of them together. Selecting another document ends the run.
    pub fn justify_all(&self) {
        let Some(doc) = self.current_untracked() else {
            return;
        };
        if self.justifying_all.get_untracked() {
            return;
        }
        let mut run = JustifyRun::new(&doc);
        let this = *self;
        this.justifying_all.set(true);
        spawn_local(async move {
            while let Some(field) = this.selected.with_untracked(|s| run.next_field(s.as_deref())) {
                this.justify_field(run.doc_id(), &field).await;
                TimeoutFuture::new(AppConfig::JUSTIFY_PAUSE_MS).await;
            }
            if this.selected.with_untracked(|s| run.targets(s.as_deref())) {
                this.highlight_justified();
            } else {
                log::info!("Justification run of {} ended by a new selection", run.doc_id());
            }
            this.justifying_all.set(false);
        });
    }

    pub fn save(&self) {
        let Some(doc) = self.current_untracked() else {
            return;
        };
        if !doc.modified {
            self.status.report(&ValidationError::NothingToSave.into(), "");
            return;
        }
        let this = *self;
        spawn_local(async move {
            let id = doc.id.clone();
            match documents_api::update_document(doc).await {
                Ok(()) => {
                    this.update_document(&id, |d| d.modified = false);
                    this.status.success("Modifications sauvegardées avec succès");
                }
                Err(e) => this
                    .status
                    .report(&ClientError::from(e), "Erreur lors de la sauvegarde"),
            }
        });
    }

    pub fn export(&self, format: ExportFormat) {
        let status = self.status;
        status.success(format!("Export {} en cours...", format.display_name()));
        spawn_local(async move {
            let bytes = match api::export_data(format).await {
                Ok(bytes) => bytes,
                Err(e) => {
                    status.report(&ClientError::from(e), "Erreur lors de l'export des données");
                    return;
                }
            };
            let file_name = format.file_name();
            if let Err(e) = download_bytes(&bytes, file_name, mime_for(file_name)) {
                log::error!("Export download failed: {}", e);
                status.error("Erreur lors de l'export des données");
            }
        });
    }

    pub fn reset(&self) {
        let this = *self;
        this.reset_open.set(false);
        spawn_local(async move {
            match api::reset_all().await {
                Ok(_) => {
                    this.status.success("Application réinitialisée avec succès");
                    TimeoutFuture::new(AppConfig::RESET_RELOAD_MS).await;
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().reload();
                    }
                }
                Err(e) => this
                    .status
                    .report(&ClientError::from(e), "Erreur lors de la réinitialisation"),
            }
        });
    }
}
