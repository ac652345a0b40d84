use super::api;
use crate::domain::a001_document::api as documents_api;
use crate::domain::a003_catalog::api as catalog_api;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::status::StatusService;
use contracts::domain::a002_category::CategoryStore;
use contracts::shared::drag_drop::{DragController, DropTarget};
use contracts::shared::error::{ClientError, ValidationError};
use contracts::usecases::u502_categorize_documents::{ClusterRequest, OrganizeRequest};
use contracts::usecases::u506_api_key::resolve_api_key;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::File;

const MOVE_ERROR: &str = "Erreur lors de la mise à jour de la catégorie";

/// Visualization panel state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Visualization {
    Hidden,
    Loading,
    Ready(String),
}

#[derive(Clone, Copy)]
pub struct CategorizationVm {
    pub store: RwSignal<CategoryStore>,
    pub drag: RwSignal<DragController>,
    pub loading: RwSignal<bool>,

    pub cluster_open: RwSignal<bool>,
    pub api_key: RwSignal<String>,
    pub instructions: RwSignal<String>,
    pub clustering: RwSignal<bool>,
    pub organizing: RwSignal<bool>,

    pub visualization: RwSignal<Visualization>,

    pub add_open: RwSignal<bool>,
    pub new_category: RwSignal<String>,

    pub preview_id: RwSignal<Option<String>>,

    ctx: AppGlobalContext,
    status: StatusService,
}

impl CategorizationVm {
    pub fn new(ctx: AppGlobalContext, status: StatusService) -> Self {
        Self {
            store: RwSignal::new(CategoryStore::new()),
            drag: RwSignal::new(DragController::new()),
            loading: RwSignal::new(false),
            cluster_open: RwSignal::new(false),
            api_key: RwSignal::new(String::new()),
            instructions: RwSignal::new(String::new()),
            clustering: RwSignal::new(false),
            organizing: RwSignal::new(false),
            visualization: RwSignal::new(Visualization::Hidden),
            add_open: RwSignal::new(false),
            new_category: RwSignal::new(String::new()),
            preview_id: RwSignal::new(None),
            ctx,
            status,
        }
    }

    pub fn load(&self) {
        let this = *self;
        this.loading.set(true);
        spawn_local(async move {
            match documents_api::get_all_documents().await {
                Ok(documents) => {
                    log::info!("Loaded {} documents", documents.len());
                    this.store.update(|s| s.load(documents));
                }
                Err(e) => this.status.report(
                    &ClientError::from(e),
                    "Erreur lors du chargement des documents",
                ),
            }
            this.loading.set(false);
        });
    }

    pub fn drag_start(&self, doc_id: String, source: DropTarget) {
        self.drag.update(|d| d.start(doc_id, source));
    }

    pub fn drag_over(&self, target: DropTarget) {
        // Only notify when the hovered container changes
        let changed = self.drag.with_untracked(|d| d.is_dragging() && !d.is_hovered(&target));
        if changed {
            self.drag.update(|d| {
                d.over(target);
            });
        }
    }

    pub fn drag_leave(&self, target: DropTarget) {
        self.drag.update(|d| d.leave(&target));
    }

    pub fn drag_end(&self) {
        if self.drag.with_untracked(|d| d.is_dragging()) {
            self.drag.update(|d| d.end());
        }
    }

    /// Drop on a container; `None` is a drop outside every container
    pub fn drop_on(&self, target: Option<DropTarget>) {
        let intent = self.drag.try_update(|d| d.drop(target)).flatten();
        if let Some(intent) = intent {
            self.move_document(intent.doc_id, intent.to.category().map(str::to_string));
        }
    }

    /// Optimistic move: applied locally, persisted, reverted if the backend
    /// refuses and nothing moved the document since.
    pub fn move_document(&self, doc_id: String, to: Option<String>) {
        let applied = self
            .store
            .try_update(|s| s.move_document(&doc_id, to.as_deref()));
        let mv = match applied {
            Some(Ok(mv)) => mv,
            Some(Err(e)) => {
                self.status.report(&e.into(), MOVE_ERROR);
                return;
            }
            None => return,
        };
        if mv.is_noop() {
            return;
        }

        let this = *self;
        spawn_local(async move {
            if let Err(e) = documents_api::update_document_category(&mv.doc_id, mv.to.as_deref()).await {
                let reverted = this.store.try_update(|s| s.revert(&mv)).unwrap_or(false);
                log::warn!(
                    "Category update of {} failed, reverted: {}",
                    mv.doc_id,
                    reverted
                );
                this.status.report(&ClientError::from(e), MOVE_ERROR);
            }
        });
    }

    pub fn remove_from_category(&self, doc_id: String) {
        self.move_document(doc_id, None);
    }

    pub fn open_add_category(&self) {
        self.new_category.set(String::new());
        self.add_open.set(true);
    }

    pub fn create_category(&self) {
        let name = self.new_category.get_untracked();
        match self.store.try_update(|s| s.add_category(&name)) {
            Some(Ok(name)) => {
                self.add_open.set(false);
                self.status.success(format!("Catégorie \"{}\" créée", name));
            }
            Some(Err(e)) => self.status.report(&e.into(), ""),
            None => {}
        }
    }

    pub fn cluster(&self) {
        let api_key = match resolve_api_key(&self.api_key.get_untracked(), self.ctx.has_stored_key()) {
            Ok(key) => key,
            Err(e) => {
                self.status.report(&e.into(), "");
                return;
            }
        };
        let documents = self.store.with_untracked(|s| s.documents().to_vec());
        if documents.is_empty() {
            self.status.report(&ValidationError::NoDocuments.into(), "");
            return;
        }
        let request = ClusterRequest {
            documents,
            api_key,
            instructions: self.instructions.get_untracked(),
        };

        let this = *self;
        this.clustering.set(true);
        this.status.info("Clustering en cours...");
        spawn_local(async move {
            match api::cluster_documents(&request).await {
                Ok(_) => {
                    this.status.success("Clustering terminé avec succès !");
                    this.cluster_open.set(false);
                    this.load();
                }
                Err(e) => this
                    .status
                    .report(&ClientError::from(e), "Erreur lors du clustering"),
            }
            this.clustering.set(false);
        });
    }

    pub fn organization_request(&self) -> Result<OrganizeRequest, ValidationError> {
        self.store.with_untracked(|s| {
            if !s.has_categories() {
                return Err(ValidationError::NoTargetCategories);
            }
            let documents: Vec<_> = s.uncategorized().into_iter().cloned().collect();
            if documents.is_empty() {
                return Err(ValidationError::AllDocumentsCategorized);
            }
            Ok(OrganizeRequest {
                documents,
                categories: s.category_names().into_iter().map(str::to_string).collect(),
            })
        })
    }

    pub fn organize(&self) {
        if self.organizing.get_untracked() {
            return;
        }
        let request = match self.organization_request() {
            Ok(request) => request,
            Err(e) => {
                self.status.report(&e.into(), "");
                return;
            }
        };

        let this = *self;
        this.organizing.set(true);
        this.status.info(format!(
            "Organisation par IA en cours... {} documents à traiter dans {} catégories",
            request.documents.len(),
            request.categories.len()
        ));
        spawn_local(async move {
            match api::organize_documents(&request).await {
                Ok(response) => {
                    let outcome = this
                        .store
                        .try_update(|s| s.apply_organization(&response.organized_documents))
                        .unwrap_or_default();
                    this.status.success(outcome.message());
                }
                Err(e) => this.status.report(
                    &ClientError::from(e),
                    "Erreur lors de l'organisation par IA",
                ),
            }
            this.organizing.set(false);
        });
    }

    pub fn show_visualization(&self) {
        let this = *self;
        this.visualization.set(Visualization::Loading);
        spawn_local(async move {
            match api::get_cluster_visualization().await {
                Ok(response) => this
                    .visualization
                    .set(Visualization::Ready(response.data_url())),
                Err(e) => {
                    this.visualization.set(Visualization::Hidden);
                    this.status.report(
                        &ClientError::from(e),
                        "Erreur lors de la génération de la visualisation",
                    );
                }
            }
        });
    }

    /// Replaces the explicit categories with those of a catalog file
    pub fn load_catalog_file(&self, file: File) {
        let this = *self;
        spawn_local(async move {
            match catalog_api::upload_catalog(file).await {
                Ok(catalog) => {
                    this.store.update(|s| s.reset_categories(catalog.keys().cloned()));
                    this.status.success("Catalog chargé avec succès");
                }
                Err(e) => this
                    .status
                    .report(&ClientError::from(e), "Erreur lors du chargement"),
            }
        });
    }
}
