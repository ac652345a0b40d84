use super::view_model::{CategorizationVm, Visualization};
use crate::domain::a001_document::ui::DocumentPreview;
use crate::layout::global_context::{use_global_context, Page};
use crate::shared::files::{reset_input, selected_files};
use crate::shared::modal::Modal;
use crate::shared::status::use_status;
use contracts::domain::a001_document::Document;
use contracts::shared::drag_drop::DropTarget;
use leptos::ev;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn CategorizationPage() -> impl IntoView {
    let ctx = use_global_context();
    let vm = CategorizationVm::new(ctx, use_status());
    vm.load();

    let category_names = move || {
        vm.store.with(|s| {
            s.category_names()
                .into_iter()
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div
            id="u502_categorize_documents--usecase"
            class="page"
            on:dragover=move |ev: ev::DragEvent| ev.prevent_default()
            on:drop=move |ev: ev::DragEvent| {
                ev.prevent_default();
                vm.drop_on(None);
            }
        >
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center style="margin-bottom: 16px;">
                <h1>"2. Catégorisation des documents"</h1>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| ctx.navigate(Page::FieldSelection)>
                    "Continuer vers les champs →"
                </Button>
            </Flex>

            <Flex gap=FlexGap::Small class="toolbar">
                <Button on_click=move |_| vm.cluster_open.update(|open| *open = !*open)>
                    "🤖 Clustering automatique"
                </Button>
                <button
                    class="button button--primary"
                    disabled=move || vm.organizing.get()
                    on:click=move |_| vm.organize()
                >
                    {move || if vm.organizing.get() { "⏳ Organisation en cours..." } else { "✨ Organiser avec l'IA" }}
                </button>
                <Button on_click=move |_| vm.open_add_category()>"➕ Nouvelle catégorie"</Button>
                <Button on_click=move |_| vm.show_visualization()>"📈 Visualiser"</Button>
                <label class="button button--secondary">
                    "📁 Charger un catalog"
                    <input
                        type="file"
                        accept=".json"
                        style="display: none;"
                        on:change=move |ev| {
                            if let Some(file) = selected_files(&ev).into_iter().next() {
                                vm.load_catalog_file(file);
                            }
                            reset_input(&ev);
                        }
                    />
                </label>
            </Flex>

            <Show when=move || vm.cluster_open.get()>
                <ClusterConfig vm=vm />
            </Show>

            <VisualizationPanel vm=vm />

            <Show when=move || vm.loading.get()>
                <Spinner />
            </Show>

            <div class="categorization-layout">
                <DropColumn vm=vm target=DropTarget::Uncategorized>
                    <h3>
                        {move || format!(
                            "Documents non catégorisés ({})",
                            vm.store.with(|s| s.uncategorized().len())
                        )}
                    </h3>
                    <div class="document-list">
                        <For
                            each=move || vm.store.with(|s| s.uncategorized().into_iter().cloned().collect::<Vec<_>>())
                            key=|doc| doc.id.clone()
                            children=move |doc| view! { <DocumentChip vm=vm document=doc /> }
                        />
                    </div>
                </DropColumn>

                <div id="categories-container" class="categories-board">
                    <Show
                        when=move || vm.store.with(|s| s.has_categories())
                        fallback=|| view! {
                            <div class="empty-state">
                                "Aucune catégorie. Créez-en une ou lancez un clustering automatique."
                            </div>
                        }
                    >
                        <For
                            each=category_names
                            key=|name| name.clone()
                            children=move |name| view! { <CategoryColumn vm=vm name=name /> }
                        />
                    </Show>
                </div>
            </div>

            <Show when=move || vm.add_open.get()>
                <Modal title="Nouvelle catégorie" on_close=Callback::new(move |_| vm.add_open.set(false))>
                    <Flex vertical=true gap=FlexGap::Medium>
                        <Input value=vm.new_category placeholder="Nom de la catégorie" />
                        <div class="modal-footer">
                            <Button appearance=ButtonAppearance::Secondary on_click=move |_| vm.add_open.set(false)>
                                "Annuler"
                            </Button>
                            <Button appearance=ButtonAppearance::Primary on_click=move |_| vm.create_category()>
                                "Créer"
                            </Button>
                        </div>
                    </Flex>
                </Modal>
            </Show>

            <DocumentPreview doc_id=vm.preview_id />
        </div>
    }
}

/// Container accepting dropped cards
#[component]
fn DropColumn(vm: CategorizationVm, target: DropTarget, children: Children) -> impl IntoView {
    let hover_target = target.clone();
    let over_target = target.clone();
    let leave_target = target.clone();
    let base_class = match &target {
        DropTarget::Uncategorized => "uncategorized-column",
        DropTarget::Category(_) => "category",
    };

    view! {
        <div
            class=move || {
                if vm.drag.with(|d| d.is_hovered(&hover_target)) {
                    format!("{} drag-over", base_class)
                } else {
                    base_class.to_string()
                }
            }
            on:dragover=move |ev: ev::DragEvent| {
                ev.prevent_default();
                ev.stop_propagation();
                vm.drag_over(over_target.clone());
            }
            on:dragleave=move |_| vm.drag_leave(leave_target.clone())
            on:drop=move |ev: ev::DragEvent| {
                ev.prevent_default();
                ev.stop_propagation();
                vm.drop_on(Some(target.clone()));
            }
        >
            {children()}
        </div>
    }
}

#[component]
fn CategoryColumn(vm: CategorizationVm, name: String) -> impl IntoView {
    let count_name = name.clone();
    let docs_name = name.clone();
    let documents = move || {
        vm.store.with(|s| {
            s.documents_in(&docs_name)
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    view! {
        <DropColumn vm=vm target=DropTarget::Category(name.clone())>
            <div class="category-header">
                <span class="category-name">{name.clone()}</span>
                <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                    {move || vm.store.with(|s| s.count(&count_name)).to_string()}
                </Badge>
            </div>
            <div class="category-documents">
                <For
                    each=documents
                    key=|doc| doc.id.clone()
                    children=move |doc| view! { <DocumentChip vm=vm document=doc /> }
                />
            </div>
        </DropColumn>
    }
}

/// Draggable document card of the board
#[component]
fn DocumentChip(vm: CategorizationVm, document: Document) -> impl IntoView {
    let source = DropTarget::from_category(document.category_name());
    let removable = document.is_categorized();
    let drag_id = document.id.clone();
    let open_id = document.id.clone();
    let remove_id = document.id.clone();
    let dragging_id = document.id.clone();

    view! {
        <div
            class=move || {
                if vm.drag.with(|d| d.dragged() == Some(dragging_id.as_str())) {
                    "document-item dragging"
                } else {
                    "document-item"
                }
            }
            draggable="true"
            on:dragstart=move |ev: ev::DragEvent| {
                if let Some(dt) = ev.data_transfer() {
                    let _ = dt.set_data("text/plain", &drag_id);
                }
                vm.drag_start(drag_id.clone(), source.clone());
            }
            on:dragend=move |_| vm.drag_end()
            on:click=move |_| vm.preview_id.set(Some(open_id.clone()))
        >
            <div class="document-item__title">{document.title.clone()}</div>
            <div class="document-item__preview">{document.preview()}</div>
            {removable.then(|| view! {
                <button
                    class="button button--icon document-item__remove"
                    title="Retirer de la catégorie"
                    on:click=move |ev: ev::MouseEvent| {
                        ev.stop_propagation();
                        vm.remove_from_category(remove_id.clone());
                    }
                >
                    "×"
                </button>
            })}
        </div>
    }
}

#[component]
fn ClusterConfig(vm: CategorizationVm) -> impl IntoView {
    let ctx = use_global_context();

    view! {
        <Card attr:style="margin: 16px 0;">
            <h3>"Configuration Mistral"</h3>
            <Flex vertical=true gap=FlexGap::Medium>
                <Flex vertical=true gap=FlexGap::Small>
                    <Label>"Clé API Mistral"</Label>
                    <Input
                        input_type=InputType::Password
                        value=vm.api_key
                        placeholder="Laisser vide pour utiliser la clé configurée"
                    />
                    {move || ctx.api_key.get().api_key.map(|masked| view! {
                        <span class="hint">{format!("Clé configurée: {}", masked)}</span>
                    })}
                </Flex>
                <Flex vertical=true gap=FlexGap::Small>
                    <Label>"Instructions (optionnel)"</Label>
                    <Textarea value=vm.instructions placeholder="Ex: regrouper par type de document" />
                </Flex>
                <Flex gap=FlexGap::Small>
                    <button
                        class="button button--primary"
                        disabled=move || vm.clustering.get()
                        on:click=move |_| vm.cluster()
                    >
                        {move || if vm.clustering.get() { "Clustering en cours..." } else { "Lancer le clustering" }}
                    </button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| vm.cluster_open.set(false)>
                        "Annuler"
                    </Button>
                </Flex>
            </Flex>
        </Card>
    }
}

#[component]
fn VisualizationPanel(vm: CategorizationVm) -> impl IntoView {
    view! {
        {move || match vm.visualization.get() {
            Visualization::Hidden => ().into_any(),
            Visualization::Loading => view! {
                <Card attr:style="margin: 16px 0;">
                    <Flex gap=FlexGap::Small align=FlexAlign::Center>
                        <Spinner />
                        <span>"Génération de la visualisation..."</span>
                    </Flex>
                </Card>
            }
            .into_any(),
            Visualization::Ready(src) => view! {
                <Card attr:style="margin: 16px 0;">
                    <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                        <h3>"Visualisation des clusters"</h3>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| vm.visualization.set(Visualization::Hidden)
                        >
                            "Fermer"
                        </Button>
                    </Flex>
                    <img class="cluster-visualization" src=src alt="Visualisation des clusters" />
                </Card>
            }
            .into_any(),
        }}
    }
}
