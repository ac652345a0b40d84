use super::view_model::UploadVm;
use crate::domain::a001_document::ui::{DocumentCard, DocumentPreview};
use crate::layout::global_context::{use_global_context, Page};
use crate::shared::files::{dropped_files, reset_input, selected_files};
use crate::shared::status::use_status;
use leptos::ev;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn UploadPage() -> impl IntoView {
    let vm = UploadVm::new(use_status());
    let ctx = use_global_context();

    let docs_hover = RwSignal::new(false);
    let excel_hover = RwSignal::new(false);
    let open_preview = Callback::new(move |id: String| vm.preview_id.set(Some(id)));

    view! {
        <div id="u501_upload_documents--usecase" class="page">
            <h1>"1. Upload des documents"</h1>

            <div class="upload-grid">
                <label
                    class=move || if docs_hover.get() { "drop-zone drag-over" } else { "drop-zone" }
                    on:dragover=move |ev: ev::DragEvent| { ev.prevent_default(); docs_hover.set(true); }
                    on:dragleave=move |_| docs_hover.set(false)
                    on:drop=move |ev: ev::DragEvent| {
                        ev.prevent_default();
                        docs_hover.set(false);
                        vm.upload_files(dropped_files(&ev));
                    }
                >
                    <div class="drop-zone__icon">"📄"</div>
                    <div class="drop-zone__text">"Glissez vos documents ici ou cliquez pour sélectionner"</div>
                    <div class="drop-zone__hint">"PDF, DOCX, TXT, images"</div>
                    <input
                        type="file"
                        multiple=true
                        style="display: none;"
                        on:change=move |ev| {
                            vm.upload_files(selected_files(&ev));
                            reset_input(&ev);
                        }
                    />
                </label>

                <label
                    class=move || if excel_hover.get() { "drop-zone drag-over" } else { "drop-zone" }
                    on:dragover=move |ev: ev::DragEvent| { ev.prevent_default(); excel_hover.set(true); }
                    on:dragleave=move |_| excel_hover.set(false)
                    on:drop=move |ev: ev::DragEvent| {
                        ev.prevent_default();
                        excel_hover.set(false);
                        if let Some(file) = dropped_files(&ev).into_iter().next() {
                            vm.select_excel(file);
                        }
                    }
                >
                    <div class="drop-zone__icon">"📊"</div>
                    <div class="drop-zone__text">"Fichier Excel ou CSV: une ligne par document"</div>
                    <input
                        type="file"
                        accept=".xlsx,.xls,.csv"
                        style="display: none;"
                        on:change=move |ev| {
                            if let Some(file) = selected_files(&ev).into_iter().next() {
                                vm.select_excel(file);
                            }
                            reset_input(&ev);
                        }
                    />
                </label>
            </div>

            {move || vm.excel_name.get().map(|name| view! { <ExcelConfig vm=vm name=name /> })}

            <Show when=move || vm.uploading.get()>
                <Flex gap=FlexGap::Small style="align-items: center;">
                    <Spinner />
                    <span>"Traitement en cours..."</span>
                </Flex>
            </Show>

            <Show when=move || !vm.documents.get().is_empty()>
                <section class="documents-section">
                    <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center style="margin-bottom: 16px;">
                        <h2>{move || format!("Documents chargés ({})", vm.documents.get().len())}</h2>
                        <Button appearance=ButtonAppearance::Primary on_click=move |_| ctx.navigate(Page::Categorization)>
                            "Continuer vers la catégorisation →"
                        </Button>
                    </Flex>
                    <div class="documents-grid">
                        <For
                            each=move || vm.documents.get()
                            key=|doc| doc.id.clone()
                            children=move |doc| view! { <DocumentCard document=doc on_open=open_preview /> }
                        />
                    </div>
                </section>
            </Show>

            <DocumentPreview doc_id=vm.preview_id />
        </div>
    }
}

#[component]
fn ExcelConfig(vm: UploadVm, name: String) -> impl IntoView {
    let total_rows = move || vm.columns.get().total_rows;
    let column_options = move || {
        vm.columns
            .get()
            .columns
            .into_iter()
            .map(|c| view! { <option value=c.clone()>{c.clone()}</option> })
            .collect_view()
    };

    view! {
        <Card attr:style="margin: 16px 0;">
            <h3>{format!("Configuration de l'import: {}", name)}</h3>
            <Flex vertical=true gap=FlexGap::Medium>
                <Flex vertical=true gap=FlexGap::Small>
                    <Label>"Colonne contenant le texte"</Label>
                    <select
                        prop:value=move || vm.text_column.get()
                        on:change=move |ev| vm.text_column.set(event_target_value(&ev))
                    >
                        <option value="">"Sélectionnez une colonne"</option>
                        {column_options}
                    </select>
                </Flex>
                <Flex vertical=true gap=FlexGap::Small>
                    <Label>"Colonne contenant le titre (optionnel)"</Label>
                    <select
                        prop:value=move || vm.title_column.get()
                        on:change=move |ev| vm.title_column.set(event_target_value(&ev))
                    >
                        <option value="">"Aucune (utiliser Ligne 1, Ligne 2...)"</option>
                        {column_options}
                    </select>
                </Flex>
                <Flex gap=FlexGap::Medium>
                    <Flex vertical=true gap=FlexGap::Small>
                        <Label>"Ligne de début"</Label>
                        <Input input_type=InputType::Number value=vm.start_row />
                    </Flex>
                    <Flex vertical=true gap=FlexGap::Small>
                        <Label>"Ligne de fin"</Label>
                        <input
                            type="number"
                            class="form__input"
                            min="1"
                            placeholder=move || format!("Toutes ({} lignes)", total_rows())
                            prop:value=move || vm.end_row.get()
                            on:input=move |ev| vm.end_row.set(event_target_value(&ev))
                        />
                    </Flex>
                </Flex>
                <Flex gap=FlexGap::Small>
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| vm.process_excel()>
                        "Importer les lignes"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| vm.cancel_excel()>
                        "Annuler"
                    </Button>
                </Flex>
            </Flex>
        </Card>
    }
}
