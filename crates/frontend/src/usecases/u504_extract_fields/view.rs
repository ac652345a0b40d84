use super::view_model::ExtractionVm;
use crate::layout::global_context::{use_global_context, Page};
use crate::shared::modal::Modal;
use crate::shared::progress::ProgressPanel;
use crate::shared::status::use_status;
use contracts::domain::a003_catalog::FieldDefinition;
use contracts::usecases::u504_extract_fields::{ExtractResponse, ExtractionPreview};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn ExtractionPage() -> impl IntoView {
    let ctx = use_global_context();
    let vm = ExtractionVm::new(ctx, use_status());
    vm.load();

    let categories = move || {
        vm.catalog.with(|c| {
            c.iter()
                .map(|(name, fields)| {
                    let fields: Vec<(String, FieldDefinition)> =
                        fields.iter().map(|(n, f)| (n.clone(), f.clone())).collect();
                    (name.clone(), fields)
                })
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div id="u504_extract_fields--usecase" class="page">
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center style="margin-bottom: 16px;">
                <h1>"4. Extraction des champs"</h1>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| ctx.navigate(Page::Validation)>
                    "Continuer vers la validation →"
                </Button>
            </Flex>

            <Card attr:style="margin-bottom: 16px;">
                <Flex vertical=true gap=FlexGap::Medium>
                    <Flex vertical=true gap=FlexGap::Small>
                        <Label>"Clé API Mistral"</Label>
                        <Input
                            input_type=InputType::Password
                            value=vm.api_key
                            placeholder="Laisser vide pour utiliser la clé configurée"
                        />
                    </Flex>
                    <Flex vertical=true gap=FlexGap::Small>
                        <Label>"Instructions d'extraction (optionnel)"</Label>
                        <Textarea value=vm.instructions placeholder="Ex: dates au format JJ/MM/AAAA" />
                    </Flex>
                    <Flex gap=FlexGap::Small>
                        <Button on_click=move |_| vm.show_preview()>"👁 Aperçu"</Button>
                        <button
                            class="button button--primary"
                            disabled=move || vm.extracting.get()
                            on:click=move |_| vm.extract()
                        >
                            {move || if vm.extracting.get() { "Extraction en cours..." } else { "🚀 Lancer l'extraction" }}
                        </button>
                    </Flex>
                </Flex>
            </Card>

            <ProgressPanel title="Extraction en cours" state=vm.progress />

            {move || vm.results.get().map(|results| view! { <ExtractionResults results=results /> })}

            <Show when=move || vm.loading.get()>
                <Spinner />
            </Show>

            <h2>{move || format!("Champs à extraire ({} documents)", vm.documents.with(Vec::len))}</h2>
            <div class="extraction-categories">
                <For
                    each=categories
                    key=|(name, fields)| (name.clone(), fields.len())
                    children=move |(category, fields)| view! {
                        <CategoryDescriptions vm=vm category=category fields=fields />
                    }
                />
            </div>

            {move || vm.preview.get().map(|preview| view! {
                <PreviewModal preview=preview on_close=Callback::new(move |_| vm.preview.set(None)) />
            })}
        </div>
    }
}

#[component]
fn CategoryDescriptions(
    vm: ExtractionVm,
    category: String,
    fields: Vec<(String, FieldDefinition)>,
) -> impl IntoView {
    let empty = fields.is_empty();

    view! {
        <div class="extraction-category">
            <h3>{format!("📁 {}", category)}</h3>
            {empty.then(|| view! { <div class="empty-fields">"Aucun champ défini"</div> })}
            {fields.into_iter().map(|(field, definition)| {
                let initial = vm.description(&category, &field);
                let (cat, name) = (category.clone(), field.clone());
                view! {
                    <div class="extraction-field">
                        <div class="field-item__header">
                            <span class="field-name">{field}</span>
                            <span class="field-type">{definition.field_type.display_name().to_string()}</span>
                        </div>
                        <textarea
                            class="form__textarea"
                            rows="2"
                            placeholder="Description utilisée pour guider l'extraction"
                            prop:value=initial
                            on:input=move |ev| vm.set_description(&cat, &name, event_target_value(&ev))
                        ></textarea>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

#[component]
fn ExtractionResults(results: ExtractResponse) -> impl IntoView {
    let errors = results.errors();

    view! {
        <Card attr:style="margin-bottom: 16px;">
            <h3>"Résultats de l'extraction"</h3>
            <div class="results-summary">
                <div class="summary-item">
                    <span class="summary-value">{results.total_documents}</span>
                    <span class="summary-label">"Documents"</span>
                </div>
                <div class="summary-item">
                    <span class="summary-value">{results.processed_documents}</span>
                    <span class="summary-label">"Traités"</span>
                </div>
                <div class="summary-item">
                    <span class="summary-value">{errors}</span>
                    <span class="summary-label">"Erreurs"</span>
                </div>
                <div class="summary-item">
                    <span class="summary-value">{results.total_fields_extracted}</span>
                    <span class="summary-label">"Champs extraits"</span>
                </div>
            </div>
            <div class="results-details">
                {results.results.into_iter().map(|(_, outcome)| {
                    let detail = if outcome.success {
                        format!("{} champs extraits", outcome.field_count)
                    } else {
                        outcome.error.unwrap_or_else(|| "Erreur".to_string())
                    };
                    let class = if outcome.success { "result-item success" } else { "result-item error" };
                    view! {
                        <div class=class>
                            <span class="result-title">{outcome.document_title}</span>
                            <span class="result-detail">{detail}</span>
                        </div>
                    }
                }).collect_view()}
            </div>
        </Card>
    }
}

#[component]
fn PreviewModal(preview: ExtractionPreview, on_close: Callback<()>) -> impl IntoView {
    view! {
        <Modal title="Aperçu de l'extraction" on_close=on_close>
            <p><strong>"Total des documents : "</strong>{preview.total_documents}</p>
            <ul class="preview-lines">
                {preview.lines.into_iter().map(|line| view! {
                    <li>{format!("📁 {} : {} documents, {} champs", line.category, line.documents, line.fields)}</li>
                }).collect_view()}
            </ul>
            <div class="modal-footer">
                <Button appearance=ButtonAppearance::Primary on_click=move |_| on_close.run(())>"Fermer"</Button>
            </div>
        </Modal>
    }
}
