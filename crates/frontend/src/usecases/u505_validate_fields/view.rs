use super::view_model::{JustifyState, ValidationVm};
use crate::shared::modal::ConfirmModal;
use crate::shared::status::use_status;
use contracts::shared::highlight::Segment;
use contracts::usecases::u505_validate_fields::ExportFormat;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn ValidationPage() -> impl IntoView {
    let vm = ValidationVm::new(use_status());
    vm.load();

    view! {
        <div id="u505_validate_fields--usecase" class="page">
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center style="margin-bottom: 16px;">
                <h1>"5. Validation des résultats"</h1>
                <Flex gap=FlexGap::Small>
                    {[ExportFormat::Excel, ExportFormat::Csv].into_iter().map(|format| view! {
                        <Button on_click=move |_| vm.export(format)>
                            {format!("📊 Exporter {}", format.display_name())}
                        </Button>
                    }).collect_view()}
                    <button class="button button--danger" on:click=move |_| vm.reset_open.set(true)>
                        "🗑 Réinitialiser"
                    </button>
                </Flex>
            </Flex>

            <div class="validation-layout">
                <DocumentList vm=vm />
                <Show
                    when=move || vm.selected.get().is_some()
                    fallback=|| view! {
                        <div class="empty-state">"Sélectionnez un document pour valider ses champs"</div>
                    }
                >
                    <DocumentValidation vm=vm />
                </Show>
            </div>

            <Show when=move || vm.reset_open.get()>
                <ConfirmModal
                    title="Réinitialiser l'application"
                    message="Tous les documents, catégories et champs extraits seront supprimés. Continuer ?"
                    confirm_label="Réinitialiser"
                    on_confirm=Callback::new(move |_| vm.reset())
                    on_cancel=Callback::new(move |_| vm.reset_open.set(false))
                />
            </Show>
        </div>
    }
}

#[component]
fn DocumentList(vm: ValidationVm) -> impl IntoView {
    view! {
        <div class="validation-documents">
            <h3>{move || format!("Documents ({})", vm.documents.with(Vec::len))}</h3>
            <Show when=move || vm.loading.get()>
                <Spinner />
            </Show>
            <For
                each=move || vm.documents.get()
                key=|doc| (doc.id.clone(), doc.modified)
                children=move |doc| {
                    let id = doc.id.clone();
                    let selected_id = doc.id.clone();
                    let count = doc.extracted_fields.len();
                    view! {
                        <div
                            class=move || {
                                if vm.selected.get().as_deref() == Some(selected_id.as_str()) {
                                    "validation-document selected"
                                } else {
                                    "validation-document"
                                }
                            }
                            on:click=move |_| vm.select(id.clone())
                        >
                            <div class="document-item__title">
                                {doc.title.clone()}
                                {doc.modified.then_some(" •")}
                            </div>
                            <div class="document-item__meta">
                                {doc.category_name().unwrap_or("Non catégorisé").to_string()}
                                {format!(" · {} champs", count)}
                            </div>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[component]
fn DocumentValidation(vm: ValidationVm) -> impl IntoView {
    let title = move || {
        vm.current()
            .map(|d| d.title)
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| "Document sans titre".to_string())
    };
    let category = move || {
        vm.current()
            .and_then(|d| d.category_name().map(str::to_string))
            .unwrap_or_else(|| "Non catégorisé".to_string())
    };
    let fields = move || {
        vm.current()
            .map(|d| d.extracted_fields.keys().cloned().collect::<Vec<_>>())
            .unwrap_or_default()
    };

    view! {
        <div class="validation-interface">
            <div class="validation-header">
                <h2>{title}</h2>
                <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>{category}</Badge>
            </div>

            <div class="validation-columns">
                <div class="document-content">
                    <HighlightedContent segments=Signal::derive(move || vm.segments()) />
                </div>

                <div class="extracted-fields">
                    <Flex gap=FlexGap::Small style="margin-bottom: 12px;">
                        <button
                            class="button button--secondary"
                            disabled=move || vm.justifying_all.get()
                            on:click=move |_| vm.justify_all()
                        >
                            {move || if vm.justifying_all.get() { "Justification en cours..." } else { "💡 Justifier tout" }}
                        </button>
                        <Button on_click=move |_| vm.highlight_justified()>"🖍 Surligner les justifications"</Button>
                        <Button appearance=ButtonAppearance::Primary on_click=move |_| vm.save()>
                            "💾 Sauvegarder"
                        </Button>
                    </Flex>
                    <Show
                        when=move || !fields().is_empty()
                        fallback=|| view! { <div class="empty-fields">"Aucun champ extrait pour ce document"</div> }
                    >
                        <For
                            each=fields
                            key=|field| field.clone()
                            children=move |field| view! { <FieldRow vm=vm field=field /> }
                        />
                    </Show>
                </div>
            </div>
        </div>
    }
}

/// Document text with highlighted passages as spans
#[component]
fn HighlightedContent(segments: Signal<Vec<Segment>>) -> impl IntoView {
    view! {
        <p class="document-text">
            {move || {
                segments
                    .get()
                    .into_iter()
                    .map(|segment| match segment.mark {
                        Some(mark) => {
                            let style = format!("background-color: {}", mark.color);
                            view! {
                                <span class="highlight" style=style title=mark.field.unwrap_or_default()>
                                    {segment.text}
                                </span>
                            }
                            .into_any()
                        }
                        None => segment.text.into_any(),
                    })
                    .collect_view()
            }}
        </p>
    }
}

#[component]
fn FieldRow(vm: ValidationVm, field: String) -> impl IntoView {
    let value = {
        let field = field.clone();
        move || vm.current().map(|d| d.field_value(&field)).unwrap_or_default()
    };
    let passage = {
        let field = field.clone();
        move || {
            vm.current()
                .and_then(|d| d.passage_for(&field).map(str::to_string))
        }
    };
    let state = {
        let field = field.clone();
        move || vm.justify_state.with(|s| s.get(&field).copied())
    };
    let color = {
        let field = field.clone();
        move || vm.color_of(&field)
    };
    let (input_field, highlight_field, justify_field) = (field.clone(), field.clone(), field.clone());

    view! {
        <div class="field-row">
            <div class="field-name">
                {field.clone()}
                {move || color().map(|c| view! {
                    <span class="color-indicator" style=format!("background-color: {}", c)></span>
                })}
            </div>
            <input
                class="form__input"
                type="text"
                prop:value=value
                on:input=move |ev| vm.set_field(&input_field, event_target_value(&ev))
            />
            <div class="field-actions">
                <Button size=ButtonSize::Small on_click=move |_| vm.highlight_value(&highlight_field)>
                    "🔍 Surligner"
                </Button>
                <Button size=ButtonSize::Small on_click=move |_| vm.justify(justify_field.clone())>
                    "💡 Justifier"
                </Button>
            </div>
            {move || match state() {
                Some(JustifyState::Loading) => Some(view! {
                    <div class="justification-text">"Génération de la justification..."</div>
                }.into_any()),
                Some(JustifyState::Failed) => Some(view! {
                    <div class="justification-text">"Erreur lors de la génération de la justification."</div>
                }.into_any()),
                None => passage().map(|p| view! {
                    <div class="justification-passage">{format!("Passage: \"{}\"", p)}</div>
                }.into_any()),
            }}
        </div>
    }
}
