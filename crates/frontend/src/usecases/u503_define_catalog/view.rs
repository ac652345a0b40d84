use super::view_model::{FieldModal, FieldSelectionVm};
use crate::layout::global_context::{use_global_context, Page};
use crate::shared::files::{reset_input, selected_files};
use crate::shared::modal::{ConfirmModal, Modal};
use crate::shared::progress::ProgressPanel;
use crate::shared::status::use_status;
use contracts::domain::a003_catalog::{CategoryCard, FieldDefinition, FieldType};
use contracts::usecases::u503_define_catalog::{MAX_FIELD_COUNT, MIN_FIELD_COUNT};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn FieldSelectionPage() -> impl IntoView {
    let ctx = use_global_context();
    let vm = FieldSelectionVm::new(ctx, use_status());
    vm.load();

    view! {
        <div id="u503_define_catalog--usecase" class="page">
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center style="margin-bottom: 16px;">
                <h1>"3. Sélection des champs"</h1>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| ctx.navigate(Page::Extraction)>
                    "Continuer vers l'extraction →"
                </Button>
            </Flex>

            <Flex gap=FlexGap::Small class="toolbar">
                <Button appearance=ButtonAppearance::Primary on_click=move |_| vm.save()>
                    "💾 Sauvegarder le catalog"
                </Button>
                <Button on_click=move |_| vm.download()>"⬇ Télécharger catalog.json"</Button>
                <label class="button button--secondary">
                    "📁 Charger un catalog"
                    <input
                        type="file"
                        accept=".json"
                        style="display: none;"
                        on:change=move |ev| {
                            if let Some(file) = selected_files(&ev).into_iter().next() {
                                vm.upload(file);
                            }
                            reset_input(&ev);
                        }
                    />
                </label>
                <button
                    class="button button--secondary"
                    disabled=move || vm.describing.get()
                    on:click=move |_| vm.generate_descriptions()
                >
                    "📝 Générer les descriptions manquantes"
                </button>
            </Flex>

            <GenerationSettings vm=vm />

            <ProgressPanel title="Génération des champs" state=vm.progress />

            <Show when=move || vm.loading.get()>
                <Spinner />
            </Show>

            <div class="categories-grid">
                {move || {
                    let cards = vm.cards();
                    if cards.is_empty() && !vm.loading.get() {
                        view! {
                            <div class="empty-state">
                                "Aucune catégorie. Catégorisez d'abord vos documents ou chargez un catalog."
                            </div>
                        }
                        .into_any()
                    } else {
                        cards
                            .into_iter()
                            .map(|card| view! { <CategoryPanel vm=vm card=card /> })
                            .collect_view()
                            .into_any()
                    }
                }}
            </div>

            {move || vm.modal.get().map(|modal| match modal {
                FieldModal::Add { category } => view! { <AddFieldModal vm=vm category=category /> }.into_any(),
                FieldModal::Edit { .. } => view! { <EditFieldModal vm=vm /> }.into_any(),
                FieldModal::AllowedValues { category, field } => {
                    view! { <AllowedValuesModal vm=vm category=category field=field /> }.into_any()
                }
                FieldModal::Delete { field, .. } => view! {
                    <ConfirmModal
                        title="Supprimer le champ"
                        message=format!("Êtes-vous sûr de vouloir supprimer le champ \"{}\" ?", field)
                        confirm_label="Supprimer"
                        on_confirm=Callback::new(move |_| vm.delete_field())
                        on_cancel=Callback::new(move |_| vm.close_modal())
                    />
                }
                .into_any(),
            })}
        </div>
    }
}

#[component]
fn GenerationSettings(vm: FieldSelectionVm) -> impl IntoView {
    view! {
        <Card attr:style="margin: 16px 0;">
            <h3>"🤖 Génération avec IA"</h3>
            <Flex gap=FlexGap::Medium>
                <Flex vertical=true gap=FlexGap::Small>
                    <Label>{format!("Nombre de champs ({}-{})", MIN_FIELD_COUNT, MAX_FIELD_COUNT)}</Label>
                    <Input input_type=InputType::Number value=vm.num_fields />
                </Flex>
                <Flex vertical=true gap=FlexGap::Small>
                    <Label>"Clé API Mistral"</Label>
                    <Input
                        input_type=InputType::Password
                        value=vm.api_key
                        placeholder="Laisser vide pour utiliser la clé configurée"
                    />
                </Flex>
            </Flex>
            <Flex vertical=true gap=FlexGap::Small attr:style="margin-top: 12px;">
                <Label>"Instructions (optionnel)"</Label>
                <Textarea value=vm.instructions placeholder="Ex: privilégier les montants et les dates" />
            </Flex>
            <div style="margin-top: 12px;">
                <button
                    class="button button--primary"
                    disabled=move || vm.generating.get()
                    on:click=move |_| vm.generate_all()
                >
                    {move || if vm.generating.get() { "Génération en cours..." } else { "Générer pour toutes les catégories" }}
                </button>
            </div>
        </Card>
    }
}

#[component]
fn CategoryPanel(vm: FieldSelectionVm, card: CategoryCard) -> impl IntoView {
    let name = card.name.clone();
    let title = name.clone();
    let fields_name = name.clone();
    let add_name = name.clone();
    let generate_name = name.clone();
    let document_label = card.document_count_label();
    let field_label = card.field_count_label();
    let fields = move || {
        vm.catalog.with(|c| {
            c.fields(&fields_name)
                .map(|f| {
                    f.iter()
                        .map(|(n, d)| (n.clone(), d.clone()))
                        .collect::<Vec<_>>()
                })
                .unwrap_or_default()
        })
    };

    view! {
        <div class="category-card">
            <div class="category-card__header">
                <h3>{title}</h3>
                <Flex gap=FlexGap::Small>
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>
                        {document_label}
                    </Badge>
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                        {field_label}
                    </Badge>
                </Flex>
            </div>
            <div class="fields-list">
                {move || {
                    let fields = fields();
                    if fields.is_empty() {
                        view! { <div class="empty-fields">"Aucun champ défini"</div> }.into_any()
                    } else {
                        let category = name.clone();
                        fields
                            .into_iter()
                            .map(|(field, definition)| {
                                view! {
                                    <FieldItem
                                        vm=vm
                                        category=category.clone()
                                        name=field
                                        definition=definition
                                    />
                                }
                            })
                            .collect_view()
                            .into_any()
                    }
                }}
            </div>
            <Flex gap=FlexGap::Small>
                <Button on_click=move |_| vm.open_add(add_name.clone())>"➕ Ajouter un champ"</Button>
                <button
                    class="button button--secondary"
                    disabled=move || vm.generating.get()
                    on:click=move |_| vm.generate_for(generate_name.clone())
                >
                    "🤖 Générer avec IA"
                </button>
            </Flex>
        </div>
    }
}

#[component]
fn FieldItem(
    vm: FieldSelectionVm,
    category: String,
    name: String,
    definition: FieldDefinition,
) -> impl IntoView {
    let description = if definition.has_description() {
        definition.description.clone()
    } else {
        "Aucune description".to_string()
    };
    let (edit_cat, edit_name) = (category.clone(), name.clone());
    let (values_cat, values_name) = (category.clone(), name.clone());
    let (delete_cat, delete_name) = (category, name.clone());

    view! {
        <div class="field-item">
            <div class="field-item__header">
                <span class="field-name">{name}</span>
                <span class="field-type">{definition.field_type.display_name().to_string()}</span>
            </div>
            <div class="field-description">{description}</div>
            {(!definition.allowed_values.is_empty()).then(|| view! {
                <div class="allowed-values">
                    {definition.allowed_values.iter().map(|v| view! {
                        <span class="allowed-value-tag">{v.clone()}</span>
                    }).collect_view()}
                </div>
            })}
            <div class="field-actions">
                <button class="button button--icon" title="Modifier"
                    on:click=move |_| vm.open_edit(edit_cat.clone(), edit_name.clone())>"✏️"</button>
                <button class="button button--icon" title="Valeurs autorisées"
                    on:click=move |_| vm.open_allowed_values(values_cat.clone(), values_name.clone())>"📋"</button>
                <button class="button button--icon" title="Supprimer"
                    on:click=move |_| vm.confirm_delete(delete_cat.clone(), delete_name.clone())>"🗑️"</button>
            </div>
        </div>
    }
}

/// `<select>` over the field types. A type unknown to the forms stays
/// selectable so editing a field does not rewrite it.
#[component]
fn FieldTypeSelect(value: Signal<FieldType>, on_change: Callback<FieldType>) -> impl IntoView {
    let options = move || {
        let current = value.get();
        let mut types = FieldType::all().to_vec();
        if !types.contains(&current) {
            types.push(current);
        }
        types
            .into_iter()
            .map(|t| {
                let (key, label) = (t.as_str().to_string(), t.display_name().to_string());
                view! { <option value=key>{label}</option> }
            })
            .collect_view()
    };

    view! {
        <select
            class="form__select"
            prop:value=move || value.with(|t| t.as_str().to_string())
            on:change=move |ev| on_change.run(FieldType::from_str(&event_target_value(&ev)))
        >
            {options}
        </select>
    }
}

#[component]
fn AddFieldModal(vm: FieldSelectionVm, category: String) -> impl IntoView {
    view! {
        <Modal title=format!("Nouveau champ: {}", category) on_close=Callback::new(move |_| vm.close_modal())>
            <Flex vertical=true gap=FlexGap::Medium>
                <Flex vertical=true gap=FlexGap::Small>
                    <Label>"Nom du champ"</Label>
                    <Input value=vm.field_name placeholder="ex: montant_total" />
                </Flex>
                <Flex vertical=true gap=FlexGap::Small>
                    <Label>"Type"</Label>
                    <FieldTypeSelect
                        value=vm.field_type.into()
                        on_change=Callback::new(move |t| vm.field_type.set(t))
                    />
                </Flex>
                <Flex vertical=true gap=FlexGap::Small>
                    <Label>"Description"</Label>
                    <Textarea value=vm.field_description />
                </Flex>
                <div class="modal-footer">
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| vm.close_modal()>"Annuler"</Button>
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| vm.add_field()>"Ajouter"</Button>
                </div>
            </Flex>
        </Modal>
    }
}

#[component]
fn EditFieldModal(vm: FieldSelectionVm) -> impl IntoView {
    let name = RwSignal::new(vm.draft.with_untracked(|d| d.name.clone()));
    let description = RwSignal::new(vm.draft.with_untracked(|d| d.description.clone()));
    // Text inputs write through to the draft
    Effect::new(move |_| {
        let (n, d) = (name.get(), description.get());
        vm.draft.update(|draft| {
            draft.name = n;
            draft.description = d;
        });
    });

    view! {
        <Modal title="Modifier le champ" on_close=Callback::new(move |_| vm.close_modal())>
            <Flex vertical=true gap=FlexGap::Medium>
                <Flex vertical=true gap=FlexGap::Small>
                    <Label>"Nom du champ"</Label>
                    <Input value=name />
                </Flex>
                <Flex vertical=true gap=FlexGap::Small>
                    <Label>"Type"</Label>
                    <FieldTypeSelect
                        value=Signal::derive(move || vm.draft.with(|d| d.field_type.clone()))
                        on_change=Callback::new(move |t| vm.draft.update(|d| d.field_type = t))
                    />
                </Flex>
                <Flex vertical=true gap=FlexGap::Small>
                    <Label>"Description"</Label>
                    <Textarea value=description />
                </Flex>
                <Flex vertical=true gap=FlexGap::Small>
                    <Label>"Valeurs autorisées"</Label>
                    <AllowedValueTags
                        values=Signal::derive(move || vm.draft.with(|d| d.allowed_values.clone()))
                        on_remove=Callback::new(move |v| vm.remove_draft_value(v))
                    />
                    <Flex gap=FlexGap::Small>
                        <Input value=vm.new_value placeholder="Nouvelle valeur" />
                        <Button on_click=move |_| vm.add_draft_value()>"Ajouter"</Button>
                    </Flex>
                </Flex>
                <div class="modal-footer">
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| vm.close_modal()>"Annuler"</Button>
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| vm.save_edit()>"Enregistrer"</Button>
                </div>
            </Flex>
        </Modal>
    }
}

#[component]
fn AllowedValuesModal(vm: FieldSelectionVm, category: String, field: String) -> impl IntoView {
    let title = format!("Valeurs autorisées: {}", field);
    let values = {
        let (category, field) = (category.clone(), field.clone());
        Signal::derive(move || vm.allowed_values(&category, &field))
    };
    let (remove_cat, remove_field) = (category.clone(), field.clone());
    let on_remove = Callback::new(move |v: String| vm.remove_allowed_value(&remove_cat, &remove_field, &v));

    view! {
        <Modal title=title on_close=Callback::new(move |_| vm.close_modal())>
            <Flex vertical=true gap=FlexGap::Medium>
                <AllowedValueTags values=values on_remove=on_remove />
                <Flex gap=FlexGap::Small>
                    <Input value=vm.new_value placeholder="Nouvelle valeur" />
                    <Button on_click=move |_| vm.add_allowed_value(&category, &field)>"Ajouter"</Button>
                </Flex>
                <div class="modal-footer">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| {
                            vm.close_modal();
                            vm.status_saved_values();
                        }
                    >
                        "Terminé"
                    </Button>
                </div>
            </Flex>
        </Modal>
    }
}

#[component]
fn AllowedValueTags(values: Signal<Vec<String>>, on_remove: Callback<String>) -> impl IntoView {
    view! {
        <div class="allowed-values">
            {move || {
                let values = values.get();
                if values.is_empty() {
                    view! { <span class="hint">"Aucune restriction"</span> }.into_any()
                } else {
                    values
                        .into_iter()
                        .map(|v| {
                            let removed = v.clone();
                            view! {
                                <span class="allowed-value-tag">
                                    {v}
                                    <button class="tag-remove" on:click=move |_| on_remove.run(removed.clone())>"×"</button>
                                </span>
                            }
                        })
                        .collect_view()
                        .into_any()
                }
            }}
        </div>
    }
}
