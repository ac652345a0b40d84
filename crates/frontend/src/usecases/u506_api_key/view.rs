use super::api;
use crate::layout::global_context::use_global_context;
use crate::shared::modal::Modal;
use crate::shared::status::use_status;
use contracts::shared::error::ClientError;
use contracts::usecases::u506_api_key::{ApiKeyStatus, SaveApiKeyRequest};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// API key settings, opened from the header.
///
/// Also loads the stored key status at startup so every page knows whether
/// AI actions can run without a typed key.
#[component]
pub fn ApiKeyModal() -> impl IntoView {
    let ctx = use_global_context();
    let status = use_status();
    let key_input = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let refresh = move || {
        spawn_local(async move {
            match api::get_api_key_status().await {
                Ok(key_status) => ctx.api_key.set(key_status),
                Err(e) => log::warn!("Failed to load API key status: {}", e),
            }
        });
    };
    refresh();

    // Status is re-read every time the modal opens
    Effect::new(move |_| {
        if ctx.api_modal_open.get() {
            key_input.set(String::new());
            refresh();
        }
    });

    let save = move || {
        let request = match SaveApiKeyRequest::new(&key_input.get_untracked()) {
            Ok(request) => request,
            Err(e) => {
                status.report(&e.into(), "");
                return;
            }
        };
        busy.set(true);
        spawn_local(async move {
            match api::save_api_key(&request).await {
                Ok(()) => {
                    ctx.api_key.set(ApiKeyStatus::saved(&request.api_key));
                    key_input.set(String::new());
                    status.success("Clé API sauvegardée avec succès");
                }
                Err(e) => status.report(&ClientError::from(e), "Erreur lors de la sauvegarde"),
            }
            busy.set(false);
        });
    };

    let test = move || {
        let request = match SaveApiKeyRequest::new(&key_input.get_untracked()) {
            Ok(request) => request,
            Err(e) => {
                status.report(&e.into(), "");
                return;
            }
        };
        busy.set(true);
        status.info("Test de la clé API en cours...");
        spawn_local(async move {
            match api::test_api_key(&request.api_key).await {
                Ok(()) => status.success("Clé API valide !"),
                Err(e) => status.report(&ClientError::from(e), "Clé API invalide"),
            }
            busy.set(false);
        });
    };

    let close = Callback::new(move |_| ctx.api_modal_open.set(false));

    view! {
        <Show when=move || ctx.api_modal_open.get()>
            <Modal title="🔑 Configuration API Mistral" on_close=close>
                <Flex vertical=true gap=FlexGap::Medium>
                    <div class="api-status">
                        {move || {
                            let key_status = ctx.api_key.get();
                            match (key_status.has_key, key_status.api_key) {
                                (true, Some(masked)) => view! {
                                    <span class="api-status--ok">{format!("✅ Clé configurée: {}", masked)}</span>
                                }
                                .into_any(),
                                (true, None) => view! {
                                    <span class="api-status--ok">"✅ Clé configurée"</span>
                                }
                                .into_any(),
                                (false, _) => view! {
                                    <span class="api-status--missing">"⚠️ Aucune clé API configurée"</span>
                                }
                                .into_any(),
                            }
                        }}
                    </div>
                    <Flex vertical=true gap=FlexGap::Small>
                        <Label>"Clé API Mistral"</Label>
                        <Input input_type=InputType::Password value=key_input placeholder="Entrez votre clé API" />
                    </Flex>
                    <div class="modal-footer">
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| close.run(())>
                            "Fermer"
                        </Button>
                        <button class="button button--secondary" disabled=move || busy.get() on:click=move |_| test()>
                            "Tester"
                        </button>
                        <button class="button button--primary" disabled=move || busy.get() on:click=move |_| save()>
                            "Sauvegarder"
                        </button>
                    </div>
                </Flex>
            </Modal>
        </Show>
    }
}
