use crate::domain::a001_document::api;
use crate::shared::modal::Modal;
use crate::shared::status::use_status;
use contracts::domain::a001_document::Document;
use contracts::shared::error::ClientError;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Full document fetched from the backend, shown in a modal.
/// Renders nothing while `doc_id` is `None`.
#[component]
pub fn DocumentPreview(doc_id: RwSignal<Option<String>>) -> impl IntoView {
    let status = use_status();
    let document = RwSignal::new(Option::<Document>::None);

    Effect::new(move |_| {
        let Some(id) = doc_id.get() else {
            document.set(None);
            return;
        };
        spawn_local(async move {
            match api::get_document(&id).await {
                Ok(doc) => document.set(Some(doc)),
                Err(e) => {
                    doc_id.set(None);
                    status.report(&ClientError::from(e), "Erreur lors du chargement du document");
                }
            }
        });
    });

    let close = Callback::new(move |_| doc_id.set(None));

    view! {
        {move || document.get().map(|doc| view! {
            <Modal title=doc.title.clone() on_close=close>
                <p><strong>"Fichier: "</strong>{doc.filename.clone().unwrap_or_default()}</p>
                <p><strong>"Type: "</strong>{doc.kind.display_name()}</p>
                {doc.category_name().map(|c| view! {
                    <p><strong>"Catégorie: "</strong>{c.to_string()}</p>
                })}
                {doc.row_index.map(|row| view! {
                    <p><strong>"Ligne: "</strong>{row}</p>
                })}
                <hr />
                <div class="document-full-content">{doc.content.clone()}</div>
            </Modal>
        })}
    }
}
