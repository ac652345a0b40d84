use contracts::domain::a001_document::{Document, DocumentKind};
use leptos::prelude::*;

/// Card of the upload list
#[component]
pub fn DocumentCard(document: Document, on_open: Callback<String>) -> impl IntoView {
    let id = document.id.clone();
    let row_info = document
        .row_index
        .map(|row| format!(" (Ligne {})", row))
        .unwrap_or_default();
    let filename = document.filename.clone().unwrap_or_else(|| match document.kind {
        DocumentKind::ExcelRow => "Fichier Excel".to_string(),
        DocumentKind::Document => String::new(),
    });
    let preview = if document.content.is_empty() {
        "Aucun aperçu disponible".to_string()
    } else {
        document.preview()
    };

    view! {
        <div class="document-card" on:click=move |_| on_open.run(id.clone())>
            <div class="document-title">{format!("{}{}", document.title, row_info)}</div>
            <div class="document-filename">{filename}</div>
            <div class="document-preview">{preview}</div>
            <div class="document-type">{document.kind.display_name()}</div>
        </div>
    }
}
