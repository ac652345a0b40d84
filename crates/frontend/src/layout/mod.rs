pub mod global_context;
pub mod header;

use crate::layout::global_context::{use_global_context, Page};
use crate::shared::status::StatusBar;
use crate::usecases::u501_upload_documents::view::UploadPage;
use crate::usecases::u502_categorize_documents::view::CategorizationPage;
use crate::usecases::u503_define_catalog::view::FieldSelectionPage;
use crate::usecases::u504_extract_fields::view::ExtractionPage;
use crate::usecases::u505_validate_fields::view::ValidationPage;
use crate::usecases::u506_api_key::view::ApiKeyModal;
use header::Header;
use leptos::prelude::*;

/// Application shell.
///
/// ```text
/// +------------------------------------------+
/// |  Header: steps | language | API key      |
/// +------------------------------------------+
/// |  status message                          |
/// |  active page                             |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_global_context();

    // Initialize router integration. This runs once when the component is created.
    ctx.init_router_integration();

    view! {
        <div class="app-layout">
            <Header />
            <main class="container">
                <StatusBar />
                {move || match ctx.page.get() {
                    Page::Upload => view! { <UploadPage /> }.into_any(),
                    Page::Categorization => view! { <CategorizationPage /> }.into_any(),
                    Page::FieldSelection => view! { <FieldSelectionPage /> }.into_any(),
                    Page::Extraction => view! { <ExtractionPage /> }.into_any(),
                    Page::Validation => view! { <ValidationPage /> }.into_any(),
                }}
            </main>
            <ApiKeyModal />
        </div>
    }
}
