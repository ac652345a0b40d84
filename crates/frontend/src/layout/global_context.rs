use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_upload_documents::UploadDocuments;
use contracts::usecases::u502_categorize_documents::CategorizeDocuments;
use contracts::usecases::u503_define_catalog::DefineCatalog;
use contracts::usecases::u504_extract_fields::ExtractFields;
use contracts::usecases::u505_validate_fields::ValidateFields;
use contracts::usecases::u506_api_key::ApiKeyStatus;
use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

const PAGE_QUERY_KEY: &str = "page";

/// Workflow step shown in the main area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Upload,
    Categorization,
    FieldSelection,
    Extraction,
    Validation,
}

impl Page {
    /// Value of the `?page=` query parameter
    pub fn key(&self) -> &'static str {
        match self {
            Page::Upload => "upload",
            Page::Categorization => "categorization",
            Page::FieldSelection => "field-selection",
            Page::Extraction => "extraction",
            Page::Validation => "validation",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::all().into_iter().find(|p| p.key() == key)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Upload => UploadDocuments::display_name(),
            Page::Categorization => CategorizeDocuments::display_name(),
            Page::FieldSelection => DefineCatalog::display_name(),
            Page::Extraction => ExtractFields::display_name(),
            Page::Validation => ValidateFields::display_name(),
        }
    }

    /// Step number in the header
    pub fn step(&self) -> usize {
        Self::all()
            .iter()
            .position(|p| p == self)
            .map_or(1, |i| i + 1)
    }

    pub fn all() -> [Page; 5] {
        [
            Page::Upload,
            Page::Categorization,
            Page::FieldSelection,
            Page::Extraction,
            Page::Validation,
        ]
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub page: RwSignal<Page>,
    /// Key stored by the backend, shared by every page
    pub api_key: RwSignal<ApiKeyStatus>,
    pub api_modal_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            page: RwSignal::new(Page::default()),
            api_key: RwSignal::new(ApiKeyStatus::default()),
            api_modal_open: RwSignal::new(false),
        }
    }

    /// Restores the page from `?page=` and mirrors later changes into the URL.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();

        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();

        if let Some(page) = params.get(PAGE_QUERY_KEY).and_then(|k| Page::from_key(k)) {
            self.page.set(page);
        }

        let this = *self;
        Effect::new(move |_| {
            let page = this.page.get();
            let query_string = serde_qs::to_string(&HashMap::from([(
                PAGE_QUERY_KEY.to_string(),
                page.key().to_string(),
            )]))
            .unwrap_or_default();
            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn navigate(&self, page: Page) {
        log::debug!("navigate: {}", page.key());
        self.page.set(page);
    }

    pub fn has_stored_key(&self) -> bool {
        self.api_key.with_untracked(|s| s.has_key)
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_keys_round_trip() {
        for page in Page::all() {
            assert_eq!(Page::from_key(page.key()), Some(page));
        }
        assert_eq!(Page::from_key("unknown"), None);
        assert_eq!(Page::Validation.step(), 5);
        assert_eq!(Page::FieldSelection.title(), "Champs");
    }
}
