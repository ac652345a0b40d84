//! UI language preference, persisted in localStorage.
//!
//! Only the preference is stored; pages are rendered in French.

use crate::shared::status::use_status;
use leptos::prelude::*;
use web_sys::window;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Language {
    #[default]
    Fr,
    En,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Fr => "fr",
            Language::En => "en",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Language::Fr => "Français",
            Language::En => "English",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "en" => Language::En,
            _ => Language::Fr,
        }
    }

    /// Confirmation shown after a change
    pub fn changed_message(&self) -> &'static str {
        match self {
            Language::Fr => "Langue changée vers le français",
            Language::En => "Language changed to English",
        }
    }

    pub fn all() -> [Language; 2] {
        [Language::Fr, Language::En]
    }
}

const LANGUAGE_STORAGE_KEY: &str = "selectedLanguage";

fn load_language_from_storage() -> Language {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(LANGUAGE_STORAGE_KEY).ok().flatten())
        .map(|s| Language::from_str(&s))
        .unwrap_or_default()
}

fn save_language_to_storage(language: Language) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(LANGUAGE_STORAGE_KEY, language.as_str());
    }
}

#[derive(Clone, Copy)]
pub struct LanguageContext {
    pub language: RwSignal<Language>,
}

impl LanguageContext {
    pub fn new() -> Self {
        Self {
            language: RwSignal::new(load_language_from_storage()),
        }
    }

    pub fn set_language(&self, language: Language) {
        self.language.set(language);
        save_language_to_storage(language);
        log::info!("Selected language: {}", language.as_str());
    }
}

impl Default for LanguageContext {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn LanguageSelector() -> impl IntoView {
    let ctx = use_context::<LanguageContext>().expect("LanguageContext context not found");
    let status = use_status();

    view! {
        <select
            class="language-selector"
            prop:value=move || ctx.language.get().as_str()
            on:change=move |ev| {
                let language = Language::from_str(&event_target_value(&ev));
                ctx.set_language(language);
                status.info(language.changed_message());
            }
        >
            {Language::all()
                .into_iter()
                .map(|l| view! { <option value=l.as_str()>{l.display_name()}</option> })
                .collect_view()}
        </select>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_language_defaults_to_french() {
        assert_eq!(Language::from_str("de"), Language::Fr);
        assert_eq!(Language::from_str("en").changed_message(), "Language changed to English");
    }
}
