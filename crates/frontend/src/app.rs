use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::shared::language::LanguageContext;
use crate::shared::status::StatusService;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new());

    // Status messages shown on top of every page
    provide_context(StatusService::new());

    provide_context(LanguageContext::new());

    view! {
        <Shell />
    }
}
