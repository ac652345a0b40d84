use crate::layout::global_context::{use_global_context, Page};
use crate::shared::language::LanguageSelector;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_global_context();

    let api_button_label = move || {
        if ctx.api_key.get().has_key {
            "🔑 API Configurée"
        } else {
            "🔑 Configuration API"
        }
    };

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <span class="header__title">"Extraction de documents"</span>
                <nav class="header__steps">
                    {Page::all().into_iter().map(|page| {
                        let class = move || {
                            if ctx.page.get() == page { "step step--active" } else { "step" }
                        };
                        view! {
                            <button class=class on:click=move |_| ctx.navigate(page)>
                                <span class="step__number">{page.step()}</span>
                                <span class="step__title">{page.title()}</span>
                            </button>
                        }
                    }).collect_view()}
                </nav>
            </div>
            <div class="header__actions">
                <LanguageSelector />
                <button
                    class=move || if ctx.api_key.get().has_key { "button button--success" } else { "button button--secondary" }
                    on:click=move |_| ctx.api_modal_open.set(true)
                >
                    {api_button_label}
                </button>
            </div>
        </header>
    }
}
