use contracts::shared::progress::ProgressState;
use leptos::prelude::*;

/// Progress bar with one row per processed item
#[component]
pub fn ProgressPanel(
    #[prop(into)] title: String,
    /// `None` hides the panel
    state: RwSignal<Option<ProgressState>>,
) -> impl IntoView {
    view! {
        {move || {
            state.get().map(|progress| {
                let width = format!("width: {}%;", progress.percentage);
                view! {
                    <div class="progress-panel">
                        <h3>{title.clone()}</h3>
                        <div class="progress-bar">
                            <div class="progress-fill" style=width></div>
                        </div>
                        <div class="progress-text">{progress.text.clone()}</div>
                        <div class="progress-details">
                            {progress.items.into_iter().map(|item| {
                                let status_class = format!("progress-item-status {}", item.status.as_str());
                                view! {
                                    <div class="progress-item">
                                        <div class="progress-item-name">{item.name}</div>
                                        <div class="progress-item-info">
                                            <span class=status_class>{item.status.label()}</span>
                                            {item.count.filter(|c| *c > 0).map(|c| view! {
                                                <span class="progress-item-count">{format!("{} champs", c)}</span>
                                            })}
                                            {item.error.map(|e| view! {
                                                <span class="progress-item-error">{e}</span>
                                            })}
                                        </div>
                                    </div>
                                }
                            }).collect_view()}
                        </div>
                    </div>
                }
            })
        }}
    }
}
