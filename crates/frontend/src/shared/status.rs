//! Status notifier: one transient message at a time on top of the page.

use crate::shared::api_utils::AppConfig;
use contracts::shared::error::ClientError;
use contracts::shared::status::StatusMessage;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
struct ShownStatus {
    id: Uuid,
    message: StatusMessage,
}

#[derive(Clone, Copy)]
pub struct StatusService {
    current: RwSignal<Option<ShownStatus>>,
}

impl StatusService {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
        }
    }

    /// Replaces the current message; it disappears after
    /// [`AppConfig::STATUS_LIFETIME_MS`] unless replaced first.
    pub fn show(&self, message: StatusMessage) {
        let id = Uuid::new_v4();
        log::debug!("status [{}] {}", message.kind.as_str(), message.text);
        self.current.set(Some(ShownStatus { id, message }));

        let current = self.current;
        spawn_local(async move {
            TimeoutFuture::new(AppConfig::STATUS_LIFETIME_MS).await;
            current.update(|shown| {
                if shown.as_ref().is_some_and(|s| s.id == id) {
                    *shown = None;
                }
            });
        });
    }

    pub fn info(&self, text: impl Into<String>) {
        self.show(StatusMessage::info(text));
    }

    pub fn success(&self, text: impl Into<String>) {
        self.show(StatusMessage::success(text));
    }

    pub fn error(&self, text: impl Into<String>) {
        self.show(StatusMessage::error(text));
    }

    /// Reports a failed action; `label` names it ("Erreur lors du clustering")
    pub fn report(&self, err: &ClientError, label: &str) {
        match err {
            ClientError::Remote(e) if e.is_transport() => log::error!("{}: {}", label, e),
            ClientError::Remote(e) => log::warn!("{}: {}", label, e),
            ClientError::Validation(_) => {}
        }
        self.show(StatusMessage::from_error(err, label));
    }

    pub fn dismiss(&self) {
        self.current.set(None);
    }
}

impl Default for StatusService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_status() -> StatusService {
    use_context::<StatusService>().expect("StatusService context not found")
}

#[component]
pub fn StatusBar() -> impl IntoView {
    let status = use_status();

    view! {
        {move || {
            status.current.get().map(|shown| {
                let class = format!("status-message {}", shown.message.kind.as_str());
                view! {
                    <div class=class on:click=move |_| status.dismiss()>
                        {shown.message.text}
                    </div>
                }
            })
        }}
    }
}
