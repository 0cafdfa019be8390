use contracts::shared::{ErrorMessage, Severity};
use leptos::prelude::*;

fn severity_class(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => "message message--success",
        Severity::Info => "message message--info",
        Severity::Warn => "message message--warn",
        Severity::Error => "message message--error",
    }
}

/// Flattened server messages above a list or form
#[component]
pub fn MessageList(#[prop(into)] messages: Signal<Vec<ErrorMessage>>) -> impl IntoView {
    view! {
        <Show when=move || !messages.get().is_empty()>
            <div class="messages" role="alert">
                {move || {
                    messages
                        .get()
                        .into_iter()
                        .map(|m| {
                            view! {
                                <div class=severity_class(m.severity)>
                                    <strong class="message__summary">{m.summary}</strong>
                                    <span class="message__detail">{m.detail}</span>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </Show>
    }
}
