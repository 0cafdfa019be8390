use crate::layout::global_context::AppGlobalContext;
use crate::shared::i18n::t;
use crate::shared::locale::use_locale;
use crate::system::notifications::ui::{bell::notification_row, use_notifications};
use leptos::prelude::*;

const DEFAULT_WIDTH: f64 = 300.0;
const MIN_WIDTH: f64 = 200.0;

#[component]
pub fn Right(children: Children) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not provided");
    let is_open = move || ctx.right_open.get();

    let width = RwSignal::new(DEFAULT_WIDTH);
    let is_resizing = RwSignal::new(false);
    let start_x = RwSignal::new(0.0f64);
    let start_width = RwSignal::new(DEFAULT_WIDTH);

    let on_resize_start = move |ev: leptos::ev::MouseEvent| {
        if !is_open() {
            return;
        }
        is_resizing.set(true);
        start_x.set(ev.client_x() as f64);
        start_width.set(width.get_untracked());
        ev.prevent_default();
    };

    // In an RTL layout the panel sits on the left, so the drag direction flips
    let locale = use_locale();
    let move_handle = window_event_listener(leptos::ev::mousemove, move |ev: leptos::ev::MouseEvent| {
        if !is_resizing.get_untracked() {
            return;
        }
        let window_width = web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|w| w.as_f64())
            .unwrap_or(1280.0);
        let mut dx = start_x.get_untracked() - ev.client_x() as f64;
        if locale.language.get_untracked().is_rtl() {
            dx = -dx;
        }
        let new_width = (start_width.get_untracked() + dx).clamp(MIN_WIDTH, (window_width * 0.5).max(MIN_WIDTH));
        width.set(new_width);
    });
    let up_handle = window_event_listener(leptos::ev::mouseup, move |_| {
        if is_resizing.get_untracked() {
            is_resizing.set(false);
        }
    });
    on_cleanup(move || {
        move_handle.remove();
        up_handle.remove();
    });

    view! {
        <aside
            data-zone="right"
            class="right-panel"
            class:right-panel--hidden=move || !is_open()
            class:right-panel--resizing=move || is_resizing.get()
            style:width=move || if is_open() { format!("{}px", width.get()) } else { "0px".to_string() }
        >
            <div class="right-panel__resizer" on:mousedown=on_resize_start></div>
            {children()}
        </aside>
    }
}

/// Latest notifications beside the open tab
#[component]
pub fn NotificationsPanel() -> impl IntoView {
    let store = use_notifications();
    let locale = use_locale();

    view! {
        <div class="app-panel__content">
            <div class="app-panel__header">
                <h3>{move || t(locale.language.get(), "notifications")}</h3>
                <span class="app-panel__count">{move || format!("({})", store.unread())}</span>
            </div>
            {move || {
                let lang = locale.language.get();
                let items = store.items.get();
                if items.is_empty() {
                    view! { <div class="app-panel__empty">{t(lang, "no_notifications")}</div> }.into_any()
                } else {
                    view! {
                        <ul class="notification-list">
                            {items.into_iter().map(|item| notification_row(item, store, lang)).collect_view()}
                        </ul>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
