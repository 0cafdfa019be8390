use chrono::Utc;
use contracts::shared::Language;
use contracts::system::notifications::{Notification, POLL_INTERVAL_MS};
use gloo_timers::callback::Interval;
use leptos::prelude::*;

use super::store::{use_notifications, NotificationsStore};
use crate::shared::date_utils::{format_datetime, relative_time};
use crate::shared::i18n::t;
use crate::shared::icons::icon;
use crate::shared::locale::use_locale;

/// One notification row; clicking an unread one marks it read
pub fn notification_row(item: Notification, store: NotificationsStore, lang: Language) -> impl IntoView {
    let id = item.id;
    let unread = !item.is_read();
    let when = relative_time(&item.created_at, Utc::now(), lang);
    let exact = format_datetime(&item.created_at);
    view! {
        <li
            class="notification"
            class:notification--unread=unread
            on:click=move |_| {
                if unread {
                    store.mark_read(id, lang);
                }
            }
        >
            <div class="notification__title">{item.title}</div>
            <div class="notification__message">{item.message}</div>
            <div class="notification__time" title=exact>{when}</div>
        </li>
    }
}

/// Header bell with unread badge and dropdown.
///
/// Polls every 30 s while mounted; the timer is dropped with the component.
#[component]
pub fn NotificationBell() -> impl IntoView {
    let store = use_notifications();
    let locale = use_locale();
    let open = RwSignal::new(false);

    Effect::new(move |_| store.refresh(locale.language.get()));

    let poller = StoredValue::new_local(Some(Interval::new(POLL_INTERVAL_MS, move || {
        store.refresh(locale.current());
    })));
    on_cleanup(move || {
        // dropping the Interval clears it
        let _ = poller.try_update_value(|p| p.take());
    });

    view! {
        <div class="notification-bell">
            <button
                class="top-header__icon-btn"
                title=move || t(locale.language.get(), "notifications")
                on:click=move |_| open.update(|o| *o = !*o)
            >
                {icon("bell")}
                <Show when=move || { store.unread() > 0 }>
                    <span class="notification-bell__badge">{move || store.unread()}</span>
                </Show>
            </button>
            <Show when=move || open.get()>
                <div class="notification-bell__dropdown">
                    <div class="notification-bell__header">
                        <span>{move || t(locale.language.get(), "notifications")}</span>
                        <button
                            class="button button--link"
                            prop:disabled=move || store.unread() == 0
                            on:click=move |_| store.mark_all_read(locale.current())
                        >
                            {move || t(locale.language.get(), "mark_all_read")}
                        </button>
                    </div>
                    {move || {
                        let lang = locale.language.get();
                        let items = store.items.get();
                        if items.is_empty() {
                            view! { <div class="notification-bell__empty">{t(lang, "no_notifications")}</div> }.into_any()
                        } else {
                            view! {
                                <ul class="notification-bell__list">
                                    {items.into_iter().take(10).map(|item| notification_row(item, store, lang)).collect_view()}
                                </ul>
                            }.into_any()
                        }
                    }}
                </div>
            </Show>
        </div>
    }
}
