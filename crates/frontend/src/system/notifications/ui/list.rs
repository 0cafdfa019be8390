use leptos::prelude::*;

use super::bell::notification_row;
use super::store::use_notifications;
use crate::shared::i18n::t;
use crate::shared::icons::icon;
use crate::shared::locale::use_locale;
use crate::shared::page_frame::{page_id, PageFrame, PAGE_CAT_SYSTEM};

pub const TAB_KEY: &str = "sys_notifications";

#[component]
pub fn NotificationsPage() -> impl IntoView {
    let store = use_notifications();
    let locale = use_locale();
    let lang = move || locale.language.get();

    view! {
        <PageFrame page_id=page_id(TAB_KEY, PAGE_CAT_SYSTEM) category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <h2 class="page__title">{icon("bell")} {move || t(lang(), "notifications")}</h2>
                <div class="page__actions">
                    <button class="button button--secondary" on:click=move |_| store.refresh(locale.current())>
                        {icon("refresh")} {move || t(lang(), "refresh")}
                    </button>
                    <button
                        class="button button--primary"
                        prop:disabled=move || store.unread() == 0
                        on:click=move |_| store.mark_all_read(locale.current())
                    >
                        {icon("check")} {move || t(lang(), "mark_all_read")}
                    </button>
                </div>
            </div>
            <div class="page__content">
                {move || {
                    let lang = lang();
                    let items = store.items.get();
                    if items.is_empty() {
                        view! { <div class="page__empty">{t(lang, "no_notifications")}</div> }.into_any()
                    } else {
                        view! {
                            <ul class="notification-list">
                                {items.into_iter().map(|item| notification_row(item, store, lang)).collect_view()}
                            </ul>
                        }.into_any()
                    }
                }}
            </div>
        </PageFrame>
    }
}
