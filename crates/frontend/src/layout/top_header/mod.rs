//! Top bar: title, panel toggles, request spinner, language switch and the notification bell.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::i18n::t;
use crate::shared::icons::icon;
use crate::shared::loading::Spinner;
use crate::shared::locale::{use_locale, LanguageSwitcher};
use crate::system::notifications::ui::NotificationBell;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not provided");
    let locale = use_locale();
    let lang = move || locale.language.get();

    view! {
        <header class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || t(lang(), "toggle_sidebar")
                >
                    {icon("panel-left")}
                </button>
                <span class="top-header__title">{move || t(lang(), "app_title")}</span>
                <Spinner />
            </div>

            <div class="top-header__actions">
                <LanguageSwitcher />
                <NotificationBell />
                <button
                    class="top-header__icon-btn"
                    class:top-header__icon-btn--active=move || ctx.right_open.get()
                    on:click=move |_| ctx.toggle_right()
                    title=move || t(lang(), "toggle_panel")
                >
                    {icon("panel-right")}
                </button>
            </div>
        </header>
    }
}
