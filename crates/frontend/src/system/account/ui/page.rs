use contracts::system::account::{AccountAction, AccountRole};
use leptos::prelude::*;

use super::wizard::AccountLifecycleWizard;
use crate::shared::i18n::t;
use crate::shared::icons::icon;
use crate::shared::locale::use_locale;
use crate::shared::page_frame::{page_id, PageFrame, PAGE_CAT_SYSTEM};

pub const TAB_KEY: &str = "sys_account_lifecycle";

const ROLES: [AccountRole; 2] = [AccountRole::Insighter, AccountRole::Company];
const ACTIONS: [AccountAction; 3] = [AccountAction::Deactivate, AccountAction::Reactivate, AccountAction::Transfer];

/// Role picker plus one wizard per action; switching either starts a
/// fresh wizard
#[component]
pub fn AccountLifecyclePage() -> impl IntoView {
    let locale = use_locale();
    let lang = move || locale.language.get();
    let role = RwSignal::new(AccountRole::Insighter);
    let action = RwSignal::new(AccountAction::Deactivate);

    view! {
        <PageFrame page_id=page_id(TAB_KEY, PAGE_CAT_SYSTEM) category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <h2 class="page__title">{icon("user")} {move || t(lang(), "account_lifecycle")}</h2>
                <div class="page__actions">
                    <label class="form__label" for="account-role">{move || t(lang(), "role")}</label>
                    <select
                        class="form__select"
                        id="account-role"
                        prop:value=move || role.get().as_path()
                        on:change=move |ev| {
                            if let Some(r) = AccountRole::parse(&event_target_value(&ev)) {
                                role.set(r);
                            }
                        }
                    >
                        {ROLES
                            .into_iter()
                            .map(|r| view! { <option value=r.as_path()>{move || t(lang(), r.as_path())}</option> })
                            .collect_view()}
                    </select>
                </div>
            </div>
            <div class="page__tabs">
                {ACTIONS
                    .into_iter()
                    .map(|a| view! {
                        <button
                            class="page__tab"
                            class:page__tab--active=move || action.get() == a
                            on:click=move |_| action.set(a)
                        >
                            {move || t(lang(), a.as_path())}
                        </button>
                    })
                    .collect_view()}
            </div>
            <div class="page__content">
                {move || {
                    let (r, a) = (role.get(), action.get());
                    view! { <AccountLifecycleWizard role=r action=a /> }
                }}
            </div>
        </PageFrame>
    }
}
