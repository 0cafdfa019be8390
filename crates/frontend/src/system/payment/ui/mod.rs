use contracts::shared::{ErrorMessage, Language};
use contracts::system::payment::PaymentAccount;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::i18n::t;
use crate::shared::icons::icon;
use crate::shared::locale::use_locale;
use crate::shared::messages::MessageList;
use crate::shared::page_frame::{page_id, PageFrame, PAGE_CAT_SYSTEM};
use crate::shared::services::use_services;

pub const TAB_KEY: &str = "sys_payment_account";

fn yes_no(lang: Language, value: bool) -> &'static str {
    t(lang, if value { "yes" } else { "no" })
}

fn field(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="detail-field">
            <span class="detail-field__label">{label}</span>
            <span class="detail-field__value" dir="ltr">{value}</span>
        </div>
    }
}

fn render_account(account: PaymentAccount, lang: Language) -> AnyView {
    match account {
        PaymentAccount::Stripe(stripe) => view! {
            <div class="card">
                <h3 class="card__title">{t(lang, "stripe_account")}</h3>
                {field(t(lang, "account_id"), stripe.account_id)}
                {field(t(lang, "country"), stripe.country)}
                {field(t(lang, "charges_enabled"), yes_no(lang, stripe.charges_enabled).to_string())}
                {field(t(lang, "payouts_enabled"), yes_no(lang, stripe.payouts_enabled).to_string())}
            </div>
        }
        .into_any(),
        PaymentAccount::Manual(manual) => {
            let iban = manual.masked_iban();
            view! {
                <div class="card">
                    <h3 class="card__title">{t(lang, "manual_account")}</h3>
                    {field(t(lang, "account_holder"), manual.account_holder)}
                    {field(t(lang, "bank_name"), manual.bank_name)}
                    {field(t(lang, "iban"), iban)}
                    {manual.swift.map(|swift| field(t(lang, "swift"), swift))}
                </div>
            }
            .into_any()
        }
        PaymentAccount::NotConfigured => view! {
            <div class="info-box">{t(lang, "not_configured")}</div>
        }
        .into_any(),
    }
}

/// Shows whichever payment account is configured, Stripe taking precedence
#[component]
pub fn PaymentAccountPage() -> impl IntoView {
    let services = use_services();
    let locale = use_locale();
    let lang = move || locale.language.get();

    let account = RwSignal::new(None::<PaymentAccount>);
    let messages = RwSignal::new(Vec::<ErrorMessage>::new());

    let load = move || {
        let api = services.with_value(|s| s.payment.clone());
        let lang = locale.current();
        spawn_local(async move {
            match api.account(lang).await {
                Ok(found) => {
                    let _ = account.try_set(Some(found));
                    let _ = messages.try_set(Vec::new());
                }
                Err(e) => {
                    let _ = messages.try_set(e.messages());
                }
            }
        });
    };

    Effect::new(move |_| {
        locale.language.track();
        load();
    });

    view! {
        <PageFrame page_id=page_id(TAB_KEY, PAGE_CAT_SYSTEM) category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <h2 class="page__title">{icon("credit-card")} {move || t(lang(), "payment_account")}</h2>
                <div class="page__actions">
                    <button class="button button--secondary" on:click=move |_| load()>
                        {icon("refresh")} {move || t(lang(), "refresh")}
                    </button>
                </div>
            </div>
            <MessageList messages=messages />
            <div class="page__content">
                {move || account.get().map(|a| render_account(a, lang()))}
            </div>
        </PageFrame>
    }
}
