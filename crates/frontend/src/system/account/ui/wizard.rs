use contracts::system::account::{AccountAction, AccountRole, WizardOutcome, WizardState, WizardStep, REASON_MAX_CHARS};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::files::{format_size, selected_file, FileName};
use crate::shared::i18n::t;
use crate::shared::icons::icon;
use crate::shared::locale::use_locale;
use crate::shared::services::use_services;

/// Two-step wizard (reason, then result) for one role and action
#[component]
pub fn AccountLifecycleWizard(role: AccountRole, action: AccountAction) -> impl IntoView {
    let services = use_services();
    let locale = use_locale();
    let lang = move || locale.language.get();

    let state = RwSignal::new(WizardState::new(role, action));
    let problem = RwSignal::new(None::<String>);
    let attachment = StoredValue::new_local(None::<web_sys::File>);
    let attachment_name = RwSignal::new(None::<String>);

    let submit = move |_| {
        let mut current = state.get_untracked();
        let request = match current.begin_submit() {
            Ok(request) => request,
            Err(message) => {
                problem.set(Some(message));
                return;
            }
        };
        state.set(current);
        problem.set(None);

        let api = services.with_value(|s| s.account.clone());
        let file = if action.accepts_attachment() { attachment.get_value() } else { None };
        let lang = locale.current();
        spawn_local(async move {
            let result = api.submit(role, action, &request, file, lang).await;
            let _ = state.try_update(|s| s.finish(result.map(|r| r.message).map_err(|e| e.summary())));
        });
    };

    let reset = move |_| {
        state.update(WizardState::reset);
        attachment.set_value(None);
        attachment_name.set(None);
        problem.set(None);
    };

    let reason_step = move || {
        view! {
            <div class="wizard__step">
                {(action == AccountAction::Transfer).then(|| view! {
                    <div class="info-box">
                        {move || format!("{}: {}", t(lang(), "transfer_to"), t(lang(), role.transfer_target().as_path()))}
                    </div>
                })}
                <div class="form__group">
                    <label class="form__label" for="reason">{move || t(lang(), "reason")}</label>
                    <textarea
                        class="form__textarea"
                        id="reason"
                        rows="5"
                        maxlength=REASON_MAX_CHARS.to_string()
                        prop:value=move || state.with(|s| s.reason.clone())
                        prop:disabled=move || state.with(|s| s.submitting)
                        on:input=move |ev| state.update(|s| s.set_reason(event_target_value(&ev)))
                    />
                    <small class="form__hint">
                        {move || format!("{} / {}", state.with(|s| s.reason.chars().count()), REASON_MAX_CHARS)}
                    </small>
                </div>
                {action.accepts_attachment().then(|| view! {
                    <div class="form__group">
                        <label class="form__label" for="attachment">{move || t(lang(), "attachment")}</label>
                        <input
                            type="file"
                            id="attachment"
                            on:change=move |ev| {
                                let file = selected_file(&ev);
                                attachment_name.set(file.as_ref().map(|f| format!("{} ({})", f.name(), format_size(f.size()))));
                                attachment.set_value(file);
                            }
                        />
                        <FileName name=attachment_name />
                    </div>
                })}
                {move || problem.get().map(|p| view! { <div class="warning-box text-error">{p}</div> })}
                <button
                    class="button button--primary"
                    prop:disabled=move || !state.with(WizardState::can_submit)
                    on:click=submit
                >
                    {icon("check")}
                    {move || t(lang(), "submit")}
                </button>
            </div>
        }
    };

    let result_step = move || {
        let outcome = state.with(|s| s.outcome.clone());
        match outcome {
            Some(WizardOutcome::Success(message)) => view! {
                <div class="wizard__step">
                    <div class="info-box text-success">
                        <strong>{t(lang(), "request_sent")}</strong>
                        <p>{message}</p>
                    </div>
                    <button class="button button--secondary" on:click=reset>{t(lang(), "start_over")}</button>
                </div>
            }
            .into_any(),
            Some(WizardOutcome::Failed(message)) => view! {
                <div class="wizard__step">
                    <div class="warning-box text-error">
                        <strong>{t(lang(), "request_failed")}</strong>
                        <p>{message}</p>
                    </div>
                    <button class="button button--primary" on:click=move |_| state.update(WizardState::retry)>
                        {t(lang(), "retry")}
                    </button>
                </div>
            }
            .into_any(),
            None => ().into_any(),
        }
    };

    view! {
        <div class="wizard">
            <ol class="wizard__steps">
                <li class:wizard__steps-item--active=move || state.with(|s| s.step == WizardStep::Reason)>
                    {move || t(lang(), "step_reason")}
                </li>
                <li class:wizard__steps-item--active=move || state.with(|s| s.step == WizardStep::Result)>
                    {move || t(lang(), "step_result")}
                </li>
            </ol>
            {move || match state.with(|s| s.step) {
                WizardStep::Reason => reason_step().into_any(),
                WizardStep::Result => result_step(),
            }}
        </div>
    }
}
