use contracts::domain::common::{ReferenceEntity, ReferenceForm, ReferencePayload};
use contracts::shared::{ErrorMessage, Language, Status};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::marker::PhantomData;

use super::service::ReferenceDataService;
use crate::shared::i18n::t;
use crate::shared::icons::icon;
use crate::shared::locale::use_locale;
use crate::shared::messages::MessageList;
use crate::shared::modal::Modal;

/// Turns the form into the entity payload, or into the messages to show
/// when client-side validation fails.
pub fn payload_from_form<E: ReferenceEntity>(form: &ReferenceForm) -> Result<E::Payload, Vec<ErrorMessage>> {
    let payload = E::Payload::from_form(form);
    let errors = payload.validate();
    if errors.is_empty() {
        Ok(payload)
    } else {
        Err(errors.to_messages())
    }
}

/// ViewModel of the reference details modal
///
/// - Form data stored as `ReferenceForm`, edited directly from the view
/// - Server and client validation messages share one list
pub struct ReferenceDetailsViewModel<E: ReferenceEntity> {
    pub form: RwSignal<ReferenceForm>,
    pub messages: RwSignal<Vec<ErrorMessage>>,
    pub saving: RwSignal<bool>,
    _entity: PhantomData<fn() -> E>,
}

impl<E: ReferenceEntity> Clone for ReferenceDetailsViewModel<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: ReferenceEntity> Copy for ReferenceDetailsViewModel<E> {}

impl<E: ReferenceEntity> ReferenceDetailsViewModel<E> {
    pub fn new(form: ReferenceForm) -> Self {
        Self {
            form: RwSignal::new(form),
            messages: RwSignal::new(Vec::new()),
            saving: RwSignal::new(false),
            _entity: PhantomData,
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(ReferenceForm::is_edit_mode)
    }

    pub fn title(&self, lang: Language) -> String {
        let prefix = if self.is_edit_mode() { t(lang, "editing") } else { t(lang, "new") };
        format!("{}: {}", prefix, E::element_name(lang))
    }

    /// Validate, then create or update. The caller re-fetches in `on_saved`.
    pub fn save_command(
        &self,
        service: StoredValue<ReferenceDataService<E>, LocalStorage>,
        lang: Language,
        on_saved: Callback<()>,
    ) {
        let form = self.form.get_untracked();
        let payload = match payload_from_form::<E>(&form) {
            Ok(payload) => payload,
            Err(messages) => {
                self.messages.set(messages);
                return;
            }
        };

        self.messages.set(Vec::new());
        self.saving.set(true);
        let messages = self.messages;
        let saving = self.saving;
        let service = service.get_value();

        spawn_local(async move {
            let result = match form.id {
                Some(id) => service.update(id, &payload, lang).await,
                None => service.create(&payload, lang).await,
            };
            let _ = saving.try_set(false);
            match result {
                Ok(_) => on_saved.run(()),
                Err(e) => {
                    let _ = messages.try_set(e.messages());
                }
            }
        });
    }
}

/// Create/edit modal for any reference entity.
///
/// A `form` without `id` creates a record. Tree entities get a parent
/// picker fed by `parent_options`.
#[component]
pub fn ReferenceDetails<E: ReferenceEntity>(
    service: StoredValue<ReferenceDataService<E>, LocalStorage>,
    form: ReferenceForm,
    #[prop(optional)] parent_options: Vec<(i64, String)>,
    on_saved: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let locale = use_locale();
    let own_id = form.id;
    let vm = ReferenceDetailsViewModel::<E>::new(form);
    let lang = move || locale.language.get();

    let save = move |_| vm.save_command(service, locale.current(), on_saved);

    let code_field = E::HAS_CODE.then(|| {
        view! {
            <div class="form__group">
                <label class="form__label" for="code">{move || t(lang(), "code")}</label>
                <input
                    class="form__input"
                    type="text"
                    id="code"
                    dir="ltr"
                    prop:value=move || vm.form.with(|f| f.code.clone())
                    on:input=move |ev| vm.form.update(|f| f.code = event_target_value(&ev))
                />
            </div>
        }
    });

    let parent_field = E::IS_TREE.then(|| {
        let options: Vec<(i64, String)> = parent_options
            .into_iter()
            .filter(|(id, _)| Some(*id) != own_id)
            .collect();
        view! {
            <div class="form__group">
                <label class="form__label" for="parent">{move || t(lang(), "parent")}</label>
                <select
                    class="form__select"
                    id="parent"
                    prop:value=move || vm.form.with(|f| f.parent_id.map(|p| p.to_string()).unwrap_or_default())
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        vm.form.update(|f| f.parent_id = value.parse().ok());
                    }
                >
                    <option value="">{move || t(lang(), "no_parent")}</option>
                    {options
                        .into_iter()
                        .map(|(id, label)| view! { <option value=id.to_string()>{label}</option> })
                        .collect_view()}
                </select>
            </div>
        }
    });

    view! {
        <Modal
            title=Signal::derive(move || vm.title(lang()))
            on_close=on_close
        >
            <div class="modal-actions-top">
                <button
                    class="button button--primary"
                    on:click=save
                    prop:disabled=move || vm.saving.get()
                >
                    {icon("save")}
                    {move || t(lang(), "save")}
                </button>
                <button class="button button--secondary" on:click=move |_| on_close.run(())>
                    {move || t(lang(), "cancel")}
                </button>
            </div>
            <MessageList messages=vm.messages />
            <div class="detail-form">
                {code_field}
                <div class="form__group">
                    <label class="form__label" for="name_en">{move || t(lang(), "name_en")}</label>
                    <input
                        class="form__input"
                        type="text"
                        id="name_en"
                        dir="ltr"
                        prop:value=move || vm.form.with(|f| f.names.en.clone())
                        on:input=move |ev| vm.form.update(|f| f.names.en = event_target_value(&ev))
                    />
                </div>
                <div class="form__group">
                    <label class="form__label" for="name_ar">{move || t(lang(), "name_ar")}</label>
                    <input
                        class="form__input"
                        type="text"
                        id="name_ar"
                        dir="rtl"
                        prop:value=move || vm.form.with(|f| f.names.ar.clone())
                        on:input=move |ev| vm.form.update(|f| f.names.ar = event_target_value(&ev))
                    />
                </div>
                <div class="form__group">
                    <label class="form__label" for="status">{move || t(lang(), "status")}</label>
                    <select
                        class="form__select"
                        id="status"
                        prop:value=move || vm.form.with(|f| f.status.as_str().to_string())
                        on:change=move |ev| {
                            if let Some(status) = Status::parse(&event_target_value(&ev)) {
                                vm.form.update(|f| f.status = status);
                            }
                        }
                    >
                        {Status::ALL
                            .into_iter()
                            .map(|status| view! {
                                <option value=status.as_str()>{move || t(lang(), status.as_str())}</option>
                            })
                            .collect_view()}
                    </select>
                </div>
                {parent_field}
            </div>
        </Modal>
    }
}
