use contracts::domain::a007_staff_member::aggregate::StaffMember;
use contracts::shared::search::matches_reference;
use contracts::shared::ErrorMessage;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::i18n::t;
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use crate::shared::locale::use_locale;
use crate::shared::messages::MessageList;
use crate::shared::page_frame::{page_id, PageFrame, PAGE_CAT_LIST};
use crate::shared::reference::StatusBadge;
use crate::shared::services::select;

#[component]
pub fn StaffList() -> impl IntoView {
    let api = select(|s| s.staff.clone());
    let locale = use_locale();
    let lang = move || locale.language.get();

    let items = RwSignal::new(Vec::<StaffMember>::new());
    let messages = RwSignal::new(Vec::<ErrorMessage>::new());
    let search = RwSignal::new(String::new());

    let load = move || {
        let api = api.get_value();
        let lang = locale.current();
        spawn_local(async move {
            match api.list(lang).await {
                Ok(staff) => {
                    let _ = items.try_set(staff);
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

    // email doubles as the code column for search
    let visible = move || {
        let query = search.get();
        items.with(|items| {
            items
                .iter()
                .filter(|m| matches_reference(&query, &m.names, Some(&m.email)))
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    view! {
        <PageFrame page_id=page_id(StaffMember::TAB_KEY, PAGE_CAT_LIST) category=PAGE_CAT_LIST>
            <div class="page__header">
                <h2 class="page__title">{icon("users")} {move || StaffMember::list_name(lang())}</h2>
                <div class="page__actions">
                    <SearchInput
                        value=search
                        on_change=Callback::new(move |text: String| search.set(text))
                        placeholder=Signal::derive(move || t(lang(), "search").to_string())
                    />
                    <button class="button button--secondary" on:click=move |_| load()>
                        {icon("refresh")} {move || t(lang(), "refresh")}
                    </button>
                </div>
            </div>

            <MessageList messages=messages />

            <div class="page__content table-container">
                <table class="table__data table--striped">
                    <thead>
                        <tr>
                            <th class="table__header-cell">{move || t(lang(), "name")}</th>
                            <th class="table__header-cell">{move || t(lang(), "email")}</th>
                            <th class="table__header-cell">{move || t(lang(), "staff_role")}</th>
                            <th class="table__header-cell">{move || t(lang(), "status")}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let lang = lang();
                            let rows = visible();
                            if rows.is_empty() {
                                return view! {
                                    <tr><td class="table__empty" colspan=4>{t(lang, "no_records")}</td></tr>
                                }
                                .into_any();
                            }
                            rows.into_iter()
                                .map(|member| {
                                    view! {
                                        <tr class="table__row">
                                            <td class="cell-truncate">{member.names.get(lang).to_string()}</td>
                                            <td dir="ltr">{member.email}</td>
                                            <td class="cell-code" dir="ltr">{member.role_code}</td>
                                            <td><StatusBadge status=member.status lang=lang /></td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }}
                    </tbody>
                </table>
            </div>
        </PageFrame>
    }
}
