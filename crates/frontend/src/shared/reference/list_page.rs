use contracts::domain::common::{ReferenceEntity, ReferenceForm};
use contracts::shared::search::matches_reference;
use contracts::shared::{ErrorMessage, PageMeta};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::details::ReferenceDetails;
use super::service::ReferenceDataService;
use super::{issue_ticket, still_current, FetchSequence, StatusBadge};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table_checkbox::TableCheckbox;
use crate::shared::i18n::t;
use crate::shared::icons::icon;
use crate::shared::list_utils::{confirm_action, get_sort_indicator, sort_records, toggle_sort, SearchInput, SortField};
use crate::shared::locale::use_locale;
use crate::shared::messages::MessageList;
use crate::shared::page_frame::{page_id, PageFrame, PAGE_CAT_LIST};

/// Paged table for flat reference entities with search, sorting, bulk
/// delete and a create/edit modal.
///
/// Re-fetches whenever the language or the page changes and after every
/// successful save or delete.
#[component]
pub fn ReferenceListPage<E: ReferenceEntity>(service: StoredValue<ReferenceDataService<E>, LocalStorage>) -> impl IntoView {
    let locale = use_locale();
    let lang = move || locale.language.get();

    let items = RwSignal::new(Vec::<E>::new());
    let meta = RwSignal::new(None::<PageMeta>);
    let page = RwSignal::new(1u32);
    let per_page = RwSignal::new(50u32);
    let messages = RwSignal::new(Vec::<ErrorMessage>::new());
    let search = RwSignal::new(String::new());
    let sort = RwSignal::new(None::<(SortField, bool)>);
    let selected = RwSignal::new(Vec::<i64>::new());
    // None: modal closed
    let editing = RwSignal::new(None::<ReferenceForm>);
    let fetches = StoredValue::new(FetchSequence::default());

    let load = move || {
        let Some(ticket) = issue_ticket(fetches) else {
            return;
        };
        let lang = locale.current();
        let page = page.get_untracked();
        let per_page = per_page.get_untracked();
        let service = service.get_value();
        spawn_local(async move {
            let result = service.list_page(lang, page, per_page).await;
            if !still_current(fetches, ticket) {
                log::debug!("dropping stale {} page {}", E::collection_name(), page);
                return;
            }
            match result {
                Ok(result) => {
                    let _ = items.try_set(result.data);
                    let _ = meta.try_set(Some(result.meta));
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
        page.track();
        per_page.track();
        load();
    });

    let visible = move || {
        let lang = locale.language.get();
        let query = search.get();
        let mut rows: Vec<E> = items.with(|items| {
            items
                .iter()
                .filter(|item| matches_reference(&query, item.names(), item.code()))
                .cloned()
                .collect()
        });
        if let Some((field, ascending)) = sort.get() {
            sort_records(&mut rows, field, ascending, lang);
        }
        rows
    };

    let toggle_selection = move |id: i64| {
        selected.update(|s| {
            if let Some(pos) = s.iter().position(|x| *x == id) {
                s.remove(pos);
            } else {
                s.push(id);
            }
        });
    };

    let delete_selected = move |_| {
        let ids = selected.get_untracked();
        let lang = locale.current();
        if ids.is_empty() || !confirm_action(t(lang, "confirm_delete")) {
            return;
        }
        let service = service.get_value();
        spawn_local(async move {
            for id in ids {
                if let Err(e) = service.delete(id, lang).await {
                    let _ = messages.try_set(e.messages());
                    break;
                }
            }
            let _ = selected.try_set(Vec::new());
            load();
        });
    };

    let sort_header = move |field: SortField, key: &'static str| {
        view! {
            <th class="table__header-cell" on:click=move |_| sort.update(|s| *s = toggle_sort(*s, field))>
                <span class="table__sortable-header">
                    {move || t(lang(), key)}
                    <span class="table__sort-indicator">{move || get_sort_indicator(sort.get(), field)}</span>
                </span>
            </th>
        }
    };

    view! {
        <PageFrame page_id=page_id(&E::full_name(), PAGE_CAT_LIST) category=PAGE_CAT_LIST>
            <div class="page__header">
                <h2 class="page__title">{icon("database")} {move || E::list_name(lang())}</h2>
                <div class="page__actions">
                    <SearchInput
                        value=search
                        on_change=Callback::new(move |text: String| search.set(text))
                        placeholder=Signal::derive(move || t(lang(), "search").to_string())
                    />
                    <button class="button button--primary" on:click=move |_| editing.set(Some(ReferenceForm::default()))>
                        {icon("plus")} {move || t(lang(), "new")}
                    </button>
                    <button class="button button--secondary" on:click=move |_| load()>
                        {icon("refresh")} {move || t(lang(), "refresh")}
                    </button>
                    <button
                        class="button button--danger"
                        prop:disabled=move || selected.with(Vec::is_empty)
                        on:click=delete_selected
                    >
                        {icon("delete")} {move || t(lang(), "delete")}
                    </button>
                </div>
            </div>

            <MessageList messages=messages />

            <div class="page__content table-container">
                <table class="table__data table--striped">
                    <thead>
                        <tr>
                            <th class="table__header-cell table__header-cell--checkbox"></th>
                            {E::HAS_CODE.then(|| sort_header(SortField::Code, "code"))}
                            {sort_header(SortField::Name, "name")}
                            {sort_header(SortField::Status, "status")}
                            {sort_header(SortField::Created, "created")}
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = visible();
                            if rows.is_empty() {
                                let colspan = if E::HAS_CODE { 5 } else { 4 };
                                return view! {
                                    <tr><td class="table__empty" colspan=colspan>{t(lang(), "no_records")}</td></tr>
                                }.into_any();
                            }
                            let lang = lang();
                            rows.into_iter().map(|item| {
                                let id = item.id();
                                let code = item.code().map(str::to_string);
                                let name = item.names().get(lang).to_string();
                                let other = item.names().exact(lang.other()).to_string();
                                let status = item.status();
                                let created = item.metadata().created_display();
                                let form = item.to_form();
                                view! {
                                    <tr class="table__row" on:click=move |_| editing.set(Some(form.clone()))>
                                        <TableCheckbox
                                            checked=Signal::derive(move || selected.with(|s| s.contains(&id)))
                                            on_change=Callback::new(move |_checked: bool| toggle_selection(id))
                                        />
                                        {E::HAS_CODE.then(|| view! { <td class="cell-code" dir="ltr">{code}</td> })}
                                        <td class="cell-truncate">
                                            {name}
                                            <small class="cell-secondary" dir=lang.other().dir()>{other}</small>
                                        </td>
                                        <td><StatusBadge status=status lang=lang /></td>
                                        <td class="cell-date">{created}</td>
                                    </tr>
                                }
                            }).collect_view().into_any()
                        }}
                    </tbody>
                </table>
            </div>

            <PaginationControls
                meta=meta
                on_page_change=Callback::new(move |p: u32| page.set(p))
                on_page_size_change=Callback::new(move |size: u32| {
                    per_page.set(size);
                    page.set(1);
                })
            />

            {move || editing.get().map(|form| view! {
                <ReferenceDetails
                    service=service
                    form=form
                    on_saved=Callback::new(move |_| {
                        editing.set(None);
                        load();
                    })
                    on_close=Callback::new(move |_| editing.set(None))
                />
            })}
        </PageFrame>
    }
}
