use contracts::shared::PageMeta;
use leptos::prelude::*;

use crate::shared::i18n::t;
use crate::shared::icons::icon;
use crate::shared::locale::use_locale;

pub const PAGE_SIZE_OPTIONS: [u32; 4] = [25, 50, 100, 200];

/// Pager driven by the server's `meta` block. Pages are 1-based.
#[component]
pub fn PaginationControls(
    #[prop(into)] meta: Signal<Option<PageMeta>>,
    on_page_change: Callback<u32>,
    on_page_size_change: Callback<u32>,
) -> impl IntoView {
    let locale = use_locale();
    let lang = move || locale.language.get();

    let current = move || meta.get().map(|m| m.current_page).unwrap_or(1);
    let last = move || meta.get().map(|m| m.last_page.max(1)).unwrap_or(1);
    let per_page = move || meta.get().map(|m| m.per_page).unwrap_or(PAGE_SIZE_OPTIONS[1]);

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(1)
                disabled=move || current() <= 1
                title=move || t(lang(), "first_page")
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(current().saturating_sub(1).max(1))
                disabled=move || current() <= 1
                title=move || t(lang(), "previous_page")
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || {
                    let total = meta.get().map(|m| m.total).unwrap_or(0);
                    format!("{} / {} ({})", current(), last(), total)
                }}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(current() + 1)
                disabled=move || current() >= last()
                title=move || t(lang(), "next_page")
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(last())
                disabled=move || current() >= last()
                title=move || t(lang(), "last_page")
            >
                {icon("chevrons-right")}
            </button>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse() {
                        on_page_size_change.run(size);
                    }
                }
                prop:value=move || per_page().to_string()
            >
                {PAGE_SIZE_OPTIONS.iter().map(|&size| {
                    view! {
                        <option value=size.to_string() selected=move || per_page() == size>
                            {size.to_string()}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}
