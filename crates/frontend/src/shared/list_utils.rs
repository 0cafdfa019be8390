//! Search, sorting and small list widgets shared by reference screens
use contracts::domain::common::ReferenceEntity;
use contracts::shared::Language;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use std::cmp::Ordering;

use crate::shared::icons::icon;

const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Column a reference list can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Code,
    Name,
    Status,
    Created,
}

/// Compares two records by `field`; names compare in the display language
pub fn compare_records<E: ReferenceEntity>(a: &E, b: &E, field: SortField, lang: Language) -> Ordering {
    match field {
        SortField::Code => a.code().unwrap_or_default().cmp(b.code().unwrap_or_default()),
        SortField::Name => a
            .names()
            .get(lang)
            .to_lowercase()
            .cmp(&b.names().get(lang).to_lowercase()),
        SortField::Status => a.status().as_str().cmp(b.status().as_str()),
        SortField::Created => a.metadata().created_at.cmp(&b.metadata().created_at),
    }
}

/// Stable sort, so equal keys keep server order
pub fn sort_records<E: ReferenceEntity>(items: &mut [E], field: SortField, ascending: bool, lang: Language) {
    items.sort_by(|a, b| {
        let cmp = compare_records(a, b, field, lang);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

pub fn get_sort_indicator(current: Option<(SortField, bool)>, field: SortField) -> &'static str {
    match current {
        Some((f, true)) if f == field => " ▲",
        Some((f, false)) if f == field => " ▼",
        _ => " ⇅",
    }
}

/// Same field flips the direction, another field starts ascending
pub fn toggle_sort(current: Option<(SortField, bool)>, field: SortField) -> Option<(SortField, bool)> {
    match current {
        Some((f, ascending)) if f == field => Some((field, !ascending)),
        _ => Some((field, true)),
    }
}

/// Browser confirmation dialog; false when no window is available
pub fn confirm_action(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Search box with debounce and a clear button
#[component]
pub fn SearchInput(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(into)] placeholder: Signal<String>,
) -> impl IntoView {
    let (input_value, set_input_value) = signal(value.get_untracked());
    let pending = StoredValue::new_local(None::<Timeout>);

    let handle_input = move |text: String| {
        set_input_value.set(text.clone());
        // dropping the previous Timeout cancels it
        let timeout = Timeout::new(SEARCH_DEBOUNCE_MS, move || on_change.run(text));
        pending.set_value(Some(timeout));
    };

    let clear = move |_| {
        pending.set_value(None);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="search"
                class=move || {
                    if value.get().trim().is_empty() {
                        "form__input"
                    } else {
                        "form__input search-input--active"
                    }
                }
                placeholder=move || placeholder.get()
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="button button--icon search-input__clear" on:click=clear>
                    {icon("x")}
                </button>
            </Show>
        </div>
    }
}
