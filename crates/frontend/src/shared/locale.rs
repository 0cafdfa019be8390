//! Active UI language: context, persistence and document direction.

use contracts::shared::Language;
use leptos::prelude::*;
use web_sys::window;

const LANGUAGE_KEY: &str = "admin_portal_language";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

fn load_saved_language() -> Option<Language> {
    let code = get_local_storage()?.get_item(LANGUAGE_KEY).ok()??;
    Language::from_code(&code)
}

fn save_language(lang: Language) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(LANGUAGE_KEY, lang.code());
    }
}

fn browser_language() -> Language {
    window()
        .and_then(|w| w.navigator().language())
        .map(|tag| Language::from_accept_language(&tag))
        .unwrap_or_default()
}

/// Sets `dir` and `lang` on `<html>` so the whole layout flips for Arabic
fn apply_document_direction(lang: Language) {
    let root = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    if let Some(root) = root {
        let _ = root.set_attribute("dir", lang.dir());
        let _ = root.set_attribute("lang", lang.code());
    }
}

#[derive(Clone, Copy)]
pub struct LocaleContext {
    pub language: RwSignal<Language>,
}

impl LocaleContext {
    /// Saved preference first, then the browser language
    pub fn new() -> Self {
        let initial = load_saved_language().unwrap_or_else(browser_language);
        apply_document_direction(initial);
        Self {
            language: RwSignal::new(initial),
        }
    }

    /// Language for a request being sent right now (untracked read)
    pub fn current(&self) -> Language {
        self.language.get_untracked()
    }

    pub fn switch_to(&self, lang: Language) {
        if self.current() == lang {
            return;
        }
        log::info!("language switched to {}", lang);
        save_language(lang);
        apply_document_direction(lang);
        self.language.set(lang);
    }
}

impl Default for LocaleContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_locale() -> LocaleContext {
    use_context::<LocaleContext>().expect("LocaleContext not found in component tree")
}

#[component]
pub fn LanguageSwitcher() -> impl IntoView {
    let locale = use_locale();

    view! {
        <div class="language-switcher">
            {Language::ALL
                .into_iter()
                .map(|lang| {
                    view! {
                        <button
                            class="button button--ghost"
                            class:button--active=move || locale.language.get() == lang
                            on:click=move |_| locale.switch_to(lang)
                        >
                            {lang.native_name()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
