//! Composition root: builds the HTTP client and the services once and
//! provides them, together with the UI contexts, to the whole app.

use std::rc::Rc;

use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::layout::left::Sidebar;
use crate::layout::right::NotificationsPanel;
use crate::layout::tabs::{tab_label, TabPage};
use crate::layout::Shell;
use crate::shared::api_utils::{api_base, browser_timezone};
use crate::shared::http::{ApiClient, FetchTransport};
use crate::shared::loading::{LoadingContext, LoadingHandle};
use crate::shared::locale::LocaleContext;
use crate::shared::services::{provide_services, Services};
use crate::system::notifications::ui::NotificationsStore;
use leptos::prelude::*;

#[component]
fn MainLayout() -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext not provided");

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                view! {
                    <For
                        each=move || tabs_store.opened.get()
                        key=|tab| tab.key.clone()
                        children=move |tab: TabData| view! { <TabPage tab=tab tabs_store=tabs_store /> }
                    />
                }
                .into_any()
            }
            right=|| view! { <NotificationsPanel /> }.into_any()
        />
    }
}

#[component]
pub fn App() -> impl IntoView {
    let locale = LocaleContext::new();
    provide_context(locale);

    let loading = LoadingContext::new();
    provide_context(loading);

    let base = api_base();
    log::info!("API base: {}", base);
    let client = ApiClient::new(Rc::new(FetchTransport), base, LoadingHandle::from_signal(loading.active))
        .with_timezone(browser_timezone());
    let services = provide_services(Services::new(client));

    provide_context(NotificationsStore::new(services));

    let tabs_store = AppGlobalContext::new();
    provide_context(tabs_store);

    Effect::new(move |_| {
        let lang = locale.language.get();
        tabs_store.retitle_all(|key| tab_label(key, lang));
    });

    view! { <MainLayout /> }
}
