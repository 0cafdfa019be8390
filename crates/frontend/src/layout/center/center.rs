use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

#[component]
pub fn Center(children: Children) -> impl IntoView {
    view! {
        <div data-zone="center" class="app-tabs">
            <TabBar />
            <div class="app-tabs__content">
                {children()}
            </div>
        </div>
    }
}

#[component]
fn TabHeader(tab: TabData) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not provided");

    let key = StoredValue::new(tab.key.clone());
    let is_active = Memo::new(move |_| ctx.active.get().as_deref() == Some(key.get_value().as_str()));
    let title = move || {
        ctx.opened
            .get()
            .into_iter()
            .find(|t| t.key == key.get_value())
            .map(|t| t.title)
            .unwrap_or_default()
    };

    let on_close = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        ctx.close_tab(&key.get_value());
    };

    view! {
        <div
            class="tab"
            class:tab--active=is_active
            on:click=move |_| ctx.activate_tab(&key.get_value())
        >
            <span class="tab__title">{title}</span>
            <button class="tab__close" on:click=on_close>
                {icon("x")}
            </button>
        </div>
    }
}

/// Header strip with one entry per open tab
#[component]
pub fn TabBar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not provided");

    view! {
        <div class="tabs-bar">
            <For
                each=move || ctx.opened.get()
                key=|tab| tab.key.clone()
                children=move |tab| view! { <TabHeader tab=tab /> }
            />
        </div>
    }
}
