//! Sidebar with collapsible menu groups

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label;
use crate::shared::i18n::t;
use crate::shared::icons::icon;
use crate::shared::locale::use_locale;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    /// i18n key
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str)>, // (tab key, icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "references",
            label: "menu_references",
            icon: "database",
            items: vec![
                ("a001_departments", "users"),
                ("a002_roles", "user"),
                ("a003_tags", "tag"),
                ("a004_hs_codes", "database"),
                ("a005_isic_codes", "tree"),
                ("a006_consulting_fields", "tree"),
                ("a007_staff_members", "users"),
            ],
        },
        MenuGroup {
            id: "account",
            label: "menu_account",
            icon: "user",
            items: vec![
                ("sys_notifications", "bell"),
                ("sys_account_lifecycle", "user"),
                ("sys_payment_account", "credit-card"),
                ("sys_profile_photo", "upload"),
            ],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not provided");
    let locale = use_locale();

    let expanded_groups = RwSignal::new(vec!["references".to_string()]);

    view! {
        <nav class="app-sidebar__content">
            {get_menu_groups().into_iter().map(|group| {
                let group_id = group.id.to_string();
                let gid_click = group_id.clone();
                let gid_chevron = group_id.clone();
                let gid_show = group_id;
                let items = StoredValue::new(group.items);

                view! {
                    <div class="app-sidebar__group">
                        <div
                            class="app-sidebar__item"
                            on:click=move |_| {
                                let gid = gid_click.clone();
                                expanded_groups.update(move |open| {
                                    if let Some(pos) = open.iter().position(|x| x == &gid) {
                                        open.remove(pos);
                                    } else {
                                        open.push(gid);
                                    }
                                });
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{move || t(locale.language.get(), group.label)}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=move || expanded_groups.get().contains(&gid_chevron)
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>

                        <Show when=move || expanded_groups.get().contains(&gid_show)>
                            <div class="app-sidebar__children">
                                {items.get_value().into_iter().map(|(key, icon_name)| {
                                    view! {
                                        <div
                                            class="app-sidebar__item"
                                            class:app-sidebar__item--active=move || {
                                                ctx.active.get().as_deref() == Some(key)
                                            }
                                            on:click=move |_| {
                                                ctx.open_tab(key, &tab_label(key, locale.current()));
                                            }
                                        >
                                            <div class="app-sidebar__item-content">
                                                {icon(icon_name)}
                                                <span>{move || tab_label(key, locale.language.get())}</span>
                                            </div>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </nav>
    }
}
