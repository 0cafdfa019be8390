//! Maps `tab.key` to the view it renders. Every tab key of the portal is listed here.

use crate::domain::a001_department::ui::DepartmentList;
use crate::domain::a002_role::ui::RoleList;
use crate::domain::a003_tag::ui::TagList;
use crate::domain::a004_hs_code::ui::HsCodeList;
use crate::domain::a005_isic_code::ui::IsicCodeTree;
use crate::domain::a006_consulting_field::ui::ConsultingFieldTree;
use crate::domain::a007_staff_member::ui::StaffList;
use crate::layout::global_context::AppGlobalContext;
use crate::system::account::ui::page::{AccountLifecyclePage, TAB_KEY as ACCOUNT_TAB};
use crate::system::notifications::ui::list::TAB_KEY as NOTIFICATIONS_TAB;
use crate::system::notifications::ui::NotificationsPage;
use crate::system::payment::ui::{PaymentAccountPage, TAB_KEY as PAYMENT_TAB};
use crate::system::profile::ui::{ProfilePhotoPage, TAB_KEY as PROFILE_TAB};
use leptos::prelude::*;

pub fn render_tab_content(key: &str, _tabs_store: AppGlobalContext) -> AnyView {
    match key {
        // reference data
        "a001_departments" => view! { <DepartmentList /> }.into_any(),
        "a002_roles" => view! { <RoleList /> }.into_any(),
        "a003_tags" => view! { <TagList /> }.into_any(),
        "a004_hs_codes" => view! { <HsCodeList /> }.into_any(),
        "a005_isic_codes" => view! { <IsicCodeTree /> }.into_any(),
        "a006_consulting_fields" => view! { <ConsultingFieldTree /> }.into_any(),
        "a007_staff_members" => view! { <StaffList /> }.into_any(),

        // account
        k if k == NOTIFICATIONS_TAB => view! { <NotificationsPage /> }.into_any(),
        k if k == ACCOUNT_TAB => view! { <AccountLifecyclePage /> }.into_any(),
        k if k == PAYMENT_TAB => view! { <PaymentAccountPage /> }.into_any(),
        k if k == PROFILE_TAB => view! { <ProfilePhotoPage /> }.into_any(),

        _ => {
            log::warn!("Unknown tab key: {}", key);
            view! { <div class="placeholder">{format!("Unknown page: {key}")}</div> }.into_any()
        }
    }
}
