use leptos::prelude::*;

use crate::shared::reference::ReferenceListPage;
use crate::shared::services::select;

#[component]
pub fn RoleList() -> impl IntoView {
    let service = select(|s| s.roles.clone());

    view! { <ReferenceListPage service=service /> }
}
