use leptos::prelude::*;

use crate::shared::reference::ReferenceListPage;
use crate::shared::services::select;

#[component]
pub fn DepartmentList() -> impl IntoView {
    let service = select(|s| s.departments.clone());

    view! { <ReferenceListPage service=service /> }
}
