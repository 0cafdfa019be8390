use leptos::prelude::*;

use crate::shared::reference::ReferenceListPage;
use crate::shared::services::select;

#[component]
pub fn TagList() -> impl IntoView {
    let service = select(|s| s.tags.clone());

    view! { <ReferenceListPage service=service /> }
}
