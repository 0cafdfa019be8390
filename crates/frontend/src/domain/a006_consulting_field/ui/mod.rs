use leptos::prelude::*;

use crate::shared::reference::ReferenceTreePage;
use crate::shared::services::select;

#[component]
pub fn ConsultingFieldTree() -> impl IntoView {
    let service = select(|s| s.consulting_fields.clone());

    view! { <ReferenceTreePage service=service /> }
}
