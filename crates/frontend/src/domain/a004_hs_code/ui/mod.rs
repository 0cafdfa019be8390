use leptos::prelude::*;

use crate::shared::reference::ReferenceListPage;
use crate::shared::services::select;

#[component]
pub fn HsCodeList() -> impl IntoView {
    let service = select(|s| s.hs_codes.clone());

    view! { <ReferenceListPage service=service /> }
}
