use leptos::prelude::*;

use crate::shared::reference::ReferenceTreePage;
use crate::shared::services::select;

/// Hierarchical ISIC classification, edited in place on the tree
#[component]
pub fn IsicCodeTree() -> impl IntoView {
    let service = select(|s| s.isic_codes.clone());

    view! { <ReferenceTreePage service=service /> }
}
