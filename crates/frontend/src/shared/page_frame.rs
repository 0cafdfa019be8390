//! PageFrame: standard root wrapper for every page rendered inside a tab.
//!
//! Sets `id` (`"{tab_key}--{category}"`) and `data-page-category` on the
//! root element so pages can be located in the DOM.

use leptos::prelude::*;

pub const PAGE_CAT_LIST: &str = "list";
pub const PAGE_CAT_TREE: &str = "tree";
pub const PAGE_CAT_SYSTEM: &str = "system";

pub fn page_id(tab_key: &str, category: &str) -> String {
    format!("{}--{}", tab_key, category)
}

#[component]
pub fn PageFrame(
    #[prop(into)] page_id: String,
    /// One of the PAGE_CAT_* constants
    category: &'static str,
    children: Children,
) -> impl IntoView {
    let class = match category {
        PAGE_CAT_TREE => "page page--tree",
        PAGE_CAT_SYSTEM => "page page--system",
        _ => "page",
    };

    view! {
        <div id=page_id class=class data-page-category=category>
            {children()}
        </div>
    }
}
