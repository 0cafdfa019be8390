//! Tab management.
//!
//! - `page`: `TabPage` wraps the content of one open tab
//! - `registry`: maps `tab.key` to its view
//! - `tab_labels`: localized titles per key

pub mod page;
pub mod registry;
pub mod tab_labels;

pub use page::TabPage;
pub use tab_labels::tab_label;
