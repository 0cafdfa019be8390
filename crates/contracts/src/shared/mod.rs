pub mod envelope;
pub mod errors;
pub mod language;
pub mod localized;
pub mod search;
pub mod status;
pub mod tree;

pub use envelope::{DataEnvelope, PageLinks, PageMeta, Paginated};
pub use errors::{flatten_errors, ErrorMessage, FieldErrors, Severity};
pub use language::Language;
pub use localized::LocalizedName;
pub use status::Status;
pub use tree::{build_tree, build_tree_from_flat, FlatTreeNode, LabelResolver, LanguageResolver, RawTreeNode, TreeNode, TreeNodeData};
