//! Storage and business rules shared by all reference resources

pub mod repository;
pub mod service;

use contracts::domain::common::ReferenceEntity;

pub use repository::ReferenceStore;

/// Server-side view of a reference entity: how records link to each other
pub trait StoredReference: ReferenceEntity {
    /// Parent record for hierarchical resources, `None` for flat ones
    fn parent_of(&self) -> Option<i64> {
        None
    }
}
