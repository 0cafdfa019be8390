//! Common types and traits for all reference-data entities

pub mod entity_metadata;
pub mod reference_entity;
pub mod reference_form;

// Re-exports
pub use entity_metadata::EntityMetadata;
pub use reference_entity::{ReferenceEntity, ReferencePayload, TreeEntity};
pub use reference_form::{validate_names, ReferenceForm};
