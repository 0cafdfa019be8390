use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;

use super::{EntityMetadata, ReferenceForm};
use crate::shared::{FieldErrors, FlatTreeNode, Language, LocalizedName, Status};

/// Create/update body of a reference resource
pub trait ReferencePayload:
    Debug + Clone + Default + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    fn from_form(form: &ReferenceForm) -> Self;

    fn names(&self) -> &LocalizedName;

    /// Same rules on both sides of the wire; the server repeats them and
    /// answers 422 with the resulting field map.
    fn validate(&self) -> FieldErrors;
}

/// Admin-managed lookup record (department, tag, ISIC code, ...)
///
/// Instance methods expose the record, associated functions describe the
/// resource: where it lives on the API and how the UI names it.
pub trait ReferenceEntity:
    Debug + Clone + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    type Payload: ReferencePayload;

    /// Records carry a `code` column shown in lists and forms
    const HAS_CODE: bool = false;
    /// Records are hierarchical (`parent_id`) and have a `/tree` endpoint
    const IS_TREE: bool = false;

    // ============================================================================
    // Record data
    // ============================================================================

    fn id(&self) -> i64;

    fn names(&self) -> &LocalizedName;

    fn status(&self) -> Status;

    fn code(&self) -> Option<&str> {
        None
    }

    fn metadata(&self) -> &EntityMetadata;

    fn to_form(&self) -> ReferenceForm;

    /// Builds the stored record for a validated payload
    fn from_payload(id: i64, payload: Self::Payload, metadata: EntityMetadata) -> Self;

    /// Overwrites editable fields, keeps `id` and creation time
    fn apply(&mut self, payload: Self::Payload);

    // ============================================================================
    // Resource metadata
    // ============================================================================

    /// Index of the entity in the portal (e.g. "a001")
    fn entity_index() -> &'static str;

    /// URL segment of the resource (e.g. "departments")
    fn collection_name() -> &'static str;

    /// Singular UI name
    fn element_name(lang: Language) -> &'static str;

    /// Plural UI name
    fn list_name(lang: Language) -> &'static str;

    /// Tab key and registry name (e.g. "a004_hs_codes")
    fn full_name() -> String {
        format!("{}_{}", Self::entity_index(), Self::collection_name().replace('-', "_"))
    }

    /// Path of the list/create endpoint
    fn endpoint() -> String {
        format!("/api/{}", Self::collection_name())
    }
}

/// Reference records organised as a tree
pub trait TreeEntity: ReferenceEntity {
    fn parent_id(&self) -> Option<i64>;

    fn to_flat(&self) -> FlatTreeNode {
        FlatTreeNode {
            id: self.id(),
            code: self.code().unwrap_or_default().to_string(),
            label: None,
            names: Some(self.names().clone()),
            status: self.status(),
            parent_id: self.parent_id(),
        }
    }

    fn tree_endpoint() -> String {
        format!("{}/tree", Self::endpoint())
    }
}
