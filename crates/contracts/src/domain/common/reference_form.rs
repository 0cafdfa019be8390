use serde::{Deserialize, Serialize};

use crate::shared::{FieldErrors, LocalizedName, Status};

/// Editable state of any reference record in a details form.
///
/// Fields an entity does not have (`code`, `parent_id`) are ignored when
/// the form is turned into that entity's payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ReferenceForm {
    pub id: Option<i64>,
    pub code: String,
    pub names: LocalizedName,
    pub status: Status,
    pub parent_id: Option<i64>,
}

impl ReferenceForm {
    pub fn is_edit_mode(&self) -> bool {
        self.id.is_some()
    }
}

/// Both languages are mandatory for every reference record
pub fn validate_names(names: &LocalizedName, errors: &mut FieldErrors) {
    if names.en.trim().is_empty() {
        errors.add("names.en", "The English name is required.");
    }
    if names.ar.trim().is_empty() {
        errors.add("names.ar", "The Arabic name is required.");
    }
    if names.en.chars().count() > 255 {
        errors.add("names.en", "The English name may not be greater than 255 characters.");
    }
    if names.ar.chars().count() > 255 {
        errors.add("names.ar", "The Arabic name may not be greater than 255 characters.");
    }
}
