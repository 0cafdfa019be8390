use serde::{Deserialize, Serialize};

use crate::domain::common::{validate_names, EntityMetadata, ReferenceEntity, ReferenceForm, ReferencePayload, TreeEntity};
use crate::shared::{FieldErrors, Language, LocalizedName, Status};

/// ISIC activity code. Sections ("A") are roots, divisions/groups/classes
/// ("01", "011", "0111") hang below them through `parent_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IsicCode {
    pub id: i64,
    pub code: String,
    pub names: LocalizedName,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub parent_id: Option<i64>,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl ReferenceEntity for IsicCode {
    type Payload = IsicCodeDto;

    const HAS_CODE: bool = true;
    const IS_TREE: bool = true;

    fn id(&self) -> i64 {
        self.id
    }

    fn names(&self) -> &LocalizedName {
        &self.names
    }

    fn status(&self) -> Status {
        self.status
    }

    fn code(&self) -> Option<&str> {
        Some(&self.code)
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.metadata
    }

    fn to_form(&self) -> ReferenceForm {
        ReferenceForm {
            id: Some(self.id),
            code: self.code.clone(),
            names: self.names.clone(),
            status: self.status,
            parent_id: self.parent_id,
        }
    }

    fn from_payload(id: i64, payload: IsicCodeDto, metadata: EntityMetadata) -> Self {
        Self {
            id,
            code: payload.code,
            names: payload.names,
            status: payload.status,
            parent_id: payload.parent_id,
            metadata,
        }
    }

    fn apply(&mut self, payload: IsicCodeDto) {
        self.code = payload.code;
        self.names = payload.names;
        self.status = payload.status;
        self.parent_id = payload.parent_id;
        self.metadata.touch();
    }

    fn entity_index() -> &'static str {
        "a005"
    }

    fn collection_name() -> &'static str {
        "isic-codes"
    }

    fn element_name(lang: Language) -> &'static str {
        match lang {
            Language::En => "ISIC code",
            Language::Ar => "رمز ISIC",
        }
    }

    fn list_name(lang: Language) -> &'static str {
        match lang {
            Language::En => "ISIC codes",
            Language::Ar => "رموز ISIC",
        }
    }
}

impl TreeEntity for IsicCode {
    fn parent_id(&self) -> Option<i64> {
        self.parent_id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct IsicCodeDto {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub names: LocalizedName,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub parent_id: Option<i64>,
}

impl ReferencePayload for IsicCodeDto {
    fn from_form(form: &ReferenceForm) -> Self {
        Self {
            code: form.code.trim().to_uppercase(),
            names: form.names.clone(),
            status: form.status,
            parent_id: form.parent_id,
        }
    }

    fn names(&self) -> &LocalizedName {
        &self.names
    }

    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        let code = self.code.trim();
        if code.is_empty() {
            errors.add("code", "The code is required.");
        } else if !code.chars().all(|c| c.is_ascii_alphanumeric()) || code.len() > 4 {
            errors.add("code", "The code must be a section letter or up to 4 digits.");
        }
        validate_names(&self.names, &mut errors);
        errors
    }
}
