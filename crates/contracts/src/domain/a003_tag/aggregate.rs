use serde::{Deserialize, Serialize};

use crate::domain::common::{validate_names, EntityMetadata, ReferenceEntity, ReferenceForm, ReferencePayload};
use crate::shared::{FieldErrors, Language, LocalizedName, Status};

/// Tag attached to knowledge items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub id: i64,
    pub names: LocalizedName,
    #[serde(default)]
    pub status: Status,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl ReferenceEntity for Tag {
    type Payload = TagDto;

    fn id(&self) -> i64 {
        self.id
    }

    fn names(&self) -> &LocalizedName {
        &self.names
    }

    fn status(&self) -> Status {
        self.status
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.metadata
    }

    fn to_form(&self) -> ReferenceForm {
        ReferenceForm {
            id: Some(self.id),
            names: self.names.clone(),
            status: self.status,
            ..Default::default()
        }
    }

    fn from_payload(id: i64, payload: TagDto, metadata: EntityMetadata) -> Self {
        Self {
            id,
            names: payload.names,
            status: payload.status,
            metadata,
        }
    }

    fn apply(&mut self, payload: TagDto) {
        self.names = payload.names;
        self.status = payload.status;
        self.metadata.touch();
    }

    fn entity_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "tags"
    }

    fn element_name(lang: Language) -> &'static str {
        match lang {
            Language::En => "Tag",
            Language::Ar => "وسم",
        }
    }

    fn list_name(lang: Language) -> &'static str {
        match lang {
            Language::En => "Tags",
            Language::Ar => "الوسوم",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TagDto {
    #[serde(default)]
    pub names: LocalizedName,
    #[serde(default)]
    pub status: Status,
}

impl ReferencePayload for TagDto {
    fn from_form(form: &ReferenceForm) -> Self {
        Self {
            names: form.names.clone(),
            status: form.status,
        }
    }

    fn names(&self) -> &LocalizedName {
        &self.names
    }

    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        validate_names(&self.names, &mut errors);
        errors
    }
}
