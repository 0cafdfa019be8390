use serde::{Deserialize, Serialize};

use crate::domain::common::{validate_names, EntityMetadata, ReferenceEntity, ReferenceForm, ReferencePayload, TreeEntity};
use crate::shared::{FieldErrors, Language, LocalizedName, Status};

/// Consulting field an insighter can offer sessions in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsultingField {
    pub id: i64,
    #[serde(default)]
    pub code: String,
    pub names: LocalizedName,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub parent_id: Option<i64>,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl ReferenceEntity for ConsultingField {
    type Payload = ConsultingFieldDto;

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
        (!self.code.is_empty()).then_some(self.code.as_str())
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

    fn from_payload(id: i64, payload: ConsultingFieldDto, metadata: EntityMetadata) -> Self {
        Self {
            id,
            code: payload.code,
            names: payload.names,
            status: payload.status,
            parent_id: payload.parent_id,
            metadata,
        }
    }

    fn apply(&mut self, payload: ConsultingFieldDto) {
        self.code = payload.code;
        self.names = payload.names;
        self.status = payload.status;
        self.parent_id = payload.parent_id;
        self.metadata.touch();
    }

    fn entity_index() -> &'static str {
        "a006"
    }

    fn collection_name() -> &'static str {
        "consulting-fields"
    }

    fn element_name(lang: Language) -> &'static str {
        match lang {
            Language::En => "Consulting field",
            Language::Ar => "مجال استشاري",
        }
    }

    fn list_name(lang: Language) -> &'static str {
        match lang {
            Language::En => "Consulting fields",
            Language::Ar => "المجالات الاستشارية",
        }
    }
}

impl TreeEntity for ConsultingField {
    fn parent_id(&self) -> Option<i64> {
        self.parent_id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ConsultingFieldDto {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub names: LocalizedName,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub parent_id: Option<i64>,
}

impl ReferencePayload for ConsultingFieldDto {
    fn from_form(form: &ReferenceForm) -> Self {
        Self {
            code: form.code.trim().to_string(),
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
        validate_names(&self.names, &mut errors);
        errors
    }
}
