use serde::{Deserialize, Serialize};

use crate::domain::common::{validate_names, EntityMetadata, ReferenceEntity, ReferenceForm, ReferencePayload};
use crate::shared::{FieldErrors, Language, LocalizedName, Status};

// ============================================================================
// Aggregate
// ============================================================================

/// Department of the platform staff
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    pub id: i64,
    pub names: LocalizedName,
    #[serde(default)]
    pub status: Status,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl ReferenceEntity for Department {
    type Payload = DepartmentDto;

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

    fn from_payload(id: i64, payload: DepartmentDto, metadata: EntityMetadata) -> Self {
        Self {
            id,
            names: payload.names,
            status: payload.status,
            metadata,
        }
    }

    fn apply(&mut self, payload: DepartmentDto) {
        self.names = payload.names;
        self.status = payload.status;
        self.metadata.touch();
    }

    fn entity_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "departments"
    }

    fn element_name(lang: Language) -> &'static str {
        match lang {
            Language::En => "Department",
            Language::Ar => "قسم",
        }
    }

    fn list_name(lang: Language) -> &'static str {
        match lang {
            Language::En => "Departments",
            Language::Ar => "الأقسام",
        }
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Create/update body for a department
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DepartmentDto {
    #[serde(default)]
    pub names: LocalizedName,
    #[serde(default)]
    pub status: Status,
}

impl ReferencePayload for DepartmentDto {
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
