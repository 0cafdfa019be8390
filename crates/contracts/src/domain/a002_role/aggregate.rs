use serde::{Deserialize, Serialize};

use crate::domain::common::{validate_names, EntityMetadata, ReferenceEntity, ReferenceForm, ReferencePayload};
use crate::shared::{FieldErrors, Language, LocalizedName, Status};

/// Staff role; `code` is the machine name checked by the API ("admin", "editor")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub id: i64,
    pub code: String,
    pub names: LocalizedName,
    #[serde(default)]
    pub status: Status,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl ReferenceEntity for Role {
    type Payload = RoleDto;

    const HAS_CODE: bool = true;

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
            parent_id: None,
        }
    }

    fn from_payload(id: i64, payload: RoleDto, metadata: EntityMetadata) -> Self {
        Self {
            id,
            code: payload.code,
            names: payload.names,
            status: payload.status,
            metadata,
        }
    }

    fn apply(&mut self, payload: RoleDto) {
        self.code = payload.code;
        self.names = payload.names;
        self.status = payload.status;
        self.metadata.touch();
    }

    fn entity_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "roles"
    }

    fn element_name(lang: Language) -> &'static str {
        match lang {
            Language::En => "Role",
            Language::Ar => "دور",
        }
    }

    fn list_name(lang: Language) -> &'static str {
        match lang {
            Language::En => "Roles",
            Language::Ar => "الأدوار",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RoleDto {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub names: LocalizedName,
    #[serde(default)]
    pub status: Status,
}

impl ReferencePayload for RoleDto {
    fn from_form(form: &ReferenceForm) -> Self {
        Self {
            code: form.code.trim().to_string(),
            names: form.names.clone(),
            status: form.status,
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
        } else if !code
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-')
        {
            errors.add("code", "The code may only contain lowercase letters, digits, dashes and underscores.");
        }
        validate_names(&self.names, &mut errors);
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_format() {
        let mut dto = RoleDto {
            code: "Content Editor".into(),
            names: LocalizedName::new("Editor", "محرر"),
            status: Status::Active,
        };
        assert_eq!(dto.validate().fields().collect::<Vec<_>>(), vec!["code"]);

        dto.code = "content_editor".into();
        assert!(dto.validate().is_empty());
    }
}
