use serde::{Deserialize, Serialize};

use crate::domain::common::{validate_names, EntityMetadata, ReferenceEntity, ReferenceForm, ReferencePayload};
use crate::shared::{FieldErrors, Language, LocalizedName, Status};

/// Harmonized System customs code (chapter, heading or subheading)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HsCode {
    pub id: i64,
    pub code: String,
    pub names: LocalizedName,
    #[serde(default)]
    pub status: Status,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl HsCode {
    /// 2 digits = chapter, 4 = heading, 6+ = subheading
    pub fn level(&self) -> &'static str {
        match self.code.len() {
            0..=2 => "chapter",
            3..=4 => "heading",
            _ => "subheading",
        }
    }
}

impl ReferenceEntity for HsCode {
    type Payload = HsCodeDto;

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

    fn from_payload(id: i64, payload: HsCodeDto, metadata: EntityMetadata) -> Self {
        Self {
            id,
            code: payload.code,
            names: payload.names,
            status: payload.status,
            metadata,
        }
    }

    fn apply(&mut self, payload: HsCodeDto) {
        self.code = payload.code;
        self.names = payload.names;
        self.status = payload.status;
        self.metadata.touch();
    }

    fn entity_index() -> &'static str {
        "a004"
    }

    fn collection_name() -> &'static str {
        "hs-codes"
    }

    fn element_name(lang: Language) -> &'static str {
        match lang {
            Language::En => "HS code",
            Language::Ar => "رمز النظام المنسق",
        }
    }

    fn list_name(lang: Language) -> &'static str {
        match lang {
            Language::En => "HS codes",
            Language::Ar => "رموز النظام المنسق",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct HsCodeDto {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub names: LocalizedName,
    #[serde(default)]
    pub status: Status,
}

impl ReferencePayload for HsCodeDto {
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
        } else if !code.chars().all(|c| c.is_ascii_digit()) {
            errors.add("code", "The code must contain digits only.");
        } else if !(2..=10).contains(&code.len()) || code.len() % 2 != 0 {
            errors.add("code", "The code must have 2, 4, 6, 8 or 10 digits.");
        }
        validate_names(&self.names, &mut errors);
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(code: &str) -> HsCodeDto {
        HsCodeDto {
            code: code.into(),
            names: LocalizedName::new("Coffee", "قهوة"),
            status: Status::Active,
        }
    }

    #[test]
    fn test_code_rules() {
        assert!(dto("0901").validate().is_empty());
        assert!(dto("090111").validate().is_empty());
        assert!(!dto("090").validate().is_empty());
        assert!(!dto("09a1").validate().is_empty());
        assert!(!dto("").validate().is_empty());
    }

    #[test]
    fn test_tab_key_has_no_dash() {
        assert_eq!(HsCode::endpoint(), "/api/hs-codes");
        assert_eq!(HsCode::full_name(), "a004_hs_codes");
    }
}
