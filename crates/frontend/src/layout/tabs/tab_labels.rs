//! Localized tab titles. Reference entities take their `list_name` from contracts;
//! account pages use the UI string table.

use contracts::domain::a001_department::aggregate::Department;
use contracts::domain::a002_role::aggregate::Role;
use contracts::domain::a003_tag::aggregate::Tag;
use contracts::domain::a004_hs_code::aggregate::HsCode;
use contracts::domain::a005_isic_code::aggregate::IsicCode;
use contracts::domain::a006_consulting_field::aggregate::ConsultingField;
use contracts::domain::a007_staff_member::aggregate::StaffMember;
use contracts::domain::common::ReferenceEntity;
use contracts::shared::Language;

use crate::shared::i18n::t;

pub const ALL_TAB_KEYS: &[&str] = &[
    "a001_departments",
    "a002_roles",
    "a003_tags",
    "a004_hs_codes",
    "a005_isic_codes",
    "a006_consulting_fields",
    "a007_staff_members",
    "sys_notifications",
    "sys_account_lifecycle",
    "sys_payment_account",
    "sys_profile_photo",
];

/// Title for a tab key; unknown keys come back unchanged
pub fn tab_label(key: &str, lang: Language) -> String {
    let label = match key {
        "a001_departments" => Department::list_name(lang),
        "a002_roles" => Role::list_name(lang),
        "a003_tags" => Tag::list_name(lang),
        "a004_hs_codes" => HsCode::list_name(lang),
        "a005_isic_codes" => IsicCode::list_name(lang),
        "a006_consulting_fields" => ConsultingField::list_name(lang),
        "a007_staff_members" => StaffMember::list_name(lang),

        "sys_notifications" => t(lang, "notifications"),
        "sys_account_lifecycle" => t(lang, "account_lifecycle"),
        "sys_payment_account" => t(lang, "payment_account"),
        "sys_profile_photo" => t(lang, "profile_photo"),

        other => return other.to_string(),
    };
    label.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_key_has_a_title() {
        for key in ALL_TAB_KEYS {
            for lang in [Language::En, Language::Ar] {
                assert_ne!(tab_label(key, lang), *key, "missing title for {key}");
            }
        }
    }

    #[test]
    fn test_localized() {
        assert_eq!(tab_label("a002_roles", Language::En), "Roles");
        assert_eq!(tab_label("a002_roles", Language::Ar), "الأدوار");
        assert_eq!(tab_label("whatever", Language::Ar), "whatever");
    }
}
