use serde::{Deserialize, Serialize};

use crate::shared::{Language, LocalizedName, Status};

/// Platform staff member. The portal only lists them; accounts are managed elsewhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffMember {
    pub id: i64,
    pub names: LocalizedName,
    pub email: String,
    #[serde(default)]
    pub department_id: Option<i64>,
    #[serde(default)]
    pub role_code: String,
    #[serde(default)]
    pub status: Status,
}

impl StaffMember {
    pub const ENDPOINT: &'static str = "/api/staff-members";
    pub const TAB_KEY: &'static str = "a007_staff_members";

    pub fn list_name(lang: Language) -> &'static str {
        match lang {
            Language::En => "Staff",
            Language::Ar => "الموظفون",
        }
    }
}
