use contracts::domain::a001_department::aggregate::{Department, DepartmentDto};
use contracts::shared::{LocalizedName, Status};

use super::common::{ReferenceStore, StoredReference};

impl StoredReference for Department {}

/// Sample departments for a fresh development server
pub async fn seed(store: &ReferenceStore<Department>) {
    let rows = [
        ("Customer Success", "نجاح العملاء", Status::Active),
        ("Finance", "المالية", Status::Active),
        ("Research", "الأبحاث", Status::Active),
        ("Legacy Sales", "المبيعات القديمة", Status::Inactive),
    ];
    for (en, ar, status) in rows {
        store
            .insert_unchecked(DepartmentDto {
                names: LocalizedName::new(en, ar),
                status,
            })
            .await;
    }
}
