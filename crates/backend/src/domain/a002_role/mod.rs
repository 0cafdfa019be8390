use contracts::domain::a002_role::aggregate::{Role, RoleDto};
use contracts::shared::{LocalizedName, Status};

use super::common::{ReferenceStore, StoredReference};

impl StoredReference for Role {}

pub async fn seed(store: &ReferenceStore<Role>) {
    let rows = [
        ("admin", "Administrator", "مدير النظام"),
        ("editor", "Content editor", "محرر المحتوى"),
        ("support", "Support agent", "موظف الدعم"),
    ];
    for (code, en, ar) in rows {
        store
            .insert_unchecked(RoleDto {
                code: code.into(),
                names: LocalizedName::new(en, ar),
                status: Status::Active,
            })
            .await;
    }
}
