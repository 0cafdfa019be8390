use contracts::domain::a003_tag::aggregate::{Tag, TagDto};
use contracts::shared::{LocalizedName, Status};

use super::common::{ReferenceStore, StoredReference};

impl StoredReference for Tag {}

pub async fn seed(store: &ReferenceStore<Tag>) {
    let rows = [
        ("Market research", "أبحاث السوق"),
        ("Feasibility study", "دراسة جدوى"),
        ("Renewable energy", "الطاقة المتجددة"),
        ("Logistics", "الخدمات اللوجستية"),
    ];
    for (en, ar) in rows {
        store
            .insert_unchecked(TagDto {
                names: LocalizedName::new(en, ar),
                status: Status::Active,
            })
            .await;
    }
}
