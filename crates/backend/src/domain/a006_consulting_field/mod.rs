use contracts::domain::a006_consulting_field::aggregate::{ConsultingField, ConsultingFieldDto};
use contracts::shared::{LocalizedName, Status};

use super::common::{ReferenceStore, StoredReference};

impl StoredReference for ConsultingField {
    fn parent_of(&self) -> Option<i64> {
        self.parent_id
    }
}

fn dto(en: &str, ar: &str, parent_id: Option<i64>) -> ConsultingFieldDto {
    ConsultingFieldDto {
        code: String::new(),
        names: LocalizedName::new(en, ar),
        status: Status::Active,
        parent_id,
    }
}

pub async fn seed(store: &ReferenceStore<ConsultingField>) {
    let business = store
        .insert_unchecked(dto("Business strategy", "استراتيجية الأعمال", None))
        .await;
    store
        .insert_unchecked(dto("Market entry", "دخول الأسواق", Some(business.id)))
        .await;
    store
        .insert_unchecked(dto("Mergers and acquisitions", "الاندماج والاستحواذ", Some(business.id)))
        .await;

    let technology = store
        .insert_unchecked(dto("Technology", "التقنية", None))
        .await;
    store
        .insert_unchecked(dto("Digital transformation", "التحول الرقمي", Some(technology.id)))
        .await;
}
