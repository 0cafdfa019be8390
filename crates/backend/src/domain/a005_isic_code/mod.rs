use contracts::domain::a005_isic_code::aggregate::{IsicCode, IsicCodeDto};
use contracts::shared::{LocalizedName, Status};

use super::common::{ReferenceStore, StoredReference};

impl StoredReference for IsicCode {
    fn parent_of(&self) -> Option<i64> {
        self.parent_id
    }
}

fn dto(code: &str, en: &str, ar: &str, parent_id: Option<i64>) -> IsicCodeDto {
    IsicCodeDto {
        code: code.into(),
        names: LocalizedName::new(en, ar),
        status: Status::Active,
        parent_id,
    }
}

/// Two ISIC sections with a few divisions and groups below them
pub async fn seed(store: &ReferenceStore<IsicCode>) {
    let agriculture = store
        .insert_unchecked(dto("A", "Agriculture, forestry and fishing", "الزراعة والحراجة وصيد الأسماك", None))
        .await;
    let crops = store
        .insert_unchecked(dto("01", "Crop and animal production", "الإنتاج النباتي والحيواني", Some(agriculture.id)))
        .await;
    store
        .insert_unchecked(dto("011", "Growing of non-perennial crops", "زراعة المحاصيل غير الدائمة", Some(crops.id)))
        .await;
    store
        .insert_unchecked(dto("03", "Fishing and aquaculture", "صيد الأسماك وتربية المائيات", Some(agriculture.id)))
        .await;

    let mining = store
        .insert_unchecked(dto("B", "Mining and quarrying", "التعدين واستغلال المحاجر", None))
        .await;
    store
        .insert_unchecked(dto("06", "Extraction of crude petroleum and natural gas", "استخراج النفط الخام والغاز الطبيعي", Some(mining.id)))
        .await;
}
