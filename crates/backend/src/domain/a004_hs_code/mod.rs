use contracts::domain::a004_hs_code::aggregate::{HsCode, HsCodeDto};
use contracts::shared::{LocalizedName, Status};

use super::common::{ReferenceStore, StoredReference};

impl StoredReference for HsCode {}

pub async fn seed(store: &ReferenceStore<HsCode>) {
    let rows = [
        ("09", "Coffee, tea, mate and spices", "البن والشاي والمتة والتوابل"),
        ("0901", "Coffee", "البن"),
        ("0902", "Tea", "الشاي"),
        ("2709", "Crude petroleum oils", "زيوت النفط الخام"),
    ];
    for (code, en, ar) in rows {
        store
            .insert_unchecked(HsCodeDto {
                code: code.into(),
                names: LocalizedName::new(en, ar),
                status: Status::Active,
            })
            .await;
    }
}
