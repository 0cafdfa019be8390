use contracts::domain::a007_staff_member::aggregate::StaffMember;
use contracts::shared::Language;

use crate::shared::http::{ApiClient, RequestError};

/// Read-only staff directory
#[derive(Clone)]
pub struct StaffApi {
    client: ApiClient,
}

impl StaffApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, lang: Language) -> Result<Vec<StaffMember>, RequestError> {
        self.client.get_data(StaffMember::ENDPOINT, lang).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::http::testing::MockTransport;
    use crate::shared::loading::LoadingHandle;
    use futures::executor::block_on;
    use serde_json::json;
    use std::rc::Rc;

    #[test]
    fn test_list_unwraps_envelope() {
        let mock = Rc::new(MockTransport::new().respond(
            200,
            json!({"data": [{"id": 1, "names": {"en": "Omar", "ar": "عمر"}, "email": "omar@example.com", "role_code": "admin"}]}),
        ));
        let api = StaffApi::new(ApiClient::new(mock.clone(), "http://api.test", LoadingHandle::detached()));

        let staff = block_on(api.list(Language::Ar)).unwrap();
        assert_eq!(staff.len(), 1);
        assert_eq!(staff[0].role_code, "admin");
        assert_eq!(mock.request(0).url, "http://api.test/api/staff-members");
        assert_eq!(mock.request(0).header("Accept-Language"), Some("ar"));
    }
}
