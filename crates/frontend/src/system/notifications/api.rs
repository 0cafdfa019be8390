use contracts::shared::Language;
use contracts::system::notifications::Notification;

use crate::shared::api_utils::with_id;
use crate::shared::http::{ApiClient, RequestError};

const ENDPOINT: &str = "/api/notifications";

#[derive(Clone)]
pub struct NotificationsApi {
    client: ApiClient,
}

impl NotificationsApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Fetch the current user's notifications, newest first
    pub async fn list(&self, lang: Language) -> Result<Vec<Notification>, RequestError> {
        self.client.get_data(ENDPOINT, lang).await
    }

    pub async fn mark_read(&self, id: i64, lang: Language) -> Result<(), RequestError> {
        let path = format!("{}/read", with_id(ENDPOINT, id));
        self.client.put_empty(&path, lang).await
    }

    pub async fn mark_all_read(&self, lang: Language) -> Result<(), RequestError> {
        self.client.put_empty(&format!("{}/read-all", ENDPOINT), lang).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::http::testing::MockTransport;
    use crate::shared::http::Method;
    use crate::shared::loading::LoadingHandle;
    use contracts::system::notifications::unread_count;
    use futures::executor::block_on;
    use serde_json::json;
    use std::rc::Rc;

    fn api(mock: &Rc<MockTransport>) -> NotificationsApi {
        NotificationsApi::new(ApiClient::new(mock.clone(), "http://api.test", LoadingHandle::detached()))
    }

    #[test]
    fn test_list_and_unread_count() {
        let mock = Rc::new(MockTransport::new().respond(
            200,
            json!({"data": [
                {"id": 1, "type": "order", "title": "New order", "message": "Order #5", "read_at": null, "created_at": "2026-01-02T09:00:00Z"},
                {"id": 2, "type": "system", "title": "Welcome", "message": "Hi", "read_at": "2026-01-01T10:00:00Z", "created_at": "2026-01-01T09:00:00Z"}
            ]}),
        ));
        let items = block_on(api(&mock).list(Language::Ar)).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].kind, "order");
        assert_eq!(unread_count(&items), 1);
        assert_eq!(mock.request(0).url, "http://api.test/api/notifications");
        assert_eq!(mock.request(0).header("Accept-Language"), Some("ar"));
    }

    #[test]
    fn test_mark_read_paths() {
        let mock = Rc::new(MockTransport::new().respond_empty(204).respond(200, json!({"data": null})));
        let api = api(&mock);
        block_on(api.mark_read(7, Language::En)).unwrap();
        block_on(api.mark_all_read(Language::En)).unwrap();

        assert_eq!(mock.request(0).method, Method::Put);
        assert_eq!(mock.request(0).url, "http://api.test/api/notifications/7/read");
        assert_eq!(mock.request(1).url, "http://api.test/api/notifications/read-all");
    }
}
