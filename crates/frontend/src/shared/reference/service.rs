use contracts::domain::common::{ReferenceEntity, TreeEntity};
use contracts::shared::{build_tree, Language, LanguageResolver, Paginated, RawTreeNode, TreeNode};
use std::marker::PhantomData;

use crate::shared::api_utils::with_id;
use crate::shared::http::{ApiClient, RequestError};

/// CRUD façade over one reference resource.
///
/// Holds no data: create/update/delete never touch a local list, callers
/// re-fetch to see the change.
pub struct ReferenceDataService<E: ReferenceEntity> {
    client: ApiClient,
    _entity: PhantomData<fn() -> E>,
}

impl<E: ReferenceEntity> Clone for ReferenceDataService<E> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            _entity: PhantomData,
        }
    }
}

impl<E: ReferenceEntity> ReferenceDataService<E> {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            _entity: PhantomData,
        }
    }

    /// GET /api/{resource}
    pub async fn list(&self, lang: Language) -> Result<Vec<E>, RequestError> {
        self.client.get_data(&E::endpoint(), lang).await
    }

    /// GET /api/{resource}?page=&per_page=
    pub async fn list_page(&self, lang: Language, page: u32, per_page: u32) -> Result<Paginated<E>, RequestError> {
        let path = format!("{}?page={}&per_page={}", E::endpoint(), page, per_page);
        self.client.get_json(&path, lang).await
    }

    /// POST /api/{resource}
    pub async fn create(&self, payload: &E::Payload, lang: Language) -> Result<E, RequestError> {
        let created: E = self.client.post_data(&E::endpoint(), payload, lang).await?;
        log::info!("{} {} created", E::collection_name(), created.id());
        Ok(created)
    }

    /// PUT /api/{resource}/{id}
    pub async fn update(&self, id: i64, payload: &E::Payload, lang: Language) -> Result<E, RequestError> {
        let updated: E = self.client.put_data(&with_id(&E::endpoint(), id), payload, lang).await?;
        log::info!("{} {} updated", E::collection_name(), id);
        Ok(updated)
    }

    /// DELETE /api/{resource}/{id}
    pub async fn delete(&self, id: i64, lang: Language) -> Result<(), RequestError> {
        self.client.delete(&with_id(&E::endpoint(), id), lang).await?;
        log::info!("{} {} deleted", E::collection_name(), id);
        Ok(())
    }
}

impl<E: TreeEntity> ReferenceDataService<E> {
    /// GET /api/{resource}/tree, nested by the server
    pub async fn tree(&self, lang: Language) -> Result<Vec<TreeNode>, RequestError> {
        let raw: Vec<RawTreeNode> = self.client.get_data(&E::tree_endpoint(), lang).await?;
        Ok(build_tree(&raw, &LanguageResolver(lang)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::http::testing::MockTransport;
    use crate::shared::http::{Method, RequestBody};
    use crate::shared::loading::LoadingHandle;
    use contracts::domain::a001_department::aggregate::{Department, DepartmentDto};
    use contracts::domain::a005_isic_code::aggregate::IsicCode;
    use contracts::shared::{LocalizedName, Status};
    use futures::executor::block_on;
    use serde_json::json;
    use std::rc::Rc;

    fn service<E: ReferenceEntity>(mock: &Rc<MockTransport>) -> ReferenceDataService<E> {
        ReferenceDataService::new(ApiClient::new(mock.clone(), "http://api.test", LoadingHandle::detached()))
    }

    #[test]
    fn test_create_department_resolves_with_record_and_keeps_no_state() {
        let mock = Rc::new(
            MockTransport::new()
                .respond(
                    201,
                    json!({"data": {"id": 42, "names": {"en": "HR", "ar": "الموارد"}, "status": "active"}}),
                )
                .respond(200, json!({"data": []})),
        );
        let departments = service::<Department>(&mock);

        let payload = DepartmentDto {
            names: LocalizedName::new("HR", "الموارد"),
            status: Status::Active,
        };
        let created = block_on(departments.create(&payload, Language::En)).unwrap();
        assert_eq!(created.id, 42);
        assert_eq!(created.names, payload.names);

        let request = mock.request(0);
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.url, "http://api.test/api/departments");
        match request.body {
            RequestBody::Json(body) => {
                let sent: serde_json::Value = serde_json::from_str(&body).unwrap();
                assert_eq!(sent, json!({"names": {"en": "HR", "ar": "الموارد"}, "status": "active"}));
            }
            other => panic!("unexpected body {other:?}"),
        }
        assert_eq!(mock.request_count(), 1);

        // the list is whatever the server says on the next fetch
        let listed = block_on(departments.list(Language::En)).unwrap();
        assert!(listed.is_empty());
        assert_eq!(mock.request(1).method, Method::Get);
    }

    #[test]
    fn test_update_and_delete_paths() {
        let mock = Rc::new(
            MockTransport::new()
                .respond(200, json!({"data": {"id": 7, "names": {"en": "Ops", "ar": "العمليات"}, "status": "inactive"}}))
                .respond_empty(204),
        );
        let departments = service::<Department>(&mock);
        let payload = DepartmentDto {
            names: LocalizedName::new("Ops", "العمليات"),
            status: Status::Inactive,
        };

        let updated = block_on(departments.update(7, &payload, Language::Ar)).unwrap();
        assert_eq!(updated.status, Status::Inactive);
        block_on(departments.delete(7, Language::Ar)).unwrap();

        assert_eq!(mock.request(0).method, Method::Put);
        assert_eq!(mock.request(0).url, "http://api.test/api/departments/7");
        assert_eq!(mock.request(0).header("Accept-Language"), Some("ar"));
        assert_eq!(mock.request(1).method, Method::Delete);
        assert_eq!(mock.request(1).url, "http://api.test/api/departments/7");
    }

    #[test]
    fn test_tree_resolves_labels_for_requested_language() {
        let body = json!({"data": [
            {"key": 1, "code": "A", "names": {"en": "Agriculture", "ar": "الزراعة"}, "children": [
                {"key": 2, "code": "01", "names": {"en": "Food", "ar": "طعام"}, "children": null}
            ]}
        ]});
        let mock = Rc::new(MockTransport::new().respond(200, body.clone()).respond(200, body));
        let isic = service::<IsicCode>(&mock);

        let ar = block_on(isic.tree(Language::Ar)).unwrap();
        assert_eq!(ar[0].children[0].label, "طعام");
        let en = block_on(isic.tree(Language::En)).unwrap();
        assert_eq!(en[0].children[0].label, "Food");
        assert!(en[0].children[0].children.is_empty());
        assert_eq!(mock.request(0).url, "http://api.test/api/isic-codes/tree");
    }

    #[test]
    fn test_list_page_keeps_meta() {
        let mock = Rc::new(MockTransport::new().respond(
            200,
            json!({
                "data": [{"id": 1, "names": {"en": "HR", "ar": "الموارد"}}],
                "links": {"first": "/api/departments?page=1", "last": "/api/departments?page=3", "prev": null, "next": "/api/departments?page=2"},
                "meta": {"current_page": 1, "last_page": 3, "per_page": 1, "total": 3}
            }),
        ));
        let page = block_on(service::<Department>(&mock).list_page(Language::En, 1, 1)).unwrap();
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.meta.last_page, 3);
        assert_eq!(mock.request(0).url, "http://api.test/api/departments?page=1&per_page=1");
    }
}
