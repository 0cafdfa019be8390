use contracts::shared::{DataEnvelope, Language};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::rc::Rc;

use super::error::RequestError;
use super::transport::{ApiRequest, ApiResponse, HttpTransport, Method, MultipartField, RequestBody};
use crate::shared::loading::LoadingHandle;

/// Language-aware JSON client over an injected transport.
///
/// Every call takes the language explicitly and sends it as
/// `Accept-Language`; the client keeps no language of its own, so switching
/// language never affects a request that is already in flight.
#[derive(Clone)]
pub struct ApiClient {
    transport: Rc<dyn HttpTransport>,
    base_url: String,
    loading: LoadingHandle,
    timezone: Option<String>,
}

impl ApiClient {
    pub fn new(transport: Rc<dyn HttpTransport>, base_url: impl Into<String>, loading: LoadingHandle) -> Self {
        Self {
            transport,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            loading,
            timezone: None,
        }
    }

    /// Adds `X-Timezone` to every request
    pub fn with_timezone(mut self, timezone: Option<String>) -> Self {
        self.timezone = timezone.filter(|tz| !tz.is_empty());
        self
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn loading(&self) -> &LoadingHandle {
        &self.loading
    }

    pub fn headers(&self, lang: Language, body: &RequestBody) -> Vec<(String, String)> {
        let mut headers = vec![
            ("Accept".to_string(), "application/json".to_string()),
            ("Accept-Language".to_string(), lang.code().to_string()),
        ];
        if matches!(body, RequestBody::Json(_)) {
            headers.push(("Content-Type".to_string(), "application/json".to_string()));
        }
        if let Some(tz) = &self.timezone {
            headers.push(("X-Timezone".to_string(), tz.clone()));
        }
        headers
    }

    /// Sends one request; non-2xx answers become `RequestError`.
    /// The loading flag is raised for the whole call, errors included.
    pub async fn execute(
        &self,
        method: Method,
        path: &str,
        lang: Language,
        body: RequestBody,
    ) -> Result<ApiResponse, RequestError> {
        let _loading = self.loading.begin();
        let request = ApiRequest {
            method,
            url: self.url(path),
            headers: self.headers(lang, &body),
            body,
        };

        match self.transport.send(request).await {
            Ok(response) if response.is_success() => Ok(response),
            Ok(response) => {
                let error = RequestError::from_response(response.status, &response.body);
                if !error.is_not_found() {
                    log::error!("{} {} failed: {}", method.as_str(), path, error);
                }
                Err(error)
            }
            Err(error) => {
                log::error!("{} {} failed: {}", method.as_str(), path, error);
                Err(error)
            }
        }
    }

    /// GET and unwrap `{data: ...}`
    pub async fn get_data<T: DeserializeOwned>(&self, path: &str, lang: Language) -> Result<T, RequestError> {
        let response = self.execute(Method::Get, path, lang, RequestBody::Empty).await?;
        decode_data(&response.body)
    }

    /// GET without envelope unwrapping (paginated responses)
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str, lang: Language) -> Result<T, RequestError> {
        let response = self.execute(Method::Get, path, lang, RequestBody::Empty).await?;
        serde_json::from_str(&response.body).map_err(|e| RequestError::Decode(e.to_string()))
    }

    pub async fn post_data<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        lang: Language,
    ) -> Result<T, RequestError> {
        let response = self.execute(Method::Post, path, lang, encode_json(body)?).await?;
        decode_data(&response.body)
    }

    pub async fn put_data<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        lang: Language,
    ) -> Result<T, RequestError> {
        let response = self.execute(Method::Put, path, lang, encode_json(body)?).await?;
        decode_data(&response.body)
    }

    /// PUT without a body; the response body is ignored
    pub async fn put_empty(&self, path: &str, lang: Language) -> Result<(), RequestError> {
        self.execute(Method::Put, path, lang, RequestBody::Empty).await?;
        Ok(())
    }

    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        fields: Vec<MultipartField>,
        lang: Language,
    ) -> Result<T, RequestError> {
        let response = self
            .execute(Method::Post, path, lang, RequestBody::Multipart(fields))
            .await?;
        decode_data(&response.body)
    }

    pub async fn delete(&self, path: &str, lang: Language) -> Result<(), RequestError> {
        self.execute(Method::Delete, path, lang, RequestBody::Empty).await?;
        Ok(())
    }
}

fn encode_json<B: Serialize + ?Sized>(body: &B) -> Result<RequestBody, RequestError> {
    serde_json::to_string(body)
        .map(RequestBody::Json)
        .map_err(|e| RequestError::Encode(e.to_string()))
}

/// Unwraps the `{data: ...}` envelope
pub fn decode_data<T: DeserializeOwned>(body: &str) -> Result<T, RequestError> {
    serde_json::from_str::<DataEnvelope<T>>(body)
        .map(DataEnvelope::into_inner)
        .map_err(|e| RequestError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::http::testing::MockTransport;
    use futures::executor::block_on;
    use serde::Deserialize;
    use serde_json::json;
    use std::cell::RefCell;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Row {
        id: i64,
        name: String,
    }

    fn client(mock: &Rc<MockTransport>) -> ApiClient {
        ApiClient::new(mock.clone(), "https://api.example.test/", LoadingHandle::detached())
    }

    #[test]
    fn test_list_unwraps_envelope() {
        let mock = Rc::new(MockTransport::new().respond(200, json!({"data": [{"id": 1, "name": "X"}]})));
        let rows: Vec<Row> = block_on(client(&mock).get_data("/api/rows", Language::En)).unwrap();
        assert_eq!(rows, vec![Row { id: 1, name: "X".into() }]);
    }

    #[test]
    fn test_headers_follow_explicit_language() {
        let mock = Rc::new(
            MockTransport::new()
                .respond(200, json!({"data": []}))
                .respond(200, json!({"data": []})),
        );
        let api = client(&mock).with_timezone(Some("Asia/Riyadh".into()));

        let _: Vec<Row> = block_on(api.get_data("/api/rows", Language::Ar)).unwrap();
        let _: Vec<Row> = block_on(api.get_data("/api/rows", Language::En)).unwrap();

        let first = mock.request(0);
        assert_eq!(first.url, "https://api.example.test/api/rows");
        assert_eq!(first.method, Method::Get);
        assert_eq!(first.header("accept-language"), Some("ar"));
        assert_eq!(first.header("Accept"), Some("application/json"));
        assert_eq!(first.header("X-Timezone"), Some("Asia/Riyadh"));
        assert_eq!(first.header("Content-Type"), None);
        assert_eq!(mock.request(1).header("Accept-Language"), Some("en"));
    }

    #[test]
    fn test_json_body_sets_content_type() {
        let mock = Rc::new(MockTransport::new().respond(201, json!({"data": {"id": 5, "name": "Y"}})));
        let row: Row = block_on(client(&mock).post_data("/api/rows", &json!({"name": "Y"}), Language::En)).unwrap();
        assert_eq!(row.id, 5);

        let request = mock.request(0);
        assert_eq!(request.header("Content-Type"), Some("application/json"));
        match request.body {
            RequestBody::Json(body) => assert_eq!(body, r#"{"name":"Y"}"#),
            other => panic!("unexpected body {other:?}"),
        }
    }

    #[test]
    fn test_validation_error_is_propagated() {
        let mock = Rc::new(MockTransport::new().respond(422, json!({"errors": {"name": ["Name is required"]}})));
        let result: Result<Row, _> = block_on(client(&mock).post_data("/api/rows", &json!({}), Language::En));
        match result {
            Err(RequestError::Validation { status, messages }) => {
                assert_eq!(status, 422);
                assert_eq!(messages.len(), 1);
                assert_eq!(messages[0].detail, "Name is required");
            }
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn test_transport_error_passes_through() {
        let mock = Rc::new(MockTransport::new().fail(RequestError::Transport("offline".into())));
        let result: Result<Vec<Row>, _> = block_on(client(&mock).get_data("/api/rows", Language::En));
        assert_eq!(result, Err(RequestError::Transport("offline".into())));
    }

    #[test]
    fn test_bad_envelope_is_decode_error() {
        let mock = Rc::new(MockTransport::new().respond(200, json!([{"id": 1, "name": "X"}])));
        let result: Result<Vec<Row>, _> = block_on(client(&mock).get_data("/api/rows", Language::En));
        assert!(matches!(result, Err(RequestError::Decode(_))));
    }

    #[test]
    fn test_loading_toggles_around_each_call() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let recorder = events.clone();
        let loading = LoadingHandle::new(move |on| recorder.borrow_mut().push(on));

        let mock = Rc::new(
            MockTransport::new()
                .respond_empty(204)
                .respond(500, json!({"message": "boom"})),
        );
        let api = ApiClient::new(mock.clone(), "", loading.clone());

        block_on(api.delete("/api/rows/1", Language::En)).unwrap();
        assert!(block_on(api.delete("/api/rows/2", Language::En)).is_err());

        assert_eq!(*events.borrow(), vec![true, false, true, false]);
        assert!(!loading.is_loading());
    }
}
