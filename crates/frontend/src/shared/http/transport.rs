use async_trait::async_trait;
use gloo_net::http::Request;
use web_sys::FormData;

use super::error::RequestError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

#[derive(Debug, Clone)]
pub enum MultipartValue {
    Text(String),
    File(web_sys::File),
}

#[derive(Debug, Clone)]
pub struct MultipartField {
    pub name: String,
    pub value: MultipartValue,
}

impl MultipartField {
    pub fn text(name: &str, value: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            value: MultipartValue::Text(value.into()),
        }
    }

    pub fn file(name: &str, file: web_sys::File) -> Self {
        Self {
            name: name.to_string(),
            value: MultipartValue::File(file),
        }
    }
}

#[derive(Debug, Clone)]
pub enum RequestBody {
    Empty,
    Json(String),
    /// Sent as `multipart/form-data`; the browser sets the boundary header
    Multipart(Vec<MultipartField>),
}

/// Fully prepared request, independent of the browser API
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: RequestBody,
}

impl ApiRequest {
    /// Header value by case-insensitive name
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Executes prepared requests. The browser build uses [`FetchTransport`],
/// tests plug in a scripted implementation.
#[async_trait(?Send)]
pub trait HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, RequestError>;
}

/// `fetch`-backed transport (gloo-net)
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

#[async_trait(?Send)]
impl HttpTransport for FetchTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, RequestError> {
        let mut builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Put => Request::put(&request.url),
            Method::Delete => Request::delete(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let prepared = match request.body {
            RequestBody::Empty => builder.build(),
            RequestBody::Json(json) => builder.body(json),
            RequestBody::Multipart(fields) => builder.body(form_data(fields)?),
        }
        .map_err(|e| RequestError::Encode(e.to_string()))?;

        let response = prepared
            .send()
            .await
            .map_err(|e| RequestError::Transport(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| RequestError::Transport(e.to_string()))?;

        Ok(ApiResponse { status, body })
    }
}

fn form_data(fields: Vec<MultipartField>) -> Result<FormData, RequestError> {
    let form = FormData::new().map_err(|e| RequestError::Encode(format!("{e:?}")))?;
    for field in fields {
        let appended = match &field.value {
            MultipartValue::Text(text) => form.append_with_str(&field.name, text),
            MultipartValue::File(file) => {
                form.append_with_blob_and_filename(&field.name, file, &file.name())
            }
        };
        appended.map_err(|e| RequestError::Encode(format!("{e:?}")))?;
    }
    Ok(form)
}
