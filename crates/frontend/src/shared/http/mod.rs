//! HTTP plumbing shared by every API wrapper.
//!
//! - `transport` - the seam to the browser `fetch` (mockable in tests)
//! - `client` - header construction, loading bookkeeping, envelope unwrapping
//! - `error` - `RequestError` and its mapping from status/body

pub mod client;
pub mod error;
pub mod transport;

pub use client::{decode_data, ApiClient};
pub use error::RequestError;
pub use transport::{ApiRequest, ApiResponse, FetchTransport, HttpTransport, Method, MultipartField, MultipartValue, RequestBody};

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use async_trait::async_trait;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Transport answering from a queue of canned responses and recording
    /// every request it receives
    #[derive(Default)]
    pub struct MockTransport {
        responses: RefCell<VecDeque<Result<ApiResponse, RequestError>>>,
        pub requests: RefCell<Vec<ApiRequest>>,
    }

    impl MockTransport {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn respond(self, status: u16, body: serde_json::Value) -> Self {
            self.responses.borrow_mut().push_back(Ok(ApiResponse {
                status,
                body: body.to_string(),
            }));
            self
        }

        pub fn respond_empty(self, status: u16) -> Self {
            self.responses.borrow_mut().push_back(Ok(ApiResponse {
                status,
                body: String::new(),
            }));
            self
        }

        pub fn fail(self, error: RequestError) -> Self {
            self.responses.borrow_mut().push_back(Err(error));
            self
        }

        pub fn request(&self, index: usize) -> ApiRequest {
            self.requests.borrow()[index].clone()
        }

        pub fn request_count(&self) -> usize {
            self.requests.borrow().len()
        }
    }

    #[async_trait(?Send)]
    impl HttpTransport for MockTransport {
        async fn send(&self, request: ApiRequest) -> Result<ApiResponse, RequestError> {
            self.requests.borrow_mut().push(request);
            self.responses
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(RequestError::Transport("no canned response".to_string())))
        }
    }
}
