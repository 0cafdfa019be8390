use contracts::shared::Language;
use contracts::system::profile::PhotoUploadResponse;

use crate::shared::http::{ApiClient, MultipartField, RequestError};

const PHOTO_ENDPOINT: &str = "/api/profile/photo";

#[derive(Clone)]
pub struct ProfileApi {
    client: ApiClient,
}

impl ProfileApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Uploads the profile photo as multipart field `photo`
    pub async fn upload_photo(&self, file: web_sys::File, lang: Language) -> Result<PhotoUploadResponse, RequestError> {
        let fields = vec![MultipartField::file("photo", file)];
        self.client.post_multipart(PHOTO_ENDPOINT, fields, lang).await
    }
}
