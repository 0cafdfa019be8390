//! Profile photo upload and the in-memory file it is served from.

use std::collections::HashMap;

use axum::extract::{DefaultBodyLimit, Multipart, Path, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use contracts::shared::DataEnvelope;
use contracts::system::profile::{validate_photo, PhotoUploadResponse};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::shared::error::{ApiError, ApiResult};
use crate::shared::state::AppState;

pub const UPLOADS_PATH: &str = "/uploads/profile";

/// Request body cap; larger than the photo limit so oversized photos get a 422
const UPLOAD_BODY_LIMIT: usize = 8 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct StoredPhoto {
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Default)]
pub struct PhotoStore {
    files: RwLock<HashMap<String, StoredPhoto>>,
}

impl PhotoStore {
    /// Stores the photo and returns its public file name
    pub async fn put(&self, photo: StoredPhoto) -> String {
        let name = format!("{}.{}", Uuid::new_v4(), extension(&photo.content_type));
        self.files.write().await.insert(name.clone(), photo);
        name
    }

    pub async fn get(&self, name: &str) -> Option<StoredPhoto> {
        self.files.read().await.get(name).cloned()
    }
}

fn extension(content_type: &str) -> &'static str {
    match content_type {
        "image/png" => "png",
        "image/webp" => "webp",
        _ => "jpg",
    }
}

/// POST /api/profile/photo
pub async fn upload_photo(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> ApiResult<Json<DataEnvelope<PhotoUploadResponse>>> {
    let mut photo = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(e.body_text()))?
    {
        if field.name() != Some("photo") {
            continue;
        }
        let content_type = field.content_type().unwrap_or_default().to_string();
        let bytes = field.bytes().await.map_err(|e| ApiError::BadRequest(e.body_text()))?;
        photo = Some(StoredPhoto {
            content_type,
            bytes: bytes.to_vec(),
        });
    }

    let photo = photo.ok_or_else(|| ApiError::field("photo", "The photo is required."))?;
    validate_photo(&photo.content_type, photo.bytes.len() as f64).map_err(|message| ApiError::field("photo", message))?;

    let size = photo.bytes.len();
    let name = state.photos.put(photo).await;
    tracing::info!("stored profile photo {} ({} bytes)", name, size);

    Ok(Json(DataEnvelope::new(PhotoUploadResponse {
        url: format!("{}/{}", UPLOADS_PATH, name),
    })))
}

/// GET /uploads/profile/:name
pub async fn serve_photo(State(state): State<AppState>, Path(name): Path<String>) -> Response {
    match state.photos.get(&name).await {
        Some(photo) => ([(CONTENT_TYPE, photo.content_type)], photo.bytes).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/photo", post(upload_photo))
        .layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT))
}

pub fn upload_routes() -> Router<AppState> {
    Router::new().route("/:name", get(serve_photo))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_store_keeps_type_and_extension() {
        let store = PhotoStore::default();
        let name = store
            .put(StoredPhoto {
                content_type: "image/png".into(),
                bytes: vec![1, 2, 3],
            })
            .await;
        assert!(name.ends_with(".png"));
        let stored = store.get(&name).await.unwrap();
        assert_eq!(stored.bytes, vec![1, 2, 3]);
        assert!(store.get("missing.png").await.is_none());
    }
}
