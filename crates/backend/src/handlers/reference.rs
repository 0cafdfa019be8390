//! REST handlers shared by every reference resource.
//!
//! The same generic functions back `/api/departments`, `/api/isic-codes`
//! and the rest; the entity type picks the table out of [`AppState`].

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use contracts::domain::common::TreeEntity;
use contracts::shared::{DataEnvelope, RawTreeNode};
use serde::Deserialize;

use crate::domain::common::{service, StoredReference};
use crate::shared::error::ApiResult;
use crate::shared::extract::{ApiJson, ApiQuery};
use crate::shared::language::RequestLanguage;
use crate::shared::state::{AppState, HasStore};

const DEFAULT_PER_PAGE: u32 = 50;

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

/// GET /api/{resource}
///
/// Plain `{data}` list, or the paginated envelope when `page` is given.
pub async fn list<E>(State(state): State<AppState>, ApiQuery(query): ApiQuery<ListQuery>) -> Response
where
    E: StoredReference,
    AppState: HasStore<E>,
{
    let store = HasStore::<E>::store(&state);
    match query.page {
        Some(page) => {
            let per_page = query.per_page.unwrap_or(DEFAULT_PER_PAGE);
            Json(service::list_page(store, page, per_page).await).into_response()
        }
        None => Json(DataEnvelope::new(service::list(store).await)).into_response(),
    }
}

/// GET /api/{resource}/:id
pub async fn get_by_id<E>(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<Json<DataEnvelope<E>>>
where
    E: StoredReference,
    AppState: HasStore<E>,
{
    let record = service::get(HasStore::<E>::store(&state), id).await?;
    Ok(Json(DataEnvelope::new(record)))
}

/// POST /api/{resource}
pub async fn create<E>(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<E::Payload>,
) -> ApiResult<(StatusCode, Json<DataEnvelope<E>>)>
where
    E: StoredReference,
    AppState: HasStore<E>,
{
    let record = service::create(HasStore::<E>::store(&state), payload).await?;
    Ok((StatusCode::CREATED, Json(DataEnvelope::new(record))))
}

/// PUT /api/{resource}/:id
pub async fn update<E>(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ApiJson(payload): ApiJson<E::Payload>,
) -> ApiResult<Json<DataEnvelope<E>>>
where
    E: StoredReference,
    AppState: HasStore<E>,
{
    let record = service::update(HasStore::<E>::store(&state), id, payload).await?;
    Ok(Json(DataEnvelope::new(record)))
}

/// DELETE /api/{resource}/:id
pub async fn delete<E>(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<StatusCode>
where
    E: StoredReference,
    AppState: HasStore<E>,
{
    service::delete(HasStore::<E>::store(&state), id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/{resource}/tree
pub async fn tree<E>(
    State(state): State<AppState>,
    RequestLanguage(lang): RequestLanguage,
) -> Json<DataEnvelope<Vec<RawTreeNode>>>
where
    E: StoredReference + TreeEntity,
    AppState: HasStore<E>,
{
    Json(DataEnvelope::new(service::tree(HasStore::<E>::store(&state), lang).await))
}

/// CRUD routes of a flat resource, mounted at `E::endpoint()`
pub fn reference_routes<E>() -> Router<AppState>
where
    E: StoredReference,
    AppState: HasStore<E>,
{
    Router::new()
        .route("/", get(list::<E>).post(create::<E>))
        .route("/:id", get(get_by_id::<E>).put(update::<E>).delete(delete::<E>))
}

/// CRUD routes plus `/tree` for a hierarchical resource
pub fn tree_routes<E>() -> Router<AppState>
where
    E: StoredReference + TreeEntity,
    AppState: HasStore<E>,
{
    reference_routes::<E>().route("/tree", get(tree::<E>))
}

