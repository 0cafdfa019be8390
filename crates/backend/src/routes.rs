use axum::routing::get;
use axum::{middleware, Router};
use contracts::domain::a001_department::aggregate::Department;
use contracts::domain::a002_role::aggregate::Role;
use contracts::domain::a003_tag::aggregate::Tag;
use contracts::domain::a004_hs_code::aggregate::HsCode;
use contracts::domain::a005_isic_code::aggregate::IsicCode;
use contracts::domain::a006_consulting_field::aggregate::ConsultingField;
use contracts::domain::a007_staff_member::aggregate::StaffMember;
use contracts::domain::common::ReferenceEntity;

use crate::handlers::reference::{reference_routes, tree_routes};
use crate::shared::state::AppState;
use crate::{domain, system};

/// All routes of the application
pub fn configure_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // REFERENCE DATA
        // ========================================
        .nest(&Department::endpoint(), reference_routes::<Department>())
        .nest(&Role::endpoint(), reference_routes::<Role>())
        .nest(&Tag::endpoint(), reference_routes::<Tag>())
        .nest(&HsCode::endpoint(), reference_routes::<HsCode>())
        .nest(&IsicCode::endpoint(), tree_routes::<IsicCode>())
        .nest(&ConsultingField::endpoint(), tree_routes::<ConsultingField>())
        .nest(StaffMember::ENDPOINT, domain::a007_staff_member::routes())
        // ========================================
        // ACCOUNT
        // ========================================
        .nest("/api/notifications", system::notifications::routes())
        .nest("/api/account", system::account::routes())
        .nest("/api/payment", system::payment::routes())
        .nest("/api/profile", system::profile::routes())
        .nest(system::profile::UPLOADS_PATH, system::profile::upload_routes())
        .layer(middleware::from_fn(system::middleware::request_logger::request_logger))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn get_json(uri: &str) -> Request<Body> {
        Request::builder()
            .uri(uri)
            .header(header::ACCEPT, "application/json")
            .body(Body::empty())
            .unwrap()
    }

    fn with_json(method: Method, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn multipart(uri: &str, parts: &[(&str, Option<(&str, &str)>, &str)]) -> Request<Body> {
        const BOUNDARY: &str = "portal-test-boundary";
        let mut body = String::new();
        for (name, file, content) in parts {
            body.push_str(&format!("--{}\r\n", BOUNDARY));
            match file {
                Some((file_name, content_type)) => body.push_str(&format!(
                    "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: {}\r\n\r\n",
                    name, file_name, content_type
                )),
                None => body.push_str(&format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", name)),
            }
            body.push_str(content);
            body.push_str("\r\n");
        }
        body.push_str(&format!("--{}--\r\n", BOUNDARY));

        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, format!("multipart/form-data; boundary={}", BOUNDARY))
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_department_returns_201_with_record() {
        let app = configure_routes(AppState::new());
        let (status, body) = send(
            &app,
            with_json(
                Method::POST,
                "/api/departments",
                json!({"names": {"en": "Finance", "ar": "المالية"}, "status": "active"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["data"]["id"], 1);
        assert_eq!(body["data"]["names"]["ar"], "المالية");

        let (status, body) = send(&app, get_json("/api/departments")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"].as_array().map(Vec::len), Some(1));
    }

    #[tokio::test]
    async fn test_missing_arabic_name_is_422() {
        let app = configure_routes(AppState::new());
        let (status, body) = send(
            &app,
            with_json(Method::POST, "/api/tags", json!({"names": {"en": "Energy", "ar": ""}})),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["errors"]["names.ar"][0], "The Arabic name is required.");
    }

    #[tokio::test]
    async fn test_undecodable_bodies_render_error_envelope() {
        let app = configure_routes(AppState::new());

        let (status, body) = send(&app, with_json(Method::POST, "/api/departments", json!({}))).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["errors"]["names.en"][0], "The English name is required.");
        assert_eq!(body["errors"]["names.ar"][0], "The Arabic name is required.");

        let (status, body) = send(
            &app,
            with_json(Method::POST, "/api/departments", json!({"name": {"en": "Finance", "ar": "المالية"}})),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["errors"]["names.en"].is_array());

        let (status, body) = send(
            &app,
            with_json(
                Method::POST,
                "/api/departments",
                json!({"names": {"en": "Finance", "ar": "المالية"}, "status": "archived"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["message"].is_string());
        assert!(body["errors"]["status"][0].is_string());

        let (status, body) = send(&app, get_json("/api/departments?page=abc")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["message"].is_string());
    }

    #[tokio::test]
    async fn test_paginated_list() {
        let app = configure_routes(AppState::seeded().await);
        let (status, body) = send(&app, get_json("/api/departments?page=2&per_page=3")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["meta"]["current_page"], 2);
        assert_eq!(body["meta"]["total"], 4);
        assert_eq!(body["data"].as_array().map(Vec::len), Some(1));
        assert!(body["links"]["next"].is_null());
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let app = configure_routes(AppState::seeded().await);
        let (status, body) = send(
            &app,
            with_json(
                Method::PUT,
                "/api/roles/1",
                json!({"code": "owner", "names": {"en": "Owner", "ar": "المالك"}, "status": "active"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["code"], "owner");

        let delete = Request::builder()
            .method(Method::DELETE)
            .uri("/api/roles/1")
            .body(Body::empty())
            .unwrap();
        let (status, _) = send(&app, delete).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _) = send(&app, get_json("/api/roles/1")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_tree_labels_follow_accept_language() {
        let app = configure_routes(AppState::seeded().await);
        let request = Request::builder()
            .uri("/api/isic-codes/tree")
            .header(header::ACCEPT_LANGUAGE, "ar")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::OK);

        let roots = body["data"].as_array().unwrap();
        assert_eq!(roots.len(), 2);
        assert_eq!(roots[0]["code"], "A");
        assert_eq!(roots[0]["label"], "الزراعة والحراجة وصيد الأسماك");
        assert_eq!(roots[0]["children"].as_array().map(Vec::len), Some(2));

        let (_, body) = send(&app, get_json("/api/isic-codes/tree")).await;
        assert_eq!(body["data"][0]["label"], "Agriculture, forestry and fishing");
    }

    #[tokio::test]
    async fn test_tree_node_rules() {
        let app = configure_routes(AppState::seeded().await);

        let (status, body) = send(
            &app,
            with_json(
                Method::POST,
                "/api/isic-codes",
                json!({"code": "99", "names": {"en": "Orphan", "ar": "يتيم"}, "parent_id": 999}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["errors"]["parent_id"].is_array());

        let delete = Request::builder()
            .method(Method::DELETE)
            .uri("/api/isic-codes/1")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(&app, delete).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["errors"]["parent_id"].is_array());
    }

    #[tokio::test]
    async fn test_staff_directory_is_read_only() {
        let app = configure_routes(AppState::seeded().await);
        let (status, body) = send(&app, get_json("/api/staff-members")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"].as_array().map(Vec::len), Some(4));

        let (status, _) = send(&app, with_json(Method::POST, "/api/staff-members", json!({}))).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_notifications_flow() {
        let app = configure_routes(AppState::seeded().await);
        let (_, body) = send(&app, get_json("/api/notifications")).await;
        let items = body["data"].as_array().unwrap();
        assert_eq!(items.len(), 3);
        assert!(items.iter().all(|n| n["read_at"].is_null()));

        let (status, _) = send(&app, with_json(Method::PUT, "/api/notifications/1/read", json!({}))).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (status, _) = send(&app, with_json(Method::PUT, "/api/notifications/42/read", json!({}))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let (status, _) = send(&app, with_json(Method::PUT, "/api/notifications/read-all", json!({}))).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (_, body) = send(&app, get_json("/api/notifications")).await;
        assert!(body["data"].as_array().unwrap().iter().all(|n| !n["read_at"].is_null()));
    }

    #[tokio::test]
    async fn test_payment_lookup_paths() {
        let app = configure_routes(AppState::seeded().await);
        let (status, body) = send(&app, get_json("/api/payment/stripe/account")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["message"].is_string());

        let (status, body) = send(&app, get_json("/api/payment/manual/account")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["bank_name"], "Saudi National Bank");
    }

    #[tokio::test]
    async fn test_account_actions() {
        let app = configure_routes(AppState::new());

        let request = multipart(
            "/api/account/company/deactivate",
            &[
                ("reason", None, "Closing the branch"),
                ("attachment", Some(("letter.pdf", "application/pdf")), "%PDF-1.4"),
            ],
        );
        let (status, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["action"], "deactivate");
        assert_eq!(body["data"]["attachment"], "letter.pdf");

        let (status, body) = send(
            &app,
            with_json(Method::POST, "/api/account/insighter/transfer", json!({"reason": "Opening a firm"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["role"], "insighter");

        let (status, body) = send(
            &app,
            with_json(Method::POST, "/api/account/insighter/reactivate", json!({"reason": "   "})),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["errors"]["reason"].is_array());

        let (status, _) = send(
            &app,
            with_json(Method::POST, "/api/account/admin/transfer", json!({"reason": "x"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_profile_photo_upload() {
        let app = configure_routes(AppState::new());

        let request = multipart("/api/profile/photo", &[("photo", Some(("me.png", "image/png")), "PNGDATA")]);
        let (status, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::OK);
        let url = body["data"]["url"].as_str().unwrap().to_string();
        assert!(url.starts_with("/uploads/profile/") && url.ends_with(".png"));

        let response = app.clone().oneshot(get_json(&url)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "image/png");

        let request = multipart("/api/profile/photo", &[("photo", Some(("me.gif", "image/gif")), "GIF89a")]);
        let (status, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["errors"]["photo"].is_array());
    }
}
