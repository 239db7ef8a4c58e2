mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use common::{TestApp, ADMIN_TOKEN};
use serde_json::{json, Value};
use tower::ServiceExt;

async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_admin_routes_require_the_token() {
    let app = TestApp::new().await;

    let res = app.router.clone().oneshot(
        Request::builder()
            .uri("/api/v1/admin/guests")
            .body(Body::empty())
            .unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let res = app.router.clone().oneshot(
        Request::builder()
            .uri("/api/v1/admin/guests")
            .header("X-Admin-Token", "wrong-token")
            .body(Body::empty())
            .unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_guest_lifecycle() {
    let app = TestApp::new().await;

    let created = app.seed_guest("Budi Santoso", "Jl. Merdeka 1, Jakarta", "Budi Santoso").await;
    let guest_id = created["id"].as_str().unwrap().to_string();

    let res = app.router.clone().oneshot(
        Request::builder()
            .uri("/api/v1/admin/guests")
            .header("X-Admin-Token", ADMIN_TOKEN)
            .body(Body::empty())
            .unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let list = parse_body(res).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0]["slug"], "Budi Santoso");

    let res = app.router.clone().oneshot(
        Request::builder()
            .method("DELETE")
            .uri(format!("/api/v1/admin/guests/{}", guest_id))
            .header("X-Admin-Token", ADMIN_TOKEN)
            .body(Body::empty())
            .unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    // A removed guest no longer resolves.
    let res = app.router.clone().oneshot(
        Request::builder()
            .uri("/api/v1/invitations/budi-santoso")
            .body(Body::empty())
            .unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    // Deleting twice is a 404.
    let res = app.router.clone().oneshot(
        Request::builder()
            .method("DELETE")
            .uri(format!("/api/v1/admin/guests/{}", guest_id))
            .header("X-Admin-Token", ADMIN_TOKEN)
            .body(Body::empty())
            .unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_guest_slug_defaults_to_full_name() {
    let app = TestApp::new().await;

    let res = app.router.clone().oneshot(
        Request::builder()
            .method("POST")
            .uri("/api/v1/admin/guests")
            .header(header::CONTENT_TYPE, "application/json")
            .header("X-Admin-Token", ADMIN_TOKEN)
            .body(Body::from(json!({
                "full_name": "Siti Rahma",
                "address": "Jl. Kenanga 3, Bandung"
            }).to_string()))
            .unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body = parse_body(res).await;
    assert_eq!(body["slug"], "Siti Rahma");

    let res = app.router.clone().oneshot(
        Request::builder()
            .uri("/api/v1/invitations/siti-rahma")
            .body(Body::empty())
            .unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_blank_guest_name_is_rejected() {
    let app = TestApp::new().await;

    let res = app.router.clone().oneshot(
        Request::builder()
            .method("POST")
            .uri("/api/v1/admin/guests")
            .header(header::CONTENT_TYPE, "application/json")
            .header("X-Admin-Token", ADMIN_TOKEN)
            .body(Body::from(json!({
                "full_name": "   ",
                "address": "Nowhere"
            }).to_string()))
            .unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_admin_rsvp_listing() {
    let app = TestApp::new().await;
    app.seed_guest("Budi Santoso", "Jl. Merdeka 1, Jakarta", "Budi Santoso").await;

    app.router.clone().oneshot(
        Request::builder()
            .method("POST")
            .uri("/api/v1/invitations/budi-santoso/rsvp")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({
                "is_coming": false, "total_attendees": 3, "message": "So sorry!"
            }).to_string()))
            .unwrap()
    ).await.unwrap();

    let res = app.router.clone().oneshot(
        Request::builder()
            .uri("/api/v1/admin/rsvps")
            .header("X-Admin-Token", ADMIN_TOKEN)
            .body(Body::empty())
            .unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body = parse_body(res).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["full_name"], "Budi Santoso");
    assert_eq!(body[0]["is_coming"], false);
    assert_eq!(body[0]["total_attendees"], 0);
}
