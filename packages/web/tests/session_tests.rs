//! Tests for the auth session endpoints used by the navigation bar.

mod common;

use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use clinic_web::types::DEFAULT_AVATAR;
use serde_json::{json, Value};
use std::collections::HashMap;

use common::StubServer;

#[tokio::test]
async fn signed_in_session_is_mapped() {
    let router = Router::new().route(
        "/api/auth/session",
        get(|| async {
            Json(json!({
                "user": { "name": "Jane", "email": "jane@example.com", "image": "/me.png" },
                "expires": "2099-01-01T00:00:00.000Z"
            }))
        }),
    );
    let server = StubServer::start(router).await.unwrap();

    let session = server.client().fetch_session().await.unwrap().unwrap();

    assert_eq!(session.name, "Jane");
    assert_eq!(session.avatar(), "/me.png");
}

#[tokio::test]
async fn missing_image_falls_back_to_default_avatar() {
    let router = Router::new().route(
        "/api/auth/session",
        get(|| async { Json(json!({ "user": { "name": "Jane" } })) }),
    );
    let server = StubServer::start(router).await.unwrap();

    let session = server.client().fetch_session().await.unwrap().unwrap();

    assert_eq!(session.avatar(), DEFAULT_AVATAR);
}

#[tokio::test]
async fn anonymous_visitor_has_no_session() {
    for body in [json!({}), Value::Null] {
        let router = Router::new().route(
            "/api/auth/session",
            get(move || {
                let body = body.clone();
                async move { Json(body) }
            }),
        );
        let server = StubServer::start(router).await.unwrap();

        assert_eq!(server.client().fetch_session().await.unwrap(), None);
    }
}

#[tokio::test]
async fn sign_out_posts_the_csrf_token() {
    let forms: Arc<Mutex<Vec<HashMap<String, String>>>> = Arc::default();
    let router = Router::new()
        .route(
            "/api/auth/csrf",
            get(|| async { Json(json!({ "csrfToken": "tok-123" })) }),
        )
        .route(
            "/api/auth/signout",
            post(
                |State(forms): State<Arc<Mutex<Vec<HashMap<String, String>>>>>,
                 Form(form): Form<HashMap<String, String>>| async move {
                    forms.lock().unwrap().push(form);
                    Json(json!({ "url": "/" }))
                },
            ),
        )
        .with_state(forms.clone());
    let server = StubServer::start(router).await.unwrap();

    server.client().sign_out().await.unwrap();

    let forms = forms.lock().unwrap();
    assert_eq!(forms.len(), 1);
    assert_eq!(forms[0]["csrfToken"], "tok-123");
    assert_eq!(forms[0]["json"], "true");
}
