use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, InviteApi, ScriptedResponse};
use serde_json::{json, Value};
use tower::ServiceExt;

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn invite_request(content_type: &str, body: &str) -> Request<String> {
    Request::builder()
        .method("POST")
        .uri("/api/invite")
        .header(http::header::CONTENT_TYPE, content_type)
        .header(http::header::ACCEPT, "application/json")
        .body(body.to_string())
        .unwrap()
}

#[tokio::test]
async fn empty_script_rejects_with_400() {
    let api = InviteApi::shared();
    let resp = app(api.clone())
        .oneshot(invite_request("application/json", r#"{"email":"a@b.com"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert_eq!(body["error"], "unrecognized invite payload");
}

#[tokio::test]
async fn scripted_responses_are_served_in_order_then_default_resumes() {
    let api = InviteApi::shared();
    api.push_responses([
        ScriptedResponse::new(500, json!({ "error": "boom" })),
        ScriptedResponse::new(201, json!({ "ok": true })),
    ]);

    let resp = app(api.clone())
        .oneshot(invite_request("application/json", "{}"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let resp = app(api.clone())
        .oneshot(invite_request("application/json", "{}"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = body_json(resp).await;
    assert_eq!(body["ok"], true);

    // Script exhausted — back to the default reject.
    let resp = app(api.clone())
        .oneshot(invite_request("application/json", "{}"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn requests_are_recorded_with_headers_and_raw_body() {
    let api = InviteApi::shared();

    let request = Request::builder()
        .method("POST")
        .uri("/api/invite")
        .header(http::header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .header(http::header::ACCEPT, "application/json")
        .header(http::header::AUTHORIZATION, "Bearer tok")
        .header("x-api-key", "key-1")
        .header(http::header::COOKIE, "session=2")
        .body("email=a%40b.com&message=hi".to_string())
        .unwrap();

    app(api.clone()).oneshot(request).await.unwrap();

    let received = api.received();
    assert_eq!(received.len(), 1);
    let seen = &received[0];
    assert_eq!(
        seen.content_type.as_deref(),
        Some("application/x-www-form-urlencoded")
    );
    assert_eq!(seen.accept.as_deref(), Some("application/json"));
    assert_eq!(seen.authorization.as_deref(), Some("Bearer tok"));
    assert_eq!(seen.api_key.as_deref(), Some("key-1"));
    assert_eq!(seen.cookie.as_deref(), Some("session=2"));
    assert_eq!(seen.body, "email=a%40b.com&message=hi");
}

#[tokio::test]
async fn absent_headers_are_recorded_as_none() {
    let api = InviteApi::shared();
    app(api.clone())
        .oneshot(invite_request("application/json", "{}"))
        .await
        .unwrap();

    let received = api.received();
    assert!(received[0].authorization.is_none());
    assert!(received[0].api_key.is_none());
    assert!(received[0].cookie.is_none());
}

#[tokio::test]
async fn other_routes_are_not_served() {
    let api = InviteApi::shared();
    let resp = app(api.clone())
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/other")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn get_on_the_invite_route_is_rejected() {
    let api = InviteApi::shared();
    let resp = app(api.clone())
        .oneshot(
            Request::builder()
                .uri("/api/invite")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}
