use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use kairos_contact::ContactSubmission;
use serde_json::json;
use tower::ServiceExt;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

mod common;

use common::{SUBMIT_PATH, body_json, body_string, create_test_app, test_config, valid_submission};

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_form(submission: &ContactSubmission) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/contact")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(serde_urlencoded::to_string(submission).unwrap()))
        .unwrap()
}

async fn forms_api(status: u16, expected_calls: u64) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(SUBMIT_PATH))
        .respond_with(ResponseTemplate::new(status))
        .expect(expected_calls)
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn test_landing_page_renders() {
    // Arrange
    let app = create_test_app(test_config("http://127.0.0.1:9"));

    // Act
    let response = app.oneshot(get("/")).await.unwrap();

    // Assert
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains("Scale faster."));
    assert!(html.contains("Growth scales when execution scales."));
    assert!(html.contains("Schedule Discovery Call"));
    assert!(html.contains("Does this resonate?"));
}

#[tokio::test]
async fn test_contact_page_renders_an_empty_form() {
    let app = create_test_app(test_config("http://127.0.0.1:9"));

    let response = app.oneshot(get("/contact")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains("Start a conversation."));
    assert!(html.contains(r#"name="honeypot""#));
    assert!(html.contains(r#"<option value="1000+">1,000+ employees</option>"#));
    assert!(html.contains("0/1000"));
    assert!(html.contains("nav-link nav-link-active"));
    assert!(html.contains("mailto:hello@kairosperformance.ai"));
    assert!(!html.contains(r#"role="alert""#));
}

#[tokio::test]
async fn test_contact_form_post_shows_errors_and_keeps_input() {
    let server = forms_api(200, 0).await;
    let app = create_test_app(test_config(server.uri()));

    let mut submission = valid_submission();
    submission.email = "not-an-email".to_owned();

    let response = app.oneshot(post_form(&submission)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains("Please enter a valid email address."));
    assert!(html.contains(r#"value="Acme Corp""#));
    assert!(html.contains(r#"value="not-an-email""#));
    assert!(html.contains(r#"<option value="25-50" selected>"#));
    assert!(!html.contains("Message received."));
}

#[tokio::test]
async fn test_contact_form_post_success() {
    let server = forms_api(200, 1).await;
    let app = create_test_app(test_config(server.uri()));

    let response = app.oneshot(post_form(&valid_submission())).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains("Message received."));
    assert!(!html.contains("<form"));
}

#[tokio::test]
async fn test_contact_form_post_failure_keeps_input() {
    let server = forms_api(503, 1).await;
    let app = create_test_app(test_config(server.uri()));

    let response = app.oneshot(post_form(&valid_submission())).await.unwrap();

    let html = body_string(response).await;
    assert!(html.contains("Something went wrong. Please try again or reach out directly."));
    assert!(html.contains(r#"value="Acme Corp""#));
    assert!(!html.contains("Message received."));
}

#[tokio::test]
async fn test_contact_form_honeypot_sends_nothing() {
    let server = forms_api(200, 0).await;
    let app = create_test_app(test_config(server.uri()));

    let mut submission = valid_submission();
    submission.honeypot = Some("http://spam.example".to_owned());

    let response = app.oneshot(post_form(&submission)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(!html.contains("Message received."));
    assert!(!html.contains(r#"role="alert""#));
    assert!(!html.contains("spam.example"));
}

#[tokio::test]
async fn test_unknown_page_is_not_found() {
    let app = create_test_app(test_config("http://127.0.0.1:9"));

    let response = app.oneshot(get("/pricing")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_string(response).await.contains("Page not found."));
}

#[tokio::test]
async fn test_security_headers_on_every_response() {
    let app = create_test_app(test_config("http://127.0.0.1:9"));

    for uri in ["/", "/contact", "/pricing", "/static/css/site.css", "/health"] {
        let response = app.clone().oneshot(get(uri)).await.unwrap();
        let headers = response.headers();

        assert_eq!(
            headers[header::STRICT_TRANSPORT_SECURITY],
            "max-age=31536000; includeSubDomains",
            "{uri}"
        );
        assert_eq!(headers[header::X_FRAME_OPTIONS], "SAMEORIGIN", "{uri}");
        assert_eq!(headers[header::X_CONTENT_TYPE_OPTIONS], "nosniff", "{uri}");
        assert_eq!(
            headers[header::REFERRER_POLICY],
            "strict-origin-when-cross-origin",
            "{uri}"
        );
        assert_eq!(
            headers["permissions-policy"],
            "camera=(), microphone=(), geolocation=()",
            "{uri}"
        );
    }
}

#[tokio::test]
async fn test_static_assets_are_cached_and_pages_are_not() {
    let app = create_test_app(test_config("http://127.0.0.1:9"));

    let response = app
        .clone()
        .oneshot(get("/static/css/site.css"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "text/css");
    assert_eq!(
        response.headers()[header::CACHE_CONTROL],
        "public, max-age=31536000, immutable"
    );

    let response = app.oneshot(get("/contact")).await.unwrap();
    assert_eq!(
        response.headers()[header::CACHE_CONTROL],
        "no-store, no-cache, must-revalidate, proxy-revalidate"
    );
    assert_eq!(response.headers()[header::PRAGMA], "no-cache");
}

#[tokio::test]
async fn test_html_is_compressed_when_accepted() {
    let app = create_test_app(test_config("http://127.0.0.1:9"));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/")
                .header(header::ACCEPT_ENCODING, "gzip")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.headers()[header::CONTENT_ENCODING], "gzip");
}

#[tokio::test]
async fn test_health_and_readiness() {
    let app = create_test_app(test_config("http://127.0.0.1:9"));

    let response = app.clone().oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"status": "ok"}));

    let response = app.oneshot(get("/ready")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"status": "ready"}));

    let app = create_test_app(common::unconfigured("http://127.0.0.1:9"));
    let response = app.oneshot(get("/ready")).await.unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(
        body_json(response).await,
        json!({"status": "not_ready", "reason": "forms_api_unconfigured"})
    );
}
