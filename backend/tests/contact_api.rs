use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use lettre::Message;
use serde_json::{json, Value};
use tower::ServiceExt;

use backend::config::{AppConfig, MailConfig};
use backend::error::ContactError;
use backend::utils::mailer::{Mailer, SmtpMailer};
use backend::AppState;

#[derive(Default)]
struct RecordingMailer {
    sent: Mutex<Vec<String>>,
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, message: Message) -> Result<(), ContactError> {
        let raw = String::from_utf8_lossy(&message.formatted()).into_owned();
        self.sent.lock().unwrap().push(raw);
        Ok(())
    }
}

fn config(host: &str) -> AppConfig {
    AppConfig {
        mail: MailConfig {
            host: Some(host.to_string()),
            port: 1,
            username: Some("relay@agentflow-integrations.com".to_string()),
            password: Some("very-secret-password".to_string()),
            to: Some("info@agentflow-integrations.com".to_string()),
            timeout: Duration::from_secs(2),
        },
        bind_address: "127.0.0.1:0".to_string(),
        frontend_dir: None,
        sentry_dsn: None,
    }
}

fn router(mailer: Arc<dyn Mailer>, config: AppConfig) -> Router {
    backend::app(Arc::new(AppState { config, mailer }))
}

async fn post_contact(app: Router, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/api/contact")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn valid_submission_is_relayed_once() {
    let mailer = Arc::new(RecordingMailer::default());
    let app = router(mailer.clone(), config("smtp.example.com"));

    let (status, body) = post_contact(
        app,
        r#"{"name":"Max","email":"max@example.com","message":"Interesse an KI-Lösungen","bereich":"unternehmen"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "E-Mail erfolgreich gesendet" }));

    let sent = mailer.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert!(sent[0].contains("Subject: Neue Kontaktanfrage"));
    assert!(sent[0].contains("Reply-To: Max <max@example.com>"));
}

#[tokio::test]
async fn malformed_json_gets_the_generic_failure() {
    let mailer = Arc::new(RecordingMailer::default());
    let app = router(mailer.clone(), config("smtp.example.com"));

    let (status, body) = post_contact(app, "name=Max&email=max@example.com").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "message": "Fehler beim Senden der E-Mail" }));
    assert!(mailer.sent.lock().unwrap().is_empty());
}

#[tokio::test]
async fn wrong_field_types_get_the_generic_failure() {
    let mailer = Arc::new(RecordingMailer::default());
    let app = router(mailer.clone(), config("smtp.example.com"));

    let (status, body) = post_contact(app, r#"{"name":42,"email":[],"message":null}"#).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "message": "Fehler beim Senden der E-Mail" }));
    assert!(mailer.sent.lock().unwrap().is_empty());
}

#[tokio::test]
async fn unreachable_relay_gets_the_generic_failure_without_details() {
    let config = config("127.0.0.1");
    let app = router(Arc::new(SmtpMailer::new(config.mail.clone())), config);

    let (status, body) = post_contact(
        app,
        r#"{"name":"Max","email":"max@example.com","message":"Hallo"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "message": "Fehler beim Senden der E-Mail" }));
    let raw = body.to_string();
    assert!(!raw.contains("127.0.0.1"));
    assert!(!raw.contains("very-secret-password"));
    assert!(!raw.contains("relay@agentflow-integrations.com"));
}

#[tokio::test]
async fn missing_relay_config_fails_per_request() {
    let mut config = config("smtp.example.com");
    config.mail.to = None;
    let mailer = Arc::new(RecordingMailer::default());
    let app = router(mailer.clone(), config);

    let (status, _) = post_contact(
        app,
        r#"{"name":"Max","email":"max@example.com","message":"Hallo"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(mailer.sent.lock().unwrap().is_empty());
}

#[tokio::test]
async fn health_check_answers_ok() {
    let app = router(Arc::new(RecordingMailer::default()), config("smtp.example.com"));
    let request = Request::builder().uri("/api/health").body(Body::empty()).unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"OK");
}

#[tokio::test]
async fn oversized_body_gets_the_generic_failure() {
    let mailer = Arc::new(RecordingMailer::default());
    let app = router(mailer.clone(), config("smtp.example.com"));
    let body = json!({
        "name": "Max",
        "email": "max@example.com",
        "message": "a".repeat(3 * 1024 * 1024),
    })
    .to_string();

    let (status, body) = post_contact(app, &body).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "message": "Fehler beim Senden der E-Mail" }));
    assert!(mailer.sent.lock().unwrap().is_empty());
}

async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn client_side_routes_are_served_the_spa_entry_point() {
    let dist = tempfile::tempdir().unwrap();
    std::fs::write(dist.path().join("index.html"), "<html>AgentFlow</html>\n").unwrap();
    std::fs::write(dist.path().join("app.js"), "console.log(1);\n").unwrap();

    let mut config = config("smtp.example.com");
    config.frontend_dir = Some(dist.path().to_path_buf());
    let app = router(Arc::new(RecordingMailer::default()), config);

    for route in ["/impressum", "/datenschutz", "/"] {
        let (status, body) = get(app.clone(), route).await;
        assert_eq!(status, StatusCode::OK, "{}", route);
        assert_eq!(body, "<html>AgentFlow</html>\n", "{}", route);
    }

    let (status, body) = get(app.clone(), "/app.js").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "console.log(1);\n");

    let (status, body) = get(app, "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");
}
