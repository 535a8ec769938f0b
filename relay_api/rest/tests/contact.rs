use axum::http::StatusCode;
use common::{make_panicking_router, make_router, post_json, send, FakeEmailService};
use pretty_assertions::assert_eq;
use relay_email_contracts::EmailBody;
use serde_json::json;

mod common;

fn body() -> serde_json::Value {
    json!({
        "name": "Jo",
        "email": "jo@example.com",
        "phone": "555-123-4567",
        "message": "Hello, this is a test message.",
    })
}

#[tokio::test]
async fn ok() {
    // Arrange
    let email = FakeEmailService::default();
    let router = make_router(email.clone(), true);

    // Act
    let (response, json) = send(router, post_json("/api/contact", body().to_string())).await;

    // Assert
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(
        json["message"],
        "Thank you for your message. We'll get back to you soon!"
    );
    assert_eq!(
        response.headers()["x-request-id"].to_str().unwrap(),
        json["requestId"].as_str().unwrap()
    );

    let sent = email.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].subject, "New Contact Form Submission from Jo");
    assert_eq!(
        sent[0].reply_to.as_ref().unwrap().to_string(),
        "jo@example.com"
    );
    let EmailBody::Alternative { text, html } = &sent[0].body else {
        panic!("expected an alternative body");
    };
    assert!(text.starts_with("Name: Jo\nEmail: jo@example.com\nPhone: 555-123-4567\n"));
    assert!(html.contains("Example Inc."));
}

#[tokio::test]
async fn request_ids_differ() {
    // Arrange
    let email = FakeEmailService::default();

    // Act
    let (_, first) = send(
        make_router(email.clone(), true),
        post_json("/api/contact", body().to_string()),
    )
    .await;
    let (_, second) = send(
        make_router(email, true),
        post_json("/api/contact", body().to_string()),
    )
    .await;

    // Assert
    assert_ne!(first["requestId"], second["requestId"]);
}

#[tokio::test]
async fn markup_is_stripped() {
    // Arrange
    let email = FakeEmailService::default();
    let router = make_router(email.clone(), true);
    let body = json!({
        "name": "<b>Jo</b>",
        "email": "jo@example.com",
        "message": "<script>alert(1)</script>Hello, this is a test message.",
    });

    // Act
    let (response, _) = send(router, post_json("/api/contact", body.to_string())).await;

    // Assert
    assert_eq!(response.status(), StatusCode::OK);
    let sent = email.sent();
    assert_eq!(sent[0].subject, "New Contact Form Submission from Jo");
    let EmailBody::Alternative { text, html } = &sent[0].body else {
        panic!("expected an alternative body");
    };
    assert_eq!(
        text,
        "Name: Jo\nEmail: jo@example.com\nPhone: Not provided\nMessage: Hello, this is a test message."
    );
    assert!(!html.contains("<script>"));
    assert!(!html.contains("alert(1)"));
}

#[tokio::test]
async fn validation_failed() {
    // Arrange
    let email = FakeEmailService::default();
    let router = make_router(email.clone(), true);
    let mut body = body();
    body["name"] = "J".into();

    // Act
    let (response, json) = send(router, post_json("/api/contact", body.to_string())).await;

    // Assert
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json,
        json!({
            "success": false,
            "message": "Validation failed",
            "errors": [
                {"field": "name", "reason": "Name must be between 2 and 50 characters"},
            ],
        })
    );
    assert_eq!(email.attempts(), 0);
}

#[tokio::test]
async fn message_too_short() {
    // Arrange
    let email = FakeEmailService::default();
    let router = make_router(email.clone(), true);
    let mut body = body();
    body["message"] = "short".into();

    // Act
    let (response, json) = send(router, post_json("/api/contact", body.to_string())).await;

    // Assert
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json["success"], false);
    assert_eq!(
        json["errors"],
        json!([{"field": "message", "reason": "Message must be between 10 and 1000 characters"}])
    );
    assert_eq!(email.attempts(), 0);
}

#[tokio::test]
async fn message_too_short_without_markup() {
    // Arrange
    let email = FakeEmailService::default();
    let router = make_router(email.clone(), true);
    let mut body = body();
    body["message"] = "<b>hi</b> <i>there</i>".into();

    // Act
    let (response, json) = send(router, post_json("/api/contact", body.to_string())).await;

    // Assert
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json["errors"],
        json!([{"field": "message", "reason": "Message must be between 10 and 1000 characters"}])
    );
    assert_eq!(email.attempts(), 0);
}

#[tokio::test]
async fn comparison_operators_are_kept() {
    // Arrange
    let email = FakeEmailService::default();
    let router = make_router(email.clone(), true);
    let mut body = body();
    body["message"] = "Budget: 1 < 2 thousand and > 500 euros please".into();

    // Act
    let (response, _) = send(router, post_json("/api/contact", body.to_string())).await;

    // Assert
    assert_eq!(response.status(), StatusCode::OK);
    let sent = email.sent();
    let EmailBody::Alternative { text, html } = &sent[0].body else {
        panic!("expected an alternative body");
    };
    assert!(text.ends_with("\nMessage: Budget: 1 < 2 thousand and > 500 euros please"));
    assert!(html.contains("Budget: 1 &lt; 2 thousand and &gt; 500 euros please"));
}

#[tokio::test]
async fn missing_fields() {
    // Arrange
    let router = make_router(FakeEmailService::default(), true);

    // Act
    let (response, json) = send(router, post_json("/api/contact", "{}")).await;

    // Assert
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let fields = json["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["field"].as_str().unwrap())
        .collect::<Vec<_>>();
    assert_eq!(fields, ["name", "email", "message"]);
}

#[tokio::test]
async fn invalid_email() {
    // Arrange
    let router = make_router(FakeEmailService::default(), true);
    let mut body = body();
    body["email"] = "not-an-email".into();

    // Act
    let (response, json) = send(router, post_json("/api/contact", body.to_string())).await;

    // Assert
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json["errors"],
        json!([{"field": "email", "reason": "Please provide a valid email address"}])
    );
}

#[tokio::test]
async fn malformed_body() {
    // Arrange
    let router = make_router(FakeEmailService::default(), true);

    // Act
    let (response, json) = send(router, post_json("/api/contact", "{\"name\": ")).await;

    // Assert
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Validation failed");
    assert_eq!(json["errors"][0]["field"], "body");
    assert!(!json["errors"][0]["reason"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn retry_then_ok() {
    // Arrange
    let email = FakeEmailService::failing(2);
    let router = make_router(email.clone(), true);

    // Act
    let (response, json) = send(router, post_json("/api/contact", body().to_string())).await;

    // Assert
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(email.attempts(), 3);
    assert_eq!(email.sent().len(), 1);
}

#[tokio::test]
async fn delivery_failed() {
    // Arrange
    let email = FakeEmailService::failing(u32::MAX);
    let router = make_router(email.clone(), true);

    // Act
    let (response, json) = send(router, post_json("/api/contact", body().to_string())).await;

    // Assert
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["success"], false);
    assert_eq!(
        json["message"],
        "Sorry, we could not send your message. Please try again later."
    );
    assert!(json["errorId"].is_string());
    assert!(json.get("error").is_none());
    assert_eq!(email.attempts(), 3);
}

#[tokio::test]
async fn delivery_failed_development() {
    // Arrange
    let router = make_router(FakeEmailService::failing(u32::MAX), false);

    // Act
    let (response, json) = send(router, post_json("/api/contact", body().to_string())).await;

    // Assert
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(json["errorId"].is_string());
    assert!(json["error"]
        .as_str()
        .unwrap()
        .contains("connection refused"));
}

#[tokio::test]
async fn handler_panicked() {
    // Arrange
    let router = make_panicking_router();

    // Act
    let (response, json) = send(router, post_json("/api/contact", body().to_string())).await;

    // Assert
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["success"], false);
    assert_eq!(
        json["message"],
        "Sorry, we could not send your message. Please try again later."
    );
    assert!(json["errorId"].is_string());
    assert!(response.headers().contains_key("x-request-id"));
}
