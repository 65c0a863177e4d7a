use crate::helpers::{spawn_app, spawn_app_without_mailer, TEST_API_KEY, TEST_DELIVERY_EMAIL};
use wiremock::matchers::{any, method, path};
use wiremock::{Mock, ResponseTemplate};

fn valid_body() -> serde_json::Value {
    serde_json::json!({
        "apiKey": TEST_API_KEY,
        "name": "Jane",
        "phone": "555-1234",
        "message": "Hello",
    })
}

async fn error_message(response: reqwest::Response) -> String {
    let body: serde_json::Value = response.json().await.unwrap();
    body["error"].as_str().unwrap().to_owned()
}

#[tokio::test]
async fn submit_returns_401_when_the_api_key_is_missing() {
    // Arrange
    let app = spawn_app().await;
    let test_cases = vec![
        (
            serde_json::json!({
                "name": "Jane",
                "phone": "555-1234",
                "message": "Hello",
            }),
            "absent apiKey",
        ),
        (
            serde_json::json!({
                "apiKey": "",
                "name": "Jane",
                "phone": "555-1234",
                "message": "Hello",
            }),
            "empty apiKey",
        ),
    ];

    for (body, description) in test_cases {
        // Act
        let response = app.post_submit(body).await;

        // Assert
        assert_eq!(
            401,
            response.status().as_u16(),
            "The API did not return 401 for a payload with {}.",
            description
        );
        let message = error_message(response).await;
        assert!(message.contains("API key"));
    }

    assert!(app.email_requests().await.is_empty());
}

#[tokio::test]
async fn submit_returns_403_for_an_unknown_api_key() {
    // Arrange
    let app = spawn_app().await;
    let mut body = valid_body();
    body["apiKey"] = serde_json::json!("not-a-configured-key");

    // Act
    let response = app.post_submit(body).await;

    // Assert
    assert_eq!(403, response.status().as_u16());
    let message = error_message(response).await;
    assert!(message.contains("Invalid API key"));
    assert!(app.email_requests().await.is_empty());
}

#[tokio::test]
async fn submit_returns_400_when_a_required_field_is_missing() {
    // Arrange
    let app = spawn_app().await;
    let test_cases = vec![
        ("name", "missing name"),
        ("phone", "missing phone"),
        ("message", "missing message"),
    ];

    for (field, description) in test_cases {
        let mut body = valid_body();
        body.as_object_mut().unwrap().remove(field);

        // Act
        let response = app.post_submit(body).await;

        // Assert
        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not return 400 for a payload with {}.",
            description
        );
    }

    for (field, description) in [
        ("name", "empty name"),
        ("phone", "empty phone"),
        ("message", "empty message"),
    ] {
        let mut body = valid_body();
        body[field] = serde_json::json!("");

        // Act
        let response = app.post_submit(body).await;

        // Assert
        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not return 400 for a payload with {}.",
            description
        );
        let message = error_message(response).await;
        assert!(message.contains("required"));
    }

    assert!(app.email_requests().await.is_empty());
}

#[tokio::test]
async fn submit_returns_500_when_the_mailer_is_not_configured() {
    // Arrange
    let app = spawn_app_without_mailer().await;

    // Act
    let response = app.post_submit(valid_body()).await;

    // Assert
    assert_eq!(500, response.status().as_u16());
    let message = error_message(response).await;
    assert!(message
        .to_lowercase()
        .contains("email service is not configured"));
    assert!(app.email_requests().await.is_empty());
}

#[tokio::test]
async fn submit_relays_a_valid_submission() {
    // Arrange
    let app = spawn_app().await;
    Mock::given(path("/email"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.email_server)
        .await;

    // Act
    let response = app.post_submit(valid_body()).await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "ok": true }));

    let requests = app.email_requests().await;
    assert_eq!(requests.len(), 1);
    let email: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(email["To"].as_str().unwrap(), TEST_DELIVERY_EMAIL);
    let text_body = email["TextBody"].as_str().unwrap();
    assert!(text_body.contains("Jane"));
    assert!(text_body.contains("555-1234"));
    assert!(text_body.contains("Hello"));
    assert!(text_body.contains("Not provided"));
}

#[tokio::test]
async fn submit_includes_the_sender_email_when_provided() {
    // Arrange
    let app = spawn_app().await;
    Mock::given(path("/email"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.email_server)
        .await;
    let mut body = valid_body();
    body["email"] = serde_json::json!("jane@example.test");

    // Act
    let response = app.post_submit(body).await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let requests = app.email_requests().await;
    let email: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    let text_body = email["TextBody"].as_str().unwrap();
    assert!(text_body.contains("jane@example.test"));
    assert!(!text_body.contains("Not provided"));
}

#[tokio::test]
async fn submit_renders_message_newlines_as_html_line_breaks() {
    // Arrange
    let app = spawn_app().await;
    Mock::given(path("/email"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.email_server)
        .await;
    let mut body = valid_body();
    body["message"] = serde_json::json!("Hello\nWorld");

    // Act
    app.post_submit(body).await;

    // Assert
    let requests = app.email_requests().await;
    let email: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert!(email["HtmlBody"].as_str().unwrap().contains("Hello<br>World"));
    assert!(email["TextBody"].as_str().unwrap().contains("Hello\nWorld"));
}

#[tokio::test]
async fn two_identical_submissions_trigger_two_deliveries() {
    // Arrange
    let app = spawn_app().await;
    Mock::given(path("/email"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&app.email_server)
        .await;

    // Act
    let first = app.post_submit(valid_body()).await;
    let second = app.post_submit(valid_body()).await;

    // Assert
    assert_eq!(200, first.status().as_u16());
    assert_eq!(200, second.status().as_u16());
    assert_eq!(app.email_requests().await.len(), 2);
}

#[tokio::test]
async fn submit_returns_500_when_the_transport_rejects_the_delivery() {
    // Arrange
    let app = spawn_app().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.email_server)
        .await;

    // Act
    let response = app.post_submit(valid_body()).await;

    // Assert
    assert_eq!(500, response.status().as_u16());
    let message = error_message(response).await;
    assert!(message.to_lowercase().contains("failed to send email"));
}
