use serde_json::{Value, json};

use crate::helpers::{TestApp, error_message, get_random_email};

#[tokio::test]
async fn should_return_201_with_user_id() {
    let app = TestApp::spawn().await;

    let response = app
        .post_register(&json!({ "email": get_random_email(), "password": "pw" }))
        .await;

    assert_eq!(response.status().as_u16(), 201);
    let body: Value = response.json().await.unwrap();
    let user_id = body["user_id"].as_str().unwrap();
    let parsed = uuid::Uuid::parse_str(user_id).unwrap();
    assert!(!parsed.is_nil());
}

#[tokio::test]
async fn should_return_409_if_email_already_registered() {
    let app = TestApp::spawn().await;
    let (email, _, _) = app.register_random_user().await;

    let response = app
        .post_register(&json!({ "email": email, "password": "another-password" }))
        .await;

    assert_eq!(response.status().as_u16(), 409);
    assert_eq!(error_message(response).await, "user already exists");
}

#[tokio::test]
async fn should_return_400_for_missing_fields() {
    let app = TestApp::spawn().await;

    let cases = [
        (json!({ "password": "pw" }), "email is required"),
        (json!({ "email": "", "password": "pw" }), "email is required"),
        (json!({ "email": "   ", "password": "pw" }), "email is required"),
        (json!({ "email": "a@x.com" }), "password is required"),
        (json!({ "email": "a@x.com", "password": "" }), "password is required"),
    ];

    for (body, expected) in cases {
        let response = app.post_register(&body).await;
        assert_eq!(
            response.status().as_u16(),
            400,
            "Failed for input: {:?}",
            body
        );
        assert_eq!(error_message(response).await, expected);
    }
}

#[tokio::test]
async fn should_return_422_if_malformed_input() {
    let app = TestApp::spawn().await;

    let response = app
        .post_register(&json!({ "email": 12, "password": true }))
        .await;

    assert_eq!(response.status().as_u16(), 422);
}
