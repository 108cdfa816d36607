use serde_json::{Value, json};

use sso_core::UserId;

use crate::helpers::{TestApp, error_message};

#[tokio::test]
async fn should_return_false_for_new_user() {
    let app = TestApp::spawn().await;
    let (_, _, user_id) = app.register_random_user().await;

    let response = app.post_is_admin(&json!({ "user_id": user_id })).await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["is_admin"], false);
}

#[tokio::test]
async fn should_return_true_after_promotion() {
    let app = TestApp::spawn().await;
    let (_, _, user_id) = app.register_random_user().await;

    let parsed: UserId = user_id.parse().unwrap();
    app.user_store.set_admin(parsed, true).await.unwrap();

    let response = app.post_is_admin(&json!({ "user_id": user_id })).await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["is_admin"], true);
}

#[tokio::test]
async fn should_return_404_for_unknown_user() {
    let app = TestApp::spawn().await;

    let response = app
        .post_is_admin(&json!({ "user_id": UserId::new().to_string() }))
        .await;

    assert_eq!(response.status().as_u16(), 404);
    assert_eq!(error_message(response).await, "user not found");
}

#[tokio::test]
async fn should_return_400_for_invalid_user_id() {
    let app = TestApp::spawn().await;

    let cases = [
        (json!({}), "user_id is required"),
        (json!({ "user_id": "" }), "user_id is required"),
        (
            json!({ "user_id": uuid::Uuid::nil().to_string() }),
            "user_id is required",
        ),
        (json!({ "user_id": "not-a-uuid" }), "invalid user_id"),
    ];

    for (body, expected) in cases {
        let response = app.post_is_admin(&body).await;
        assert_eq!(
            response.status().as_u16(),
            400,
            "Failed for input: {:?}",
            body
        );
        assert_eq!(error_message(response).await, expected);
    }
}
