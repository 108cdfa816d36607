use serde_json::{Value, json};

use sso_adapters::{TokenValidationError, authentication::verify_session_token};

use crate::helpers::{
    APP_ID, OTHER_APP_ID, TOKEN_TTL_IN_SECONDS, TestApp, error_message, get_random_email,
};

#[tokio::test]
async fn should_return_200_with_token_for_registered_user() {
    let app = TestApp::spawn().await;
    let (email, password, user_id) = app.register_random_user().await;

    let response = app
        .post_login(&json!({ "email": email, "password": password, "app_id": APP_ID }))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    let token = body["token"].as_str().unwrap();

    let claims = verify_session_token(token, &app.app, 0).unwrap();
    assert_eq!(claims.sub, user_id);
    assert_eq!(claims.email, email);
    assert_eq!(claims.app_id, APP_ID);
    assert_eq!(claims.aud, APP_ID.to_string());
    assert_eq!(claims.exp - claims.iat, TOKEN_TTL_IN_SECONDS);

    let now = chrono::Utc::now().timestamp();
    assert!((claims.iat - now).abs() <= 5);
}

#[tokio::test]
async fn should_not_verify_under_another_app() {
    let app = TestApp::spawn().await;
    let (email, password, _) = app.register_random_user().await;

    let response = app
        .post_login(&json!({ "email": email, "password": password, "app_id": OTHER_APP_ID }))
        .await;
    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    let token = body["token"].as_str().unwrap();

    assert!(verify_session_token(token, &app.other_app, 0).is_ok());
    assert!(matches!(
        verify_session_token(token, &app.app, 0),
        Err(TokenValidationError::InvalidSignature)
    ));
}

#[tokio::test]
async fn should_return_401_identically_for_unknown_email_and_wrong_password() {
    let app = TestApp::spawn().await;
    let (email, _, _) = app.register_random_user().await;

    let wrong_password = app
        .post_login(&json!({ "email": email, "password": "wrong", "app_id": APP_ID }))
        .await;
    let unknown_email = app
        .post_login(&json!({
            "email": get_random_email(),
            "password": "wrong",
            "app_id": APP_ID
        }))
        .await;

    assert_eq!(wrong_password.status().as_u16(), 401);
    assert_eq!(unknown_email.status().as_u16(), 401);

    let wrong_password: Value = wrong_password.json().await.unwrap();
    let unknown_email: Value = unknown_email.json().await.unwrap();
    assert_eq!(wrong_password, unknown_email);
    assert_eq!(wrong_password["error"], "invalid credentials");
}

#[tokio::test]
async fn should_return_400_for_unknown_app() {
    let app = TestApp::spawn().await;
    let (email, password, _) = app.register_random_user().await;

    let response = app
        .post_login(&json!({ "email": email, "password": password, "app_id": 99 }))
        .await;

    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(error_message(response).await, "invalid app id");
}

#[tokio::test]
async fn should_return_400_for_invalid_input() {
    let app = TestApp::spawn().await;

    let cases = [
        (
            json!({ "email": "", "password": "pw", "app_id": APP_ID }),
            "email is required",
        ),
        (
            json!({ "email": "a@x.com", "password": "", "app_id": APP_ID }),
            "password is required",
        ),
        (
            json!({ "email": "a@x.com", "password": "pw" }),
            "app_id is required",
        ),
        (
            json!({ "email": "a@x.com", "password": "pw", "app_id": 0 }),
            "app_id is required",
        ),
    ];

    for (body, expected) in cases {
        let response = app.post_login(&body).await;
        assert_eq!(
            response.status().as_u16(),
            400,
            "Failed for input: {:?}",
            body
        );
        assert_eq!(error_message(response).await, expected);
    }
}
