use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;
use tokio::net::TcpListener;

use sso_adapters::config::constants::test;
use sso_core::{AppId, AuthError, Authenticator, Email, Password, SessionToken, UserId};
use sso_service::AuthService;

use crate::helpers::error_message;

/// Sets the flag when dropped before completing.
struct DropFlag(Arc<AtomicBool>);

impl Drop for DropFlag {
    fn drop(&mut self) {
        self.0.store(true, Ordering::SeqCst);
    }
}

#[derive(Clone, Default)]
struct StalledAuthenticator {
    dropped: Arc<AtomicBool>,
}

#[async_trait]
impl Authenticator for StalledAuthenticator {
    async fn login(
        &self,
        _email: Email,
        _password: Password,
        _app_id: AppId,
    ) -> Result<SessionToken, AuthError> {
        let guard = DropFlag(self.dropped.clone());
        tokio::time::sleep(Duration::from_secs(30)).await;
        std::mem::forget(guard);
        Err(AuthError::Internal { op: "Auth.Login" })
    }

    async fn register_new_user(
        &self,
        _email: Email,
        _password: Password,
    ) -> Result<UserId, AuthError> {
        Ok(UserId::new())
    }

    async fn is_admin(&self, _user_id: UserId) -> Result<bool, AuthError> {
        Ok(false)
    }
}

#[tokio::test]
async fn should_return_408_and_abandon_work_when_request_times_out() {
    let auth = StalledAuthenticator::default();
    let dropped = auth.dropped.clone();

    let listener = TcpListener::bind(test::APP_ADDRESS).await.unwrap();
    let address = format!("http://{}", listener.local_addr().unwrap());
    tokio::spawn(AuthService::new(auth, Duration::from_millis(100)).run_standalone(listener));

    let response = reqwest::Client::new()
        .post(format!("{address}/login"))
        .json(&json!({ "email": "a@x.com", "password": "pw", "app_id": 1 }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 408);
    for _ in 0..50 {
        if dropped.load(Ordering::SeqCst) {
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    assert!(dropped.load(Ordering::SeqCst));

    // Fast operations are unaffected by the deadline.
    let response = reqwest::Client::new()
        .post(format!("{address}/is-admin"))
        .json(&json!({ "user_id": UserId::new().to_string() }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);

    let response = reqwest::Client::new()
        .post(format!("{address}/login"))
        .json(&json!({ "email": "", "password": "pw", "app_id": 1 }))
        .send()
        .await
        .unwrap();
    assert_eq!(error_message(response).await, "email is required");
}
