use std::time::Duration;

use fake::{Fake, faker::internet::en::SafeEmail};
use reqwest::Response;
use secrecy::Secret;
use serde_json::{Value, json};
use tokio::net::TcpListener;

use sso_adapters::{
    Argon2Hasher, HashMapAppRegistry, HashMapUserStore, JwtTokenIssuer, config::constants::test,
};
use sso_application::AuthEngine;
use sso_core::{App, AppId};
use sso_service::AuthService;

pub const APP_ID: i32 = 42;
pub const OTHER_APP_ID: i32 = 7;
pub const TOKEN_TTL_IN_SECONDS: i64 = 3600;

pub struct TestApp {
    pub address: String,
    pub http_client: reqwest::Client,
    pub user_store: HashMapUserStore,
    pub app: App,
    pub other_app: App,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let user_store = HashMapUserStore::new();
        let app = App::new(
            AppId::new(APP_ID),
            "api-test",
            Secret::from(uuid::Uuid::new_v4().to_string()),
        );
        let other_app = App::new(
            AppId::new(OTHER_APP_ID),
            "api-test-other",
            Secret::from(uuid::Uuid::new_v4().to_string()),
        );

        let engine = AuthEngine::new(
            user_store.clone(),
            HashMapAppRegistry::with_apps([app.clone(), other_app.clone()]),
            Argon2Hasher,
            JwtTokenIssuer,
            chrono::Duration::seconds(TOKEN_TTL_IN_SECONDS),
        );

        let listener = TcpListener::bind(test::APP_ADDRESS)
            .await
            .expect("Failed to bind test listener");
        let address = format!("http://{}", listener.local_addr().unwrap());

        let service = AuthService::new(engine, Duration::from_secs(5));
        tokio::spawn(service.run_standalone(listener));

        Self {
            address,
            http_client: reqwest::Client::new(),
            user_store,
            app,
            other_app,
        }
    }

    pub async fn post_register(&self, body: &Value) -> Response {
        self.post("/register", body).await
    }

    pub async fn post_login(&self, body: &Value) -> Response {
        self.post("/login", body).await
    }

    pub async fn post_is_admin(&self, body: &Value) -> Response {
        self.post("/is-admin", body).await
    }

    /// Register a fresh user and return `(email, password, user_id)`.
    pub async fn register_random_user(&self) -> (String, String, String) {
        let email = get_random_email();
        let password = "correct horse battery staple".to_owned();

        let response = self
            .post_register(&json!({ "email": email, "password": password }))
            .await;
        assert_eq!(response.status().as_u16(), 201);

        let body: Value = response.json().await.unwrap();
        let user_id = body["user_id"].as_str().unwrap().to_owned();

        (email, password, user_id)
    }

    async fn post(&self, path: &str, body: &Value) -> Response {
        self.http_client
            .post(format!("{}{}", self.address, path))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }
}

pub fn get_random_email() -> String {
    SafeEmail().fake()
}

pub async fn error_message(response: Response) -> String {
    let body: Value = response.json().await.unwrap();
    body["error"].as_str().unwrap().to_owned()
}
