use std::path::Path;

use config::{Config, ConfigError, Environment, File};
use secrecy::Secret;
use serde::Deserialize;
use sso_core::App;

use super::constants::{CONFIG_DIR, DEFAULT_ENVIRONMENT, env, limits, prod};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub auth: AuthSettings,
    pub postgres: Option<PostgresSettings>,
    /// Apps seeded into the in-memory registry at startup.
    #[serde(default)]
    pub apps: Vec<App>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationSettings {
    pub address: String,
    pub request_timeout_in_millis: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthSettings {
    pub token_ttl_in_seconds: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostgresSettings {
    pub url: Secret<String>,
}

impl Settings {
    /// Load `.env`, then `config/base.*`, then `config/{APP_ENVIRONMENT}.*`,
    /// then `SSO__`-prefixed environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        let environment = std::env::var(env::APP_ENVIRONMENT_ENV_VAR)
            .unwrap_or_else(|_| DEFAULT_ENVIRONMENT.to_owned());
        Self::load_from(Path::new(CONFIG_DIR), &environment)
    }

    pub fn load_from(config_dir: &Path, environment: &str) -> Result<Self, ConfigError> {
        let settings: Settings = Config::builder()
            .set_default("application.address", prod::APP_ADDRESS)?
            .set_default(
                "application.request_timeout_in_millis",
                prod::REQUEST_TIMEOUT_IN_MILLIS,
            )?
            .set_default("auth.token_ttl_in_seconds", prod::TOKEN_TTL_IN_SECONDS)?
            .add_source(File::from(config_dir.join("base")).required(false))
            .add_source(File::from(config_dir.join(environment)).required(false))
            .add_source(
                Environment::with_prefix(env::ENV_PREFIX)
                    .prefix_separator(env::ENV_SEPARATOR)
                    .separator(env::ENV_SEPARATOR)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.token_ttl()?;
        if let Some(app) = self.apps.iter().find(|app| app.id.is_empty()) {
            return Err(ConfigError::Message(format!(
                "app '{}' has the reserved id 0",
                app.name
            )));
        }
        Ok(())
    }

    /// Token lifetime, between one second and
    /// [`limits::MAX_TOKEN_TTL_IN_SECONDS`].
    pub fn token_ttl(&self) -> Result<chrono::Duration, ConfigError> {
        let seconds = self.auth.token_ttl_in_seconds;
        let out_of_range = || {
            ConfigError::Message(format!(
                "auth.token_ttl_in_seconds must be between 1 and {}, got {seconds}",
                limits::MAX_TOKEN_TTL_IN_SECONDS
            ))
        };

        if !(1..=limits::MAX_TOKEN_TTL_IN_SECONDS).contains(&seconds) {
            return Err(out_of_range());
        }
        chrono::Duration::try_seconds(seconds).ok_or_else(out_of_range)
    }

    pub fn request_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.application.request_timeout_in_millis)
    }
}
