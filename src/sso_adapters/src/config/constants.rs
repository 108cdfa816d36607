pub mod env {
    pub const APP_ENVIRONMENT_ENV_VAR: &str = "APP_ENVIRONMENT";
    pub const ENV_PREFIX: &str = "SSO";
    pub const ENV_SEPARATOR: &str = "__";
}

pub const CONFIG_DIR: &str = "config";
pub const DEFAULT_ENVIRONMENT: &str = "local";

pub mod prod {
    pub const APP_ADDRESS: &str = "0.0.0.0:3000";
    pub const REQUEST_TIMEOUT_IN_MILLIS: u64 = 5_000;
    pub const TOKEN_TTL_IN_SECONDS: i64 = 3_600;
}

pub mod limits {
    /// Ten years.
    pub const MAX_TOKEN_TTL_IN_SECONDS: i64 = 10 * 365 * 24 * 60 * 60;
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
}
