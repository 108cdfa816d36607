mod auth_service;
mod helpers;
pub mod telemetry;

pub use auth_service::AuthService;
pub use helpers::{get_postgres_pool, seed_apps};
