use sqlx::{PgPool, postgres::PgPoolOptions};
use sso_adapters::PostgresAppRegistry;
use sso_core::App;

/// Create a PostgreSQL connection pool
pub async fn get_postgres_pool(url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new().max_connections(5).connect(url).await
}

/// Write the configured apps into the Postgres registry, replacing any
/// existing secret for the same id.
pub async fn seed_apps(registry: &PostgresAppRegistry, apps: &[App]) -> Result<(), sqlx::Error> {
    for app in apps {
        registry.upsert_app(app).await?;
        tracing::info!(app_id = %app.id, "seeded app");
    }
    Ok(())
}
