use secrecy::{ExposeSecret, Secret};
use sqlx::{PgPool, Row};

use sso_core::{App, AppId, AppRegistry, AppRegistryError};

#[derive(Clone)]
pub struct PostgresAppRegistry {
    pool: PgPool,
}

impl PostgresAppRegistry {
    pub fn new(pool: PgPool) -> Self {
        PostgresAppRegistry { pool }
    }

    /// Insert `app`, or overwrite name and secret if its id is taken.
    #[tracing::instrument(name = "Upserting app in PostgreSQL", skip_all, fields(app_id = %app.id))]
    pub async fn upsert_app(&self, app: &App) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
                INSERT INTO apps (id, name, secret)
                VALUES ($1, $2, $3)
                ON CONFLICT (id) DO UPDATE SET name = EXCLUDED.name, secret = EXCLUDED.secret
            "#,
        )
        .bind(app.id.as_i32())
        .bind(&app.name)
        .bind(app.secret.expose_secret())
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl AppRegistry for PostgresAppRegistry {
    #[tracing::instrument(name = "Retrieving app from PostgreSQL", skip_all, fields(app_id = %app_id))]
    async fn app(&self, app_id: AppId) -> Result<App, AppRegistryError> {
        let row = sqlx::query("SELECT id, name, secret FROM apps WHERE id = $1")
            .bind(app_id.as_i32())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppRegistryError::UnexpectedError(e.to_string()))?;

        let Some(row) = row else {
            return Err(AppRegistryError::AppNotFound);
        };

        let decode = |e: sqlx::Error| AppRegistryError::UnexpectedError(e.to_string());
        let id: i32 = row.try_get("id").map_err(decode)?;
        let name: String = row.try_get("name").map_err(decode)?;
        let secret: String = row.try_get("secret").map_err(decode)?;

        Ok(App::new(AppId::new(id), name, Secret::from(secret)))
    }
}
