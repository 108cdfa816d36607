use color_eyre::eyre::Result;
use secrecy::ExposeSecret;
use tokio::net::TcpListener;

use sso_adapters::{
    Argon2Hasher, HashMapAppRegistry, HashMapUserStore, JwtTokenIssuer, MIGRATOR,
    PostgresAppRegistry, PostgresUserStore, config::Settings,
};
use sso_application::AuthEngine;
use sso_core::{AppRegistry, UserStore};
use sso_service::{AuthService, get_postgres_pool, seed_apps, telemetry::init_tracing};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let settings = Settings::load()?;
    let listener = TcpListener::bind(&settings.application.address).await?;

    match &settings.postgres {
        Some(postgres) => {
            let pool = get_postgres_pool(postgres.url.expose_secret()).await?;
            MIGRATOR.run(&pool).await?;

            let app_registry = PostgresAppRegistry::new(pool.clone());
            seed_apps(&app_registry, &settings.apps).await?;

            serve(
                &settings,
                listener,
                PostgresUserStore::new(pool),
                app_registry,
            )
            .await
        }
        None => {
            tracing::warn!("No postgres url configured, users will not survive a restart");
            let app_registry = HashMapAppRegistry::with_apps(settings.apps.clone());
            serve(&settings, listener, HashMapUserStore::new(), app_registry).await
        }
    }
}

async fn serve<U, A>(
    settings: &Settings,
    listener: TcpListener,
    user_store: U,
    app_registry: A,
) -> Result<()>
where
    U: UserStore + Clone + 'static,
    A: AppRegistry + Clone + 'static,
{
    let engine = AuthEngine::new(
        user_store,
        app_registry,
        Argon2Hasher,
        JwtTokenIssuer,
        settings.token_ttl()?,
    );

    AuthService::new(engine, settings.request_timeout())
        .run_standalone(listener)
        .await?;

    Ok(())
}
