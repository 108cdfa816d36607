pub mod hashmap_app_registry;
pub mod hashmap_user_store;
pub mod postgres_app_registry;
pub mod postgres_user_store;

pub use hashmap_app_registry::HashMapAppRegistry;
pub use hashmap_user_store::HashMapUserStore;
pub use postgres_app_registry::PostgresAppRegistry;
pub use postgres_user_store::PostgresUserStore;

/// Schema for the Postgres-backed stores.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!();
