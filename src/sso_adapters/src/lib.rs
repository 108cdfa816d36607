pub mod authentication;
pub mod config;
pub mod persistence;

pub use authentication::{Argon2Hasher, Claims, JwtTokenIssuer, TokenValidationError};
pub use persistence::{
    HashMapAppRegistry, HashMapUserStore, MIGRATOR, PostgresAppRegistry, PostgresUserStore,
};
