pub mod argon2_hasher;
pub mod jwt_issuer;

pub use argon2_hasher::Argon2Hasher;
pub use jwt_issuer::{Claims, JwtTokenIssuer, TokenValidationError, verify_session_token};
