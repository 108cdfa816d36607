use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordVerifier, Version,
    password_hash::{self, PasswordHasher, SaltString, rand_core},
};
use async_trait::async_trait;
use secrecy::{ExposeSecret, Secret};
use sso_core::{CredentialHasher, HashedPassword, HasherError, Password};
use tokio::task::JoinError;

// Argon2id work factor: 15 MiB, 2 passes, 1 lane.
const MEMORY_COST_KIB: u32 = 15000;
const TIME_COST: u32 = 2;
const PARALLELISM: u32 = 1;

/// Argon2id password hasher producing PHC strings.
///
/// Both operations run on the blocking pool so the async workers stay free.
/// Verification reads algorithm, parameters and salt back out of the stored
/// string and compares digests in constant time.
#[derive(Debug, Clone, Default)]
pub struct Argon2Hasher;

#[async_trait]
impl CredentialHasher for Argon2Hasher {
    #[tracing::instrument(name = "Computing password hash", skip_all)]
    async fn hash(&self, password: Password) -> Result<HashedPassword, HasherError> {
        let current_span: tracing::Span = tracing::Span::current();

        tokio::task::spawn_blocking(move || {
            current_span.in_scope(|| compute_password_hash(&password))
        })
        .await
        .map_err(join_error)?
    }

    #[tracing::instrument(name = "Verify password hash", skip_all)]
    async fn verify(
        &self,
        password_hash: &HashedPassword,
        candidate: &Password,
    ) -> Result<bool, HasherError> {
        let current_span: tracing::Span = tracing::Span::current();
        let expected = password_hash.as_ref().clone();
        let candidate = candidate.clone();

        tokio::task::spawn_blocking(move || {
            current_span.in_scope(|| verify_password_hash(&expected, &candidate))
        })
        .await
        .map_err(join_error)?
    }

    fn decoy_hash(&self) -> HashedPassword {
        HashedPassword::from(format!(
            "$argon2id$v=19$m={MEMORY_COST_KIB},t={TIME_COST},p={PARALLELISM}${DECOY_SALT}${DECOY_DIGEST}"
        ))
    }
}

// Fixed salt and an all-zero digest; never produced by `hash`.
const DECOY_SALT: &str = "c29tZXNhbHRzb21lc2FsdA";
const DECOY_DIGEST: &str = "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";

fn argon2() -> Result<Argon2<'static>, HasherError> {
    let params = Params::new(MEMORY_COST_KIB, TIME_COST, PARALLELISM, None)
        .map_err(|e| HasherError::UnexpectedError(e.to_string()))?;
    Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
}

fn compute_password_hash(password: &Password) -> Result<HashedPassword, HasherError> {
    let salt = SaltString::generate(rand_core::OsRng);
    argon2()?
        .hash_password(password.as_ref().expose_secret().as_bytes(), &salt)
        .map(|hash| HashedPassword::new(Secret::from(hash.to_string())))
        .map_err(|e| HasherError::UnexpectedError(e.to_string()))
}

fn verify_password_hash(
    expected: &Secret<String>,
    candidate: &Password,
) -> Result<bool, HasherError> {
    let expected = PasswordHash::new(expected.expose_secret())
        .map_err(|e| HasherError::MalformedHash(e.to_string()))?;

    match argon2()?.verify_password(candidate.as_ref().expose_secret().as_bytes(), &expected) {
        Ok(()) => Ok(true),
        Err(password_hash::Error::Password) => Ok(false),
        Err(e) => Err(HasherError::UnexpectedError(e.to_string())),
    }
}

fn join_error(error: JoinError) -> HasherError {
    if error.is_cancelled() {
        HasherError::Cancelled
    } else {
        HasherError::UnexpectedError(error.to_string())
    }
}
