use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use sso_core::{App, SessionToken, TokenIssuer, TokenIssuerError, User};
use thiserror::Error;

/// Claims carried by a session token.
///
/// `aud` holds the app id as a string so standard JWT libraries can check
/// the audience; `app_id` repeats it as an integer for convenience.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub aud: String,
    pub app_id: i32,
    pub email: String,
    pub iat: i64,
    pub exp: i64,
}

/// HS256 JWT issuer keyed by each app's own secret.
#[derive(Debug, Clone, Default)]
pub struct JwtTokenIssuer;

impl JwtTokenIssuer {
    /// Issue a token as of `issued_at`. Pure in its inputs.
    pub fn issue_at(
        &self,
        user: &User,
        app: &App,
        ttl: Duration,
        issued_at: DateTime<Utc>,
    ) -> Result<SessionToken, TokenIssuerError> {
        if ttl <= Duration::zero() {
            return Err(TokenIssuerError::InvalidTtl);
        }

        let exp = issued_at
            .checked_add_signed(ttl)
            .ok_or(TokenIssuerError::InvalidTtl)?
            .timestamp();

        let claims = Claims {
            sub: user.id().to_string(),
            aud: app.id.to_string(),
            app_id: app.id.as_i32(),
            email: user.email().as_ref().expose_secret().clone(),
            iat: issued_at.timestamp(),
            exp,
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(app.secret.expose_secret().as_bytes()),
        )
        .map(SessionToken)
        .map_err(|e| TokenIssuerError::SigningError(e.to_string()))
    }
}

impl TokenIssuer for JwtTokenIssuer {
    fn issue(
        &self,
        user: &User,
        app: &App,
        ttl: Duration,
    ) -> Result<SessionToken, TokenIssuerError> {
        self.issue_at(user, app, ttl, Utc::now())
    }
}

#[derive(Debug, Error)]
pub enum TokenValidationError {
    #[error("Token has expired")]
    Expired,
    #[error("Token signature is invalid")]
    InvalidSignature,
    #[error("Token was issued for another app")]
    WrongAudience,
    #[error("Token error: {0}")]
    TokenError(jsonwebtoken::errors::Error),
}

/// Check a session token the way a relying party holding `app`'s secret
/// would: signature, audience and expiry with `leeway_seconds` of skew.
pub fn verify_session_token(
    token: &str,
    app: &App,
    leeway_seconds: u64,
) -> Result<Claims, TokenValidationError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = leeway_seconds;
    validation.set_audience(&[app.id.to_string()]);
    validation.set_required_spec_claims(&["exp", "sub", "aud"]);

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(app.secret.expose_secret().as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => TokenValidationError::Expired,
        ErrorKind::InvalidSignature => TokenValidationError::InvalidSignature,
        ErrorKind::InvalidAudience => TokenValidationError::WrongAudience,
        _ => TokenValidationError::TokenError(e),
    })
}
