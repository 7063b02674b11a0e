// SPDX-License-Identifier: MIT

//! Session token issuance/verification and the JWT cookie middleware.

use crate::error::AppError;
use crate::AppState;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

/// Name of the session cookie.
pub const TOKEN_COOKIE: &str = "token";

/// Session token validity window.
const TOKEN_VALIDITY_SECS: usize = 365 * 24 * 60 * 60;

/// JWT claims structure.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (user email)
    pub sub: String,
    /// Display name, if supplied at sign-in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Expiration time (Unix timestamp)
    pub exp: usize,
    /// Issued at (Unix timestamp)
    pub iat: usize,
}

/// Authenticated identity extracted from the session cookie.
///
/// Attached to the request's extensions by `require_auth`; downstream
/// stages read it from there instead of sharing mutable state.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub email: String,
}

/// Create a JWT for a user session (valid for 365 days).
pub fn create_jwt(email: &str, name: Option<&str>, signing_key: &[u8]) -> anyhow::Result<String> {
    let now = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs() as usize;

    let claims = Claims {
        sub: email.to_string(),
        name: name.map(|n| n.to_string()),
        iat: now,
        exp: now + TOKEN_VALIDITY_SECS,
    };

    Ok(encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(signing_key),
    )?)
}

/// Verify a session token and return its claims.
///
/// Stateless: only the shared secret is consulted. A bad signature, a
/// malformed token and an expired token all map to the same failure.
pub fn verify_jwt(token: &str, signing_key: &[u8]) -> Result<Claims, AppError> {
    let key = DecodingKey::from_secret(signing_key);
    let validation = Validation::new(Algorithm::HS256);

    decode::<Claims>(token, &key, &validation)
        .map(|data| data.claims)
        .map_err(|_| AppError::AuthenticationFailed)
}

/// Middleware that requires a valid session cookie.
///
/// A missing cookie is a 403, a failed verification a 401; either way the
/// pipeline halts before any database access.
pub async fn require_auth(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = jar
        .get(TOKEN_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .ok_or(AppError::Unauthenticated)?;

    let claims = verify_jwt(&token, &state.config.jwt_signing_key)?;

    let auth_user = AuthUser { email: claims.sub };
    request.extensions_mut().insert(auth_user);

    Ok(next.run(request).await)
}
