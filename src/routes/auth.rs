// SPDX-License-Identifier: MIT

//! Session issuance and logout routes.

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use std::sync::Arc;

use crate::error::Result;
use crate::middleware::auth::{create_jwt, TOKEN_COOKIE};
use crate::routes::SuccessResponse;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/jwt", post(issue_token))
        .route("/logout", get(logout))
}

/// Identity payload presented at sign-in.
#[derive(Deserialize)]
pub struct IdentityPayload {
    email: String,
    #[serde(default)]
    name: Option<String>,
}

/// Build the session cookie.
///
/// Production gets `Secure; SameSite=None` so the cookie survives the
/// cross-site frontend; everything else stays strict.
fn session_cookie(token: String, production: bool) -> Cookie<'static> {
    Cookie::build((TOKEN_COOKIE, token))
        .path("/")
        .http_only(true)
        .secure(production)
        .same_site(if production {
            SameSite::None
        } else {
            SameSite::Strict
        })
        .max_age(time::Duration::days(365))
        .build()
}

/// Issue a session token for the supplied identity and set it as a cookie.
async fn issue_token(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Json(payload): Json<IdentityPayload>,
) -> Result<(CookieJar, Json<SuccessResponse>)> {
    let token = create_jwt(
        &payload.email,
        payload.name.as_deref(),
        &state.config.jwt_signing_key,
    )?;

    tracing::debug!(email = %payload.email, "Issued session token");

    let jar = jar.add(session_cookie(token, state.config.production));
    Ok((jar, Json(SuccessResponse { success: true })))
}

/// Clear the session cookie.
async fn logout(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
) -> (CookieJar, Json<SuccessResponse>) {
    let removal = Cookie::build((TOKEN_COOKIE, ""))
        .path("/")
        .http_only(true)
        .secure(state.config.production)
        .same_site(if state.config.production {
            SameSite::None
        } else {
            SameSite::Strict
        })
        .build();

    (jar.remove(removal), Json(SuccessResponse { success: true }))
}
