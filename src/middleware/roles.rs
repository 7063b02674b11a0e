// SPDX-License-Identifier: MIT

//! Role gate middleware, parameterized by the required role.

use crate::error::AppError;
use crate::middleware::auth::AuthUser;
use crate::models::Role;
use crate::AppState;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
    Extension,
};
use std::sync::Arc;

/// Middleware that requires the authenticated user to hold `role`.
///
/// Must run after `require_auth`. The user record is looked up on every
/// gated request, so a role change takes effect on the very next request
/// without re-issuing the session token.
///
/// Attach with the role baked into the middleware state:
///
/// ```ignore
/// router.route_layer(middleware::from_fn_with_state(
///     (state.clone(), Role::Admin),
///     require_role,
/// ))
/// ```
pub async fn require_role(
    State((state, role)): State<(Arc<AppState>, Role)>,
    Extension(user): Extension<AuthUser>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let record = state.db.get_user(&user.email).await?;

    match record {
        Some(record) if record.role == role => Ok(next.run(request).await),
        _ => {
            tracing::debug!(email = %user.email, required = ?role, "Role gate denied request");
            Err(AppError::Forbidden)
        }
    }
}
