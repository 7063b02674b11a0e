// SPDX-License-Identifier: MIT

//! Middleware modules (authentication, role gating, security headers).

pub mod auth;
pub mod roles;
pub mod security;

pub use auth::require_auth;
pub use roles::require_role;
