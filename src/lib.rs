// SPDX-License-Identifier: MIT

//! GymWave: backend API for a gym-management web application.
//!
//! Exposes REST endpoints over a document store for users, classes,
//! trainers, reviews, articles, bookings, payments and subscribers, with
//! cookie-based JWT authentication and role-gated access.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use config::Config;
use db::GymDb;
use services::PaymentClient;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: GymDb,
    pub payments: PaymentClient,
}
