// SPDX-License-Identifier: MIT

//! Data models for the application.

pub mod application;
pub mod catalog;
pub mod commerce;
pub mod community;
pub mod user;

pub use application::TrainerApplication;
pub use catalog::{GymClass, TrainerProfile};
pub use commerce::{Booking, Payment};
pub use community::{Article, Review, Subscriber};
pub use user::{Role, User, UserStatus};
