//! Database layer (document store).

pub mod memory;
pub mod store;

pub use store::GymDb;

/// Collection names as constants.
pub mod collections {
    pub const USERS: &str = "users";
    pub const CLASSES: &str = "classes";
    pub const TRAINERS: &str = "trainers";
    pub const REVIEWS: &str = "reviews";
    pub const ARTICLES: &str = "articles";
    pub const SUBSCRIBERS: &str = "subscribers";
    /// Pending trainer applications (deleted on promotion)
    pub const APPLIED_TRAINERS: &str = "applied_trainers";
    pub const BOOKINGS: &str = "bookings";
    pub const PAYMENTS: &str = "payments";
}
