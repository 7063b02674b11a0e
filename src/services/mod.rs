// SPDX-License-Identifier: MIT

//! Services module - external collaborators.

pub mod payments;

pub use payments::PaymentClient;
