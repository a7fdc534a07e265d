//! Concrete payment and notification strategies.

pub mod notification;
pub mod payment;
