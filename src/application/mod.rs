//! Application layer containing the checkout orchestration.
//!
//! This module defines the `CheckoutService` which acts as the entry point for
//! checking out a single order. It only knows the capability traits from
//! `domain::ports`; concrete strategies are injected by the caller.

pub mod checkout;
