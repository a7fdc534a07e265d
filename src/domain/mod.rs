//! Domain layer: the order record and the capability traits the checkout
//! flow depends on.

pub mod order;
pub mod ports;
