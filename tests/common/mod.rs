#![allow(dead_code)]

use checkout::domain::order::{Order, OrderStatus};
use checkout::domain::ports::{NotificationService, PaymentProcessor};
use std::cell::RefCell;

/// Records every order it is asked to notify about.
#[derive(Default)]
pub struct RecordingNotifier {
    sent: RefCell<Vec<(String, OrderStatus)>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<(String, OrderStatus)> {
        self.sent.borrow().clone()
    }
}

impl NotificationService for RecordingNotifier {
    fn send(&self, order: &Order) {
        self.sent
            .borrow_mut()
            .push((order.customer.clone(), order.status()));
    }
}

/// A processor whose every payment is declined.
pub struct DecliningProcessor;

impl PaymentProcessor for DecliningProcessor {
    fn process(&self, _order: &Order) -> bool {
        false
    }
}
