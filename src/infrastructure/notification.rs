use crate::domain::order::Order;
use crate::domain::ports::NotificationService;
use tracing::info;

/// Sends the customer an email confirming their order.
///
/// Delivery is simulated by a log line.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmailNotifier;

impl EmailNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl NotificationService for EmailNotifier {
    fn send(&self, order: &Order) {
        info!(
            target: "checkout",
            customer = %order.customer,
            status = %order.status(),
            "Sending confirmation email"
        );
    }
}
