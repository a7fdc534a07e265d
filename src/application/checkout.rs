use crate::domain::order::Order;
use crate::domain::ports::{NotificationService, PaymentProcessor};
use tracing::{error, info};

/// Coordinates the checkout of a single order.
///
/// `CheckoutService` borrows one payment strategy and one notification
/// strategy for its whole lifetime. Swapping either strategy never requires a
/// change here.
pub struct CheckoutService<'a> {
    payment_processor: &'a dyn PaymentProcessor,
    notifier: &'a dyn NotificationService,
}

impl<'a> CheckoutService<'a> {
    /// Creates a new `CheckoutService`.
    ///
    /// # Arguments
    ///
    /// * `payment_processor` - The strategy used to charge the order.
    /// * `notifier` - The strategy used to confirm a paid order.
    pub fn new(
        payment_processor: &'a dyn PaymentProcessor,
        notifier: &'a dyn NotificationService,
    ) -> Self {
        Self {
            payment_processor,
            notifier,
        }
    }

    /// Runs checkout for `order`.
    ///
    /// On a successful payment the order is marked paid and the customer is
    /// notified exactly once. A declined payment is logged and leaves the
    /// order pending. Returns whether the checkout succeeded.
    pub fn run(&self, order: &mut Order) -> bool {
        info!(
            target: "checkout",
            customer = %order.customer,
            total = %order.total,
            "Starting checkout"
        );

        if !self.payment_processor.process(order) {
            error!(
                target: "checkout",
                customer = %order.customer,
                status = %order.status(),
                "Payment failed, checkout aborted"
            );
            return false;
        }

        order.mark_paid();
        self.notifier.send(order);
        info!(
            target: "checkout",
            customer = %order.customer,
            status = %order.status(),
            "Checkout succeeded"
        );
        true
    }
}
