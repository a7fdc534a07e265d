use super::order::Order;

/// A payment strategy.
///
/// Implementations attempt to charge the order total and report whether the
/// payment went through. They never change the order status; that is left to
/// the checkout service.
pub trait PaymentProcessor {
    /// Returns `true` when the payment succeeded.
    fn process(&self, order: &Order) -> bool;
}

/// A notification strategy used to tell the customer their order was paid.
///
/// Delivery is fire-and-forget: failures are not reported back.
pub trait NotificationService {
    fn send(&self, order: &Order);
}

pub type PaymentProcessorBox = Box<dyn PaymentProcessor>;
