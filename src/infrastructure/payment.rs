use crate::domain::order::Order;
use crate::domain::ports::{PaymentProcessor, PaymentProcessorBox};
use clap::ValueEnum;
use tracing::info;

/// Charges the order to the customer's credit card.
///
/// No gateway is contacted; every payment is approved.
#[derive(Debug, Default, Clone, Copy)]
pub struct CreditCardProcessor;

impl CreditCardProcessor {
    pub fn new() -> Self {
        Self
    }
}

impl PaymentProcessor for CreditCardProcessor {
    fn process(&self, order: &Order) -> bool {
        info!(
            target: "checkout",
            customer = %order.customer,
            total = %order.total,
            "Processing credit card payment"
        );
        true
    }
}

/// Charges the order through a QRIS (QR code) payment.
///
/// Like [`CreditCardProcessor`], every payment is approved.
#[derive(Debug, Default, Clone, Copy)]
pub struct QrisProcessor;

impl QrisProcessor {
    pub fn new() -> Self {
        Self
    }
}

impl PaymentProcessor for QrisProcessor {
    fn process(&self, order: &Order) -> bool {
        info!(
            target: "checkout",
            customer = %order.customer,
            total = %order.total,
            "Processing QRIS payment"
        );
        true
    }
}

/// The payment strategies shipped with the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum PaymentMethod {
    #[default]
    CreditCard,
    Qris,
}

impl PaymentMethod {
    /// Builds the processor for this method.
    pub fn processor(self) -> PaymentProcessorBox {
        match self {
            PaymentMethod::CreditCard => Box::new(CreditCardProcessor::new()),
            PaymentMethod::Qris => Box::new(QrisProcessor::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::{Money, OrderStatus};
    use rust_decimal_macros::dec;

    fn order() -> Order {
        Order::new("Andi", Money::new(dec!(500000)).unwrap())
    }

    #[test]
    fn test_credit_card_approves() {
        let order = order();
        assert!(CreditCardProcessor::new().process(&order));
        assert_eq!(order.status(), OrderStatus::Pending);
    }

    #[test]
    fn test_qris_approves() {
        let order = order();
        assert!(QrisProcessor::new().process(&order));
        assert_eq!(order.status(), OrderStatus::Pending);
    }

    #[test]
    fn test_every_method_builds_a_processor() {
        let order = order();
        for method in PaymentMethod::value_variants() {
            assert!(method.processor().process(&order));
        }
    }

    #[test]
    fn test_method_parsing() {
        assert_eq!(
            PaymentMethod::from_str("credit-card", false).unwrap(),
            PaymentMethod::CreditCard
        );
        assert_eq!(
            PaymentMethod::from_str("qris", false).unwrap(),
            PaymentMethod::Qris
        );
        assert!(PaymentMethod::from_str("cash", false).is_err());
    }
}
