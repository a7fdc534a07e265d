use crate::error::CheckoutError;
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

/// A non-negative monetary value.
///
/// Wraps `rust_decimal::Decimal` so that an order total can never be negative.
/// Zero is a valid total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(into = "Decimal")]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(value: Decimal) -> Result<Self, CheckoutError> {
        if value.is_sign_negative() && !value.is_zero() {
            Err(CheckoutError::Validation(format!(
                "Order total must not be negative, got {value}"
            )))
        } else {
            Ok(Self(value))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Money {
    type Error = CheckoutError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Self {
        money.0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Paid,
    Failed,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Paid => "paid",
            OrderStatus::Failed => "failed",
        };
        f.write_str(label)
    }
}

/// A purchase waiting to go through checkout.
///
/// The status starts at [`OrderStatus::Pending`] and is only moved forward by
/// the checkout service. Payment and notification strategies receive a shared
/// reference and cannot change it.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct Order {
    /// The customer placing the order.
    pub customer: String,
    /// The amount to charge.
    pub total: Money,
    status: OrderStatus,
}

impl Order {
    pub fn new(customer: impl Into<String>, total: Money) -> Self {
        Self {
            customer: customer.into(),
            total,
            status: OrderStatus::Pending,
        }
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub(crate) fn mark_paid(&mut self) {
        self.status = OrderStatus::Paid;
    }
}
