use thiserror::Error;

/// Errors raised at the edges of the checkout flow.
///
/// A declined payment is not an error: it is reported by
/// [`PaymentProcessor::process`](crate::domain::ports::PaymentProcessor::process)
/// returning `false` and handled by the checkout service.
#[derive(Error, Debug)]
pub enum CheckoutError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Validation error: {0}")]
    Validation(String),
}

pub type Result<T> = std::result::Result<T, CheckoutError>;
