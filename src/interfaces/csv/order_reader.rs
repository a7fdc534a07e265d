use crate::domain::order::Order;
use crate::error::{CheckoutError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;

/// One row of an orders file: `customer,total`.
#[derive(Debug, Deserialize)]
struct OrderRecord {
    customer: String,
    total: Decimal,
}

impl TryFrom<OrderRecord> for Order {
    type Error = CheckoutError;

    fn try_from(record: OrderRecord) -> Result<Self> {
        if record.customer.is_empty() {
            return Err(CheckoutError::Validation(
                "Customer must not be empty".to_string(),
            ));
        }
        Ok(Order::new(record.customer, record.total.try_into()?))
    }
}

/// Reads pending orders from a CSV source.
///
/// Rows that cannot be parsed or that fail validation surface as `Err` items;
/// the stream continues with the next row.
pub struct OrderReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> OrderReader<R> {
    /// Creates a new `OrderReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and validates orders.
    pub fn orders(self) -> impl Iterator<Item = Result<Order>> {
        self.reader.into_deserialize().map(|result| {
            result
                .map_err(CheckoutError::from)
                .and_then(|record: OrderRecord| Order::try_from(record))
        })
    }
}
