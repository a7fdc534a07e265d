use crate::domain::order::Order;
use crate::error::Result;
use std::io::Write;

/// Writes the outcome of a checkout run as CSV: `customer,total,status`.
pub struct OrderWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> OrderWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_orders<'a>(&mut self, orders: impl IntoIterator<Item = &'a Order>) -> Result<()> {
        for order in orders {
            self.writer.serialize(order)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
