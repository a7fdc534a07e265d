//! CSV adapters used by the command-line driver.

pub mod order_reader;
pub mod order_writer;
