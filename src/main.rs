use checkout::application::checkout::CheckoutService;
use checkout::domain::order::{Money, Order};
use checkout::infrastructure::notification::EmailNotifier;
use checkout::infrastructure::payment::{CreditCardProcessor, PaymentMethod, QrisProcessor};
use checkout::interfaces::csv::order_reader::OrderReader;
use checkout::interfaces::csv::order_writer::OrderWriter;
use clap::Parser;
use miette::{IntoDiagnostic, Result};
use rust_decimal_macros::dec;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Orders CSV file (`customer,total`). Runs the built-in demo when omitted.
    input: Option<PathBuf>,

    /// Payment method used for every order in the input file.
    #[arg(long, value_enum, default_value_t = PaymentMethod::CreditCard)]
    method: PaymentMethod,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let notifier = EmailNotifier::new();

    let orders = match cli.input {
        Some(path) => {
            let processor = cli.method.processor();
            let service = CheckoutService::new(processor.as_ref(), &notifier);

            let file = File::open(path).into_diagnostic()?;
            let mut orders = Vec::new();
            for order_result in OrderReader::new(file).orders() {
                match order_result {
                    Ok(mut order) => {
                        service.run(&mut order);
                        orders.push(order);
                    }
                    Err(e) => {
                        error!(target: "checkout", "Error reading order: {}", e);
                    }
                }
            }
            orders
        }
        None => run_demo(&notifier)?,
    };

    let stdout = io::stdout();
    let mut writer = OrderWriter::new(stdout.lock());
    writer.write_orders(&orders).into_diagnostic()?;

    Ok(())
}

/// Checks out two sample orders with different payment strategies sharing one
/// notifier.
fn run_demo(notifier: &EmailNotifier) -> Result<Vec<Order>> {
    let mut andi = Order::new("Andi", Money::new(dec!(500000)).into_diagnostic()?);
    let credit_card = CreditCardProcessor::new();
    info!(target: "checkout", "Scenario 1: credit card");
    CheckoutService::new(&credit_card, notifier).run(&mut andi);

    let mut budi = Order::new("Budi", Money::new(dec!(100000)).into_diagnostic()?);
    let qris = QrisProcessor::new();
    info!(target: "checkout", "Scenario 2: QRIS");
    CheckoutService::new(&qris, notifier).run(&mut budi);

    Ok(vec![andi, budi])
}
