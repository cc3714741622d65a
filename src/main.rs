use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use expense_bank_order::application::builder::ExpenseBankOrderBuilder;
use expense_bank_order::domain::ports::{BankOrderStoreBox, CalendarServiceBox};
use expense_bank_order::infrastructure::calendar::{FixedCalendar, SystemCalendar};
use expense_bank_order::infrastructure::factory::{
    DefaultBankOrderLineFactory, DefaultBankOrderShellFactory,
};
use expense_bank_order::infrastructure::in_memory::InMemoryBankOrderStore;
use expense_bank_order::interfaces::csv::bank_order_writer::BankOrderWriter;
use expense_bank_order::interfaces::json::request_reader::ReimbursementRequest;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Json,
    Csv,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Reimbursement request JSON file (expense + sender bank details)
    input: PathBuf,

    /// Date to use as "today" when the expense has no payment date (YYYY-MM-DD)
    #[arg(long)]
    today: Option<NaiveDate>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Path to persistent database (optional). If provided, uses RocksDB.
    #[arg(long)]
    db_path: Option<PathBuf>,
}

fn open_store(db_path: Option<PathBuf>) -> Result<BankOrderStoreBox> {
    match db_path {
        #[cfg(feature = "storage-rocksdb")]
        Some(path) => {
            use expense_bank_order::infrastructure::rocksdb::RocksDBBankOrderStore;
            let store = RocksDBBankOrderStore::open(path).into_diagnostic()?;
            Ok(Box::new(store))
        }
        #[cfg(not(feature = "storage-rocksdb"))]
        Some(_) => {
            eprintln!(
                "WARNING: Persistent storage requested via --db-path, but 'storage-rocksdb' feature is not enabled. Falling back to In-Memory storage."
            );
            Ok(Box::new(InMemoryBankOrderStore::new()))
        }
        None => Ok(Box::new(InMemoryBankOrderStore::new())),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let calendar: CalendarServiceBox = match cli.today {
        Some(today) => Box::new(FixedCalendar::new(today)),
        None => Box::new(SystemCalendar::new()),
    };

    let builder = ExpenseBankOrderBuilder::new(
        Box::new(DefaultBankOrderShellFactory),
        Box::new(DefaultBankOrderLineFactory),
        open_store(cli.db_path)?,
        calendar,
    );

    let file = File::open(cli.input).into_diagnostic()?;
    let request = ReimbursementRequest::from_reader(file).into_diagnostic()?;

    let order = builder
        .create_bank_order(&request.expense, &request.bank_details)
        .await
        .into_diagnostic()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &order).into_diagnostic()?;
            writeln!(out).into_diagnostic()?;
        }
        OutputFormat::Csv => {
            BankOrderWriter::new(out)
                .write_orders([&order])
                .into_diagnostic()?;
        }
    }

    Ok(())
}
