//! Invoice Words CLI
//!
//! Reads invoice line items from CSV and prints the invoice totals with the
//! amount written in words.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- line_items.csv 6 MYR > invoice.csv
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use invoice_words::{Config, InvoiceEngine, Result};
use std::env;
use std::fs::File;
use std::io::{self, BufReader};
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = Config::from_args(env::args().skip(1))?;

    let file = File::open(&config.input_path)?;
    let reader = BufReader::new(file);

    let mut engine = InvoiceEngine::new(config.tax_rate, config.currency);
    engine.process_csv(reader)?;

    let stdout = io::stdout();
    let handle = stdout.lock();
    engine.write_output(handle)?;

    Ok(())
}
