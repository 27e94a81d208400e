//! Error types for invoice computation and rendering.

use rust_decimal::Decimal;
use thiserror::Error;

/// Result type alias for invoice operations
pub type Result<T> = std::result::Result<T, InvoiceError>;

/// Errors that can occur while computing or rendering an invoice.
#[derive(Error, Debug)]
pub enum InvoiceError {
    /// Failed to open or read the input file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// Negative amount, negative quantity/price, or an unparseable number
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A line-item row that failed validation
    #[error("Invalid line item at row {row}: {message}")]
    InvalidRecord { row: usize, message: String },

    /// Integer part too large to render in words
    #[error("Amount {0} exceeds the largest amount that can be written in words (999,999,999)")]
    OutOfRange(Decimal),

    /// Missing input file argument
    #[error("Missing input file argument. Usage: invoice-words <line_items.csv> [tax_rate] [currency]")]
    MissingArgument,
}
