//! Command-line configuration.

use crate::error::{InvoiceError, Result};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Malaysian SST rate on taxable services, in percent.
pub const DEFAULT_TAX_RATE: u32 = 6;

/// Default invoice currency.
pub const DEFAULT_CURRENCY: &str = "MYR";

/// Settings for one CLI run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input_path: String,
    pub tax_rate: Decimal,
    pub currency: String,
}

impl Config {
    /// Parses `<line_items.csv> [tax_rate] [currency]`.
    ///
    /// `args` excludes the program name.
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();

        let input_path = args.next().ok_or(InvoiceError::MissingArgument)?;

        let tax_rate = match args.next() {
            Some(raw) => Decimal::from_str(raw.trim()).map_err(|_| {
                InvoiceError::InvalidInput(format!("tax rate '{}' is not a decimal", raw))
            })?,
            None => Decimal::from(DEFAULT_TAX_RATE),
        };

        let currency = args.next().unwrap_or_else(|| DEFAULT_CURRENCY.to_string());

        Ok(Config {
            input_path,
            tax_rate,
            currency,
        })
    }
}
