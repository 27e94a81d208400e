//! Line-item models for CSV parsing and invoice computation.

use crate::error::{InvoiceError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;

/// Raw line-item record as read from CSV.
///
/// Numeric fields are kept as strings so that a bad value is reported as an
/// invalid line item rather than a generic CSV error.
#[derive(Debug, Deserialize)]
pub struct LineItemRecord {
    /// Free-text description of the billable row
    pub description: String,

    /// Quantity (whole units)
    pub quantity: String,

    /// Price per unit in major currency units
    pub unit_price: String,
}

impl LineItemRecord {
    /// Parses the raw CSV record into a validated [`LineItem`].
    pub fn parse(&self) -> Result<LineItem> {
        let quantity_str = self.quantity.trim();
        let quantity = quantity_str.parse::<i64>().map_err(|_| {
            InvoiceError::InvalidInput(format!("quantity '{}' is not a whole number", quantity_str))
        })?;

        let price_str = self.unit_price.trim();
        let unit_price = Decimal::from_str(price_str).map_err(|_| {
            InvoiceError::InvalidInput(format!("unit price '{}' is not a decimal", price_str))
        })?;

        LineItem::new(self.description.trim(), quantity, unit_price)
    }
}

/// A single billable row on an invoice.
///
/// Immutable once constructed; `amount` is always `quantity × unit_price`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    description: String,
    quantity: u64,
    unit_price: Decimal,
    amount: Decimal,
}

impl LineItem {
    /// Creates a line item, rejecting a negative quantity or unit price.
    pub fn new(description: impl Into<String>, quantity: i64, unit_price: Decimal) -> Result<Self> {
        let description = description.into();

        let quantity = u64::try_from(quantity).map_err(|_| {
            InvoiceError::InvalidInput(format!(
                "line item '{}' has negative quantity {}",
                description, quantity
            ))
        })?;

        if unit_price < Decimal::ZERO {
            return Err(InvoiceError::InvalidInput(format!(
                "line item '{}' has negative unit price {}",
                description, unit_price
            )));
        }

        let amount = Decimal::from(quantity)
            .checked_mul(unit_price)
            .ok_or_else(|| {
                InvoiceError::InvalidInput(format!("line item '{}' amount overflows", description))
            })?;

        Ok(LineItem {
            description,
            quantity,
            unit_price,
            amount,
        })
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    /// `quantity × unit_price`, unrounded.
    pub fn amount(&self) -> Decimal {
        self.amount
    }
}
