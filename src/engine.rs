//! Line-item ingestion and invoice summary output.
//!
//! Reads line items from CSV one record at a time, validates each one, and
//! computes the invoice once all rows are accepted.

use crate::error::{InvoiceError, Result};
use crate::invoice::Invoice;
use crate::line_item::{LineItem, LineItemRecord};
use crate::money::Money;
use csv::{ReaderBuilder, Trim};
use log::{debug, warn};
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::{Read, Write};

/// One-row CSV summary of a computed invoice.
#[derive(Debug, Serialize)]
struct InvoiceSummary<'a> {
    subtotal: Money,
    tax_rate: Decimal,
    tax_amount: Money,
    total_amount: Money,
    currency: &'a str,
    amount_in_words: String,
}

/// Builds an invoice from streamed line items.
///
/// Any invalid row rejects the whole batch; a partially read invoice would
/// print a wrong total.
pub struct InvoiceEngine {
    /// Accepted line items, in input order.
    items: Vec<LineItem>,

    /// Tax rate as a percentage.
    tax_rate: Decimal,

    /// Currency label used in the words line.
    currency: String,
}

impl InvoiceEngine {
    /// Creates a new engine with no line items.
    pub fn new(tax_rate: Decimal, currency: impl Into<String>) -> Self {
        InvoiceEngine {
            items: Vec::new(),
            tax_rate,
            currency: currency.into(),
        }
    }

    /// Reads `description,quantity,unit_price` rows from a CSV reader.
    ///
    /// Stops at the first invalid row and reports it by spreadsheet row
    /// number (the header is row 1).
    pub fn process_csv<R: Read>(&mut self, reader: R) -> Result<()> {
        let mut csv_reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);

        for (row_idx, result) in csv_reader.deserialize::<LineItemRecord>().enumerate() {
            let row = row_idx + 2; // 1-indexed, accounting for header row

            let record = result.map_err(|e| {
                warn!("Row {}: CSV parse error: {}", row, e);
                InvoiceError::InvalidRecord {
                    row,
                    message: e.to_string(),
                }
            })?;

            let item = record.parse().map_err(|e| {
                warn!("Row {}: {}", row, e);
                InvoiceError::InvalidRecord {
                    row,
                    message: e.to_string(),
                }
            })?;

            debug!(
                "Row {}: {} x {} = {} ({})",
                row,
                item.quantity(),
                item.unit_price(),
                item.amount(),
                item.description()
            );
            self.items.push(item);
        }

        Ok(())
    }

    /// Number of line items accepted so far.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Computes the invoice over all accepted line items.
    pub fn finalize(&self) -> Result<Invoice> {
        let invoice = Invoice::compute(self.items.clone(), self.tax_rate, self.currency.as_str())?;
        debug!(
            "Computed invoice: subtotal {}, tax {}, total {}",
            invoice.subtotal(),
            invoice.tax_amount(),
            invoice.total_amount()
        );
        Ok(invoice)
    }

    /// Writes the invoice summary as CSV.
    ///
    /// Monetary values carry exactly 2 decimal places. If the total cannot
    /// be written in words, the words column holds a placeholder.
    pub fn write_output<W: Write>(&self, writer: W) -> Result<()> {
        let invoice = self.finalize()?;
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.serialize(InvoiceSummary {
            subtotal: invoice.subtotal(),
            tax_rate: invoice.tax_rate(),
            tax_amount: invoice.tax_amount(),
            total_amount: invoice.total_amount(),
            currency: invoice.currency(),
            amount_in_words: invoice.words_or_placeholder(),
        })?;

        csv_writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::str::FromStr;

    fn engine_with(csv: &str) -> Result<InvoiceEngine> {
        let mut engine = InvoiceEngine::new(Decimal::from(6), "MYR");
        engine.process_csv(Cursor::new(csv))?;
        Ok(engine)
    }

    #[test]
    fn test_simple_invoice() {
        let csv = r#"description,quantity,unit_price
RCS messages,1000,0.05
Voice minutes,200,0.12"#;

        let engine = engine_with(csv).unwrap();
        assert_eq!(engine.item_count(), 2);

        let invoice = engine.finalize().unwrap();
        assert_eq!(invoice.subtotal().to_string(), "74.00");
        assert_eq!(invoice.tax_amount().to_string(), "4.44");
        assert_eq!(invoice.total_amount().to_string(), "78.44");
    }

    #[test]
    fn test_empty_body_is_zero_invoice() {
        let engine = engine_with("description,quantity,unit_price\n").unwrap();
        assert_eq!(engine.item_count(), 0);
        assert!(engine.finalize().unwrap().total_amount().is_zero());
    }

    #[test]
    fn test_negative_quantity_rejects_batch() {
        let csv = r#"description,quantity,unit_price
Meeting room,1,100
Refund,-1,100"#;

        match engine_with(csv) {
            Err(InvoiceError::InvalidRecord { row, .. }) => assert_eq!(row, 3),
            other => panic!("Expected InvalidRecord, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_missing_column_rejects_batch() {
        let csv = "description,quantity,unit_price\nSeats,1\n";
        assert!(matches!(
            engine_with(csv),
            Err(InvoiceError::InvalidRecord { row: 2, .. })
        ));
    }

    #[test]
    fn test_whitespace_handling() {
        let csv = "description, quantity, unit_price\n Seats , 2 , 10.00 \n";
        let invoice = engine_with(csv).unwrap().finalize().unwrap();
        assert_eq!(invoice.line_items()[0].description(), "Seats");
        assert_eq!(
            invoice.subtotal().as_decimal(),
            Decimal::from_str("20.00").unwrap()
        );
    }

    #[test]
    fn test_output_format() {
        let csv = "description,quantity,unit_price\nSupport plan,1,1000\n";
        let engine = engine_with(csv).unwrap();

        let mut output = Vec::new();
        engine.write_output(&mut output).unwrap();

        let output_str = String::from_utf8(output).unwrap();
        assert!(output_str
            .starts_with("subtotal,tax_rate,tax_amount,total_amount,currency,amount_in_words"));
        assert!(output_str.contains("1000.00,6,60.00,1060.00,MYR,One Thousand Sixty MYR Only"));
    }
}
