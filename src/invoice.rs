//! Invoice totals: subtotal, SST amount and grand total.
//!
//! Maintains the invariant: `total_amount == subtotal + tax_amount`.

use crate::error::{InvoiceError, Result};
use crate::line_item::LineItem;
use crate::money::Money;
use crate::words::words_for_amount;
use log::warn;
use rust_decimal::Decimal;

/// Shown in place of the amount-in-words line when it cannot be rendered.
pub const WORDS_PLACEHOLDER: &str = "—";

/// A computed invoice.
///
/// # Invariants
///
/// - `subtotal` is the sum of all line amounts, rounded half-up to 2 places
/// - `tax_amount == round(subtotal × tax_rate / 100, 2)`
/// - `total_amount == subtotal + tax_amount`
#[derive(Debug, Clone)]
pub struct Invoice {
    line_items: Vec<LineItem>,
    subtotal: Money,
    /// Percentage, e.g. `6` for 6% SST.
    tax_rate: Decimal,
    tax_amount: Money,
    total_amount: Money,
    currency: String,
}

impl Invoice {
    /// Computes totals for the given line items.
    ///
    /// An empty item list yields an all-zero invoice. A tax rate outside
    /// 0-100 is rejected.
    pub fn compute(
        line_items: Vec<LineItem>,
        tax_rate: Decimal,
        currency: impl Into<String>,
    ) -> Result<Self> {
        if tax_rate < Decimal::ZERO || tax_rate > Decimal::ONE_HUNDRED {
            return Err(InvoiceError::InvalidInput(format!(
                "tax rate {} is outside 0-100",
                tax_rate
            )));
        }

        let mut gross = Decimal::ZERO;
        for item in &line_items {
            gross = gross.checked_add(item.amount()).ok_or_else(|| {
                InvoiceError::InvalidInput("line item amounts overflow".to_string())
            })?;
        }

        let subtotal = Money::new(gross);
        let tax = subtotal
            .as_decimal()
            .checked_mul(tax_rate)
            .ok_or_else(|| InvoiceError::InvalidInput("tax amount overflows".to_string()))?
            / Decimal::ONE_HUNDRED;
        let tax_amount = Money::new(tax);
        let total_amount = subtotal
            .checked_add(tax_amount)
            .ok_or_else(|| InvoiceError::InvalidInput("invoice total overflows".to_string()))?;

        Ok(Invoice {
            line_items,
            subtotal,
            tax_rate,
            tax_amount,
            total_amount,
            currency: currency.into(),
        })
    }

    pub fn line_items(&self) -> &[LineItem] {
        &self.line_items
    }

    pub fn subtotal(&self) -> Money {
        self.subtotal
    }

    pub fn tax_rate(&self) -> Decimal {
        self.tax_rate
    }

    pub fn tax_amount(&self) -> Money {
        self.tax_amount
    }

    pub fn total_amount(&self) -> Money {
        self.total_amount
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// The total written out, e.g. `"One Hundred MYR Only"`.
    pub fn amount_in_words(&self) -> Result<String> {
        words_for_amount(self.total_amount.as_decimal(), &self.currency)
    }

    /// Like [`Invoice::amount_in_words`], but falls back to
    /// [`WORDS_PLACEHOLDER`] and logs a warning when rendering fails.
    pub fn words_or_placeholder(&self) -> String {
        match self.amount_in_words() {
            Ok(words) => words,
            Err(e) => {
                warn!(
                    "Cannot render total {} {} in words: {}",
                    self.total_amount, self.currency, e
                );
                WORDS_PLACEHOLDER.to_string()
            }
        }
    }

    /// Verifies the invariant: `total_amount == subtotal + tax_amount`.
    #[cfg(debug_assertions)]
    pub fn check_invariant(&self) -> bool {
        self.subtotal.checked_add(self.tax_amount) == Some(self.total_amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn item(quantity: i64, unit_price: &str) -> LineItem {
        LineItem::new("item", quantity, dec(unit_price)).unwrap()
    }

    #[test]
    fn test_empty_invoice_is_zero() {
        let invoice = Invoice::compute(Vec::new(), dec("6"), "MYR").unwrap();
        assert_eq!(invoice.subtotal().to_string(), "0.00");
        assert_eq!(invoice.tax_amount().to_string(), "0.00");
        assert_eq!(invoice.total_amount().to_string(), "0.00");
        assert_eq!(invoice.amount_in_words().unwrap(), "Zero MYR Only");
    }

    #[test]
    fn test_totals_with_sst() {
        let invoice =
            Invoice::compute(vec![item(2, "50.00"), item(1, "100.00")], dec("6"), "MYR").unwrap();
        assert_eq!(invoice.subtotal().to_string(), "200.00");
        assert_eq!(invoice.tax_amount().to_string(), "12.00");
        assert_eq!(invoice.total_amount().to_string(), "212.00");
        assert!(invoice.check_invariant());
    }

    #[test]
    fn test_tax_rounds_half_up() {
        // 10.25 * 6% = 0.615
        let invoice = Invoice::compute(vec![item(1, "10.25")], dec("6"), "MYR").unwrap();
        assert_eq!(invoice.tax_amount().to_string(), "0.62");
        assert_eq!(invoice.total_amount().to_string(), "10.87");
        assert!(invoice.check_invariant());
    }

    #[test]
    fn test_subtotal_rounds_sum_not_lines() {
        // 3 * 0.333 = 0.999 -> 1.00
        let invoice = Invoice::compute(vec![item(3, "0.333")], dec("0"), "MYR").unwrap();
        assert_eq!(invoice.subtotal().to_string(), "1.00");
        assert_eq!(invoice.total_amount().to_string(), "1.00");
    }

    #[test]
    fn test_rejects_out_of_range_tax_rate() {
        assert!(matches!(
            Invoice::compute(Vec::new(), dec("-1"), "MYR"),
            Err(InvoiceError::InvalidInput(_))
        ));
        assert!(matches!(
            Invoice::compute(Vec::new(), dec("100.01"), "MYR"),
            Err(InvoiceError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_total_overflow_is_an_error() {
        let items = vec![item(1, "79000000000000000000000000000")];
        let err = Invoice::compute(items, dec("0.5"), "MYR").unwrap_err();
        match err {
            InvoiceError::InvalidInput(message) => assert!(message.contains("overflows")),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_words_placeholder_when_out_of_range() {
        let invoice = Invoice::compute(vec![item(1, "1000000000")], dec("0"), "MYR").unwrap();
        assert_eq!(invoice.words_or_placeholder(), WORDS_PLACEHOLDER);

        let invoice = Invoice::compute(vec![item(1, "100")], dec("0"), "MYR").unwrap();
        assert_eq!(invoice.words_or_placeholder(), "One Hundred MYR Only");
    }
}
