//! Amount-in-words rendering for invoice documents.
//!
//! Ringgit are written out in English words and sen are appended as a
//! numeric fraction, following the cheque convention used on Malaysian
//! invoices: `One Thousand Two Hundred Thirty Four and 56/100 MYR Only`.

use crate::error::{InvoiceError, Result};
use crate::money::Money;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Largest integer part that can be written in words.
pub const MAX_WORDS_AMOUNT: u64 = 999_999_999;

const ONES: [&str; 10] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine",
];

const TEENS: [&str; 10] = [
    "Ten",
    "Eleven",
    "Twelve",
    "Thirteen",
    "Fourteen",
    "Fifteen",
    "Sixteen",
    "Seventeen",
    "Eighteen",
    "Nineteen",
];

// Indices 0 and 1 are never read.
const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

/// Splits a non-negative amount into its whole part and cents (0-99).
///
/// The amount is rounded half-up to 2 decimal places first, so `1234.5`
/// yields `(1234, 50)` and `0.999` yields `(1, 0)`. Any amount below zero
/// is rejected, including ones that would round to `0.00`.
pub fn decompose(amount: Decimal) -> Result<(u64, u8)> {
    if amount < Decimal::ZERO {
        return Err(InvoiceError::InvalidInput(format!(
            "cannot write negative amount {} in words",
            amount
        )));
    }

    let money = Money::new(amount);
    let value = money.as_decimal();
    let whole = value.trunc();
    let integer_part = whole
        .to_u64()
        .ok_or(InvoiceError::OutOfRange(whole))?;
    let cents_part = ((value - whole) * Decimal::ONE_HUNDRED)
        .to_u8()
        .ok_or_else(|| InvoiceError::InvalidInput(format!("amount {} has invalid cents", money)))?;

    Ok((integer_part, cents_part))
}

/// Writes a whole number between 0 and 999,999,999 in English words.
///
/// # Examples
///
/// ```
/// use invoice_words::words::integer_to_words;
///
/// assert_eq!(integer_to_words(0).unwrap(), "Zero");
/// assert_eq!(integer_to_words(2000).unwrap(), "Two Thousand");
/// assert_eq!(integer_to_words(1_500_000).unwrap(), "One Million Five Hundred Thousand");
/// ```
pub fn integer_to_words(n: u64) -> Result<String> {
    if n > MAX_WORDS_AMOUNT {
        return Err(InvoiceError::OutOfRange(Decimal::from(n)));
    }
    if n == 0 {
        return Ok("Zero".to_string());
    }
    Ok(convert(n).trim().to_string())
}

/// Renders `n` by magnitude band. Zero renders as the empty string so a
/// zero remainder never contributes a stray word or space.
fn convert(n: u64) -> String {
    match n {
        0 => String::new(),
        1..=9 => ONES[n as usize].to_string(),
        10..=19 => TEENS[(n - 10) as usize].to_string(),
        20..=99 => join(TENS[(n / 10) as usize].to_string(), convert(n % 10)),
        100..=999 => join(format!("{} Hundred", ONES[(n / 100) as usize]), convert(n % 100)),
        1_000..=999_999 => join(format!("{} Thousand", convert(n / 1_000)), convert(n % 1_000)),
        _ => join(
            format!("{} Million", convert(n / 1_000_000)),
            convert(n % 1_000_000),
        ),
    }
}

fn join(head: String, tail: String) -> String {
    if tail.is_empty() {
        head
    } else {
        format!("{} {}", head, tail)
    }
}

/// Writes an amount in words without the currency label.
///
/// Cents are appended as a two-digit fraction, e.g. `"Ten and 05/100"`.
pub fn amount_in_words(amount: Decimal) -> Result<String> {
    let (integer_part, cents_part) = decompose(amount)?;

    if integer_part == 0 && cents_part == 0 {
        return Ok("Zero".to_string());
    }

    let words = integer_to_words(integer_part)?;
    if cents_part > 0 {
        Ok(format!("{} and {:02}/100", words, cents_part))
    } else {
        Ok(words)
    }
}

/// Writes the full invoice line: `"{words} {currency} Only"`.
///
/// The currency label is interpolated verbatim.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use rust_decimal::Decimal;
/// use invoice_words::words_for_amount;
///
/// let total = Decimal::from_str("1234.56").unwrap();
/// assert_eq!(
///     words_for_amount(total, "MYR").unwrap(),
///     "One Thousand Two Hundred Thirty Four and 56/100 MYR Only"
/// );
/// ```
pub fn words_for_amount(amount: Decimal, currency: &str) -> Result<String> {
    let words = amount_in_words(amount)?;
    Ok(format!("{} {} Only", words, currency))
}
