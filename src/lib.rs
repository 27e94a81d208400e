//! # Invoice Words
//!
//! Invoice totals and the amount-in-words line printed on Malaysian
//! (MyInvois) e-invoices.
//!
//! ## Design Principles
//!
//! - **Fixed-point arithmetic**: 2 decimal places, half-up, via `rust_decimal`
//! - **Strict invariants**: `total_amount == subtotal + tax_amount` always holds
//! - **Pure rendering**: words are derived from the total on every call, no state
//! - **Explicit rejection**: negative amounts, quantities and prices are errors
//!
//! ## Example
//!
//! ```
//! use invoice_words::{Invoice, LineItem};
//! use rust_decimal::Decimal;
//!
//! let items = vec![LineItem::new("Support plan", 1, Decimal::from(1000)).unwrap()];
//! let invoice = Invoice::compute(items, Decimal::from(6), "MYR").unwrap();
//! assert_eq!(invoice.total_amount().to_string(), "1060.00");
//! assert_eq!(invoice.amount_in_words().unwrap(), "One Thousand Sixty MYR Only");
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod invoice;
pub mod line_item;
pub mod money;
pub mod words;

pub use config::Config;
pub use engine::InvoiceEngine;
pub use error::{InvoiceError, Result};
pub use invoice::{Invoice, WORDS_PLACEHOLDER};
pub use line_item::{LineItem, LineItemRecord};
pub use money::Money;
pub use words::{amount_in_words, words_for_amount};
