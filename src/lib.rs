//! # belegcheck
//!
//! Invoice document QC: best-effort field extraction from plain document text
//! and a rule-based validation engine with batch reporting.
//!
//! All monetary values use [`rust_decimal::Decimal`] — never floating point.
//! Every record field is optional: extraction resolves each field to a value
//! or leaves it absent, and validation treats absence as a first-class
//! outcome, never a sentinel zero or empty string.
//!
//! ## Quick Start
//!
//! ```rust
//! use belegcheck::core::*;
//! use chrono::NaiveDate;
//! use rust_decimal_macros::dec;
//!
//! let invoice = Invoice {
//!     invoice_number: Some("INV-2024-05".into()),
//!     invoice_date: NaiveDate::from_ymd_opt(2024, 1, 15),
//!     seller_name: Some("ACME Office Supplies Ltd".into()),
//!     buyer_name: Some("Globex GmbH".into()),
//!     net_total: Some(dec!(90.00)),
//!     tax_amount: Some(dec!(10.00)),
//!     gross_total: Some(dec!(100.00)),
//!     ..Invoice::default()
//! };
//!
//! let today = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
//! let result = validate_invoice_at(&invoice, today);
//! assert!(result.is_valid);
//! assert!(result.errors.is_empty());
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Invoice record, validation rule engine, batch summary |
//! | `extract` | Field-extraction cascade over raw document text |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "extract")]
pub mod extract;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
