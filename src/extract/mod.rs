//! Field-extraction cascade: raw document text → best-effort [`Invoice`].
//!
//! Each field has an ordered table of *stages* — pure attempt functions
//! tried until the first one produces a value (set-once semantics: a later
//! stage never overwrites an earlier stage's result). Generic patterns run
//! first, locale-specific patterns second, crude fallbacks last. A stage
//! whose pattern matches but whose token fails to parse simply fails that
//! stage; nothing here ever panics or returns an error to the caller.
//!
//! ```rust
//! use belegcheck::extract::extract_invoice;
//! use rust_decimal_macros::dec;
//!
//! let text = "ACME Office Supplies Ltd\nInvoice Number: INV-2024-05\nGrand Total: 100.00\n";
//! let invoice = extract_invoice(text);
//! assert_eq!(invoice.invoice_number.as_deref(), Some("INV-2024-05"));
//! assert_eq!(invoice.seller_name.as_deref(), Some("ACME Office Supplies Ltd"));
//! assert_eq!(invoice.gross_total, Some(dec!(100.00)));
//! ```

mod parse;
mod patterns;
mod source;
mod stages;

pub use source::{TextSource, extract_all};

use crate::core::Invoice;

/// One extraction attempt for a field: the whole document in, a value or
/// nothing out.
type Stage<T> = fn(&DocumentText<'_>) -> Option<T>;

/// Pre-split views of one document's text, shared by every stage.
struct DocumentText<'a> {
    /// The text exactly as supplied.
    raw: &'a str,
    /// Trimmed, non-empty lines; party stages index into these.
    lines: Vec<&'a str>,
    /// Copy with currency symbols stripped, for the amount patterns.
    stripped: String,
}

impl<'a> DocumentText<'a> {
    fn new(raw: &'a str) -> Self {
        let lines = raw
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        let stripped = raw.replace(['$', '€', '£', '₹'], "");
        Self { raw, lines, stripped }
    }
}

/// Run a field's stage table: first stage to produce a value wins.
fn first_match<T>(doc: &DocumentText<'_>, table: &[Stage<T>]) -> Option<T> {
    table.iter().find_map(|stage| stage(doc))
}

/// Extract one invoice record from the concatenated plain text of a
/// document (newline-joined per page).
///
/// Never fails: every field independently resolves to a value or stays
/// absent, and the full input is retained in `raw_text`. The currency,
/// tax-id, seller-address, and line-item fields are reserved — no current
/// stage populates them.
pub fn extract_invoice(text: &str) -> Invoice {
    let doc = DocumentText::new(text);

    let invoice_number = first_match(&doc, stages::INVOICE_NUMBER);
    let invoice_date = first_match(&doc, stages::INVOICE_DATE);
    let due_date = first_match(&doc, stages::DUE_DATE);

    let seller_name = first_match(&doc, stages::SELLER_NAME);

    // The address-proximity heuristic is only plausible once a seller is
    // known, so it hangs off the seller result rather than the table.
    let buyer = first_match(&doc, stages::BUYER).or_else(|| {
        if seller_name.is_some() {
            stages::buyer_near_address(&doc)
        } else {
            None
        }
    });
    let (buyer_name, buyer_address) = match buyer {
        Some(block) => (Some(block.name), block.address),
        None => (None, None),
    };

    let net_total = first_match(&doc, stages::NET_TOTAL);
    let tax_amount = first_match(&doc, stages::TAX_AMOUNT);
    let gross_total = first_match(&doc, stages::GROSS_TOTAL);

    Invoice {
        invoice_number,
        invoice_date,
        due_date,
        seller_name,
        buyer_name,
        buyer_address,
        net_total,
        tax_amount,
        gross_total,
        raw_text: Some(text.to_string()),
        ..Invoice::default()
    }
}
