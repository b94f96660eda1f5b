use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Invoice record — the best-effort structured view of one document.
///
/// Every field is independently optional: extraction either resolved it or
/// left it absent. Absence is never encoded as zero or an empty string;
/// the completeness rules depend on that distinction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Invoice {
    /// Invoice number as printed on the document.
    pub invoice_number: Option<String>,
    /// Issue date.
    pub invoice_date: Option<NaiveDate>,
    /// Payment due date.
    pub due_date: Option<NaiveDate>,

    /// Seller (issuer) name.
    pub seller_name: Option<String>,
    /// Seller postal address, single line.
    pub seller_address: Option<String>,
    /// Seller tax identifier.
    pub seller_tax_id: Option<String>,

    /// Buyer (recipient) name.
    pub buyer_name: Option<String>,
    /// Buyer postal address, single line.
    pub buyer_address: Option<String>,
    /// Buyer tax identifier.
    pub buyer_tax_id: Option<String>,

    /// Invoice currency, when known.
    pub currency: Option<Currency>,
    /// Total before tax.
    pub net_total: Option<Decimal>,
    /// Tax amount.
    pub tax_amount: Option<Decimal>,
    /// Total including tax.
    pub gross_total: Option<Decimal>,

    /// Itemized line entries. Reserved: no extraction logic populates this.
    pub line_items: Vec<LineItem>,
    /// Full extracted text, retained for downstream diagnostics.
    pub raw_text: Option<String>,
}

/// One itemized line entry on an invoice.
///
/// Structurally defined for the record shape; the current extraction logic
/// never fills it in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineItem {
    pub description: Option<String>,
    pub quantity: Option<Decimal>,
    pub unit_price: Option<Decimal>,
    pub line_total: Option<Decimal>,
}

/// Supported invoice currencies (closed set).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    /// US Dollar.
    USD,
    /// Euro.
    EUR,
    /// Pound Sterling.
    GBP,
    /// Indian Rupee.
    INR,
}

impl Currency {
    /// Every currency the validation rules accept.
    pub const SUPPORTED: [Currency; 4] =
        [Currency::USD, Currency::EUR, Currency::GBP, Currency::INR];

    /// ISO 4217 code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::GBP => "GBP",
            Self::INR => "INR",
        }
    }

    /// Parse from an ISO 4217 code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "USD" => Some(Self::USD),
            "EUR" => Some(Self::EUR),
            "GBP" => Some(Self::GBP),
            "INR" => Some(Self::INR),
            _ => None,
        }
    }

    /// Sniff a currency from free text by code or symbol.
    ///
    /// Checks USD/$, EUR/€, GBP/£, INR/₹ in that order against the
    /// uppercased text; first hit wins. Returns `None` when no marker is
    /// present. Callers decide whether to attach the result to a record —
    /// the extraction cascade itself leaves `currency` unset.
    pub fn detect(text: &str) -> Option<Self> {
        let upper = text.to_uppercase();
        if upper.contains("USD") || upper.contains('$') {
            return Some(Self::USD);
        }
        if upper.contains("EUR") || upper.contains('€') {
            return Some(Self::EUR);
        }
        if upper.contains("GBP") || upper.contains('£') {
            return Some(Self::GBP);
        }
        if upper.contains("INR") || upper.contains('₹') {
            return Some(Self::INR);
        }
        None
    }
}

/// Verdict and diagnostics for one invoice record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationResult {
    /// The invoice's own number, or `"UNKNOWN"` when absent.
    pub invoice_id: String,
    /// False as soon as any completeness, format, or business rule failed.
    pub is_valid: bool,
    /// Hard failures, in rule-evaluation order.
    pub errors: Vec<String>,
    /// Soft anomaly flags; never affect `is_valid`.
    pub warnings: Vec<String>,
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self {
            invoice_id: String::new(),
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }
}

/// Aggregate verdict over a batch of results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationSummary {
    /// Size of the input batch.
    pub total_invoices: usize,
    /// Results with `is_valid = true`.
    pub valid_invoices: usize,
    /// Results with `is_valid = false`.
    pub invalid_invoices: usize,
    /// Occurrences of each distinct error message across the batch.
    /// Warnings are not tallied. Ordered map for deterministic reports.
    pub error_counts: BTreeMap<String, usize>,
}

/// Summary plus per-invoice details, packaged for the reporting layer.
///
/// This crate only assembles the structure; writing it to a file, HTTP
/// response, or console is the consumer's job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationReport {
    pub summary: ValidationSummary,
    pub details: Vec<ValidationResult>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_code_round_trip() {
        for currency in Currency::SUPPORTED {
            assert_eq!(Currency::from_code(currency.code()), Some(currency));
        }
        assert_eq!(Currency::from_code("CHF"), None);
    }

    #[test]
    fn currency_detection_order() {
        assert_eq!(Currency::detect("Total: $99.00"), Some(Currency::USD));
        assert_eq!(Currency::detect("Gesamtwert EUR 64,00"), Some(Currency::EUR));
        assert_eq!(Currency::detect("amount due £12.00"), Some(Currency::GBP));
        assert_eq!(Currency::detect("₹1,200"), Some(Currency::INR));
        // USD wins when several markers are present
        assert_eq!(Currency::detect("$ or €"), Some(Currency::USD));
        assert_eq!(Currency::detect("no markers here"), None);
    }

    #[test]
    fn default_record_is_all_absent() {
        let invoice = Invoice::default();
        assert!(invoice.invoice_number.is_none());
        assert!(invoice.gross_total.is_none());
        assert!(invoice.line_items.is_empty());
        assert!(invoice.raw_text.is_none());
    }
}
