//! Compiled pattern tables for the extraction stages.
//!
//! All patterns are literals compiled once on first use. The exact
//! expressions are load-bearing: downstream behavior (including which
//! stage ends up resolving a field) depends on their quirks, so they are
//! kept verbatim rather than tightened.

use std::sync::LazyLock;

use regex::Regex;

/// Generic labelled invoice-number patterns, tried in order.
pub(super) static INVOICE_NUMBER_LABELS: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        Regex::new(r"(?i)invoice\s*(?:no\.?|number|#|id)?\s*[:#]?\s*([A-Z0-9\-/]+)")
            .expect("invoice number pattern"),
        Regex::new(r"(?i)inv\.?\s*(?:no\.?|number|#)?\s*[:#]?\s*([A-Z0-9\-/]+)")
            .expect("inv number pattern"),
    ]
});

/// German order documents: "Bestellung AUFNR34343", "Rechnung Nr. 12".
pub(super) static ORDER_NUMBER_DE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:Bestellung|Auftrag|Rechnung)\s*(?:Nr\.?|Nummer)?\s*([A-Z0-9]+)")
        .expect("german order number pattern")
});

/// Bare `INV-12345`-shaped token. Case-sensitive.
pub(super) static BARE_INV: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(INV-?\d+)\b").expect("bare inv pattern"));

/// Generic labelled date patterns, tried in order. The capture is
/// deliberately permissive; the format list decides what actually parses.
pub(super) static DATE_LABELS: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        Regex::new(r"(?i)invoice\s*date\s*[:\.]?\s*([\d/\-\sA-Za-z,]+)")
            .expect("invoice date pattern"),
        Regex::new(r"(?i)date\s*[:\.]?\s*([\d/\-\sA-Za-z,]+)").expect("date pattern"),
        Regex::new(r"(?i)dated\s*[:\.]?\s*([\d/\-\sA-Za-z,]+)").expect("dated pattern"),
    ]
});

/// German date reference: "vom 22.05.2024", "Datum: 22.05.2024".
pub(super) static DATE_DE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:vom|Datum)\s*[:\s]*(\d{2}\.\d{2}\.\d{4})").expect("german date pattern")
});

/// First standalone ISO or day-first date token anywhere in the text.
pub(super) static STANDALONE_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(\d{4}-\d{2}-\d{2}|\d{2}-\d{2}-\d{4})\b").expect("standalone date pattern")
});

pub(super) static DUE_DATE_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)due\s*date\s*[:\.]?\s*([\d/\-\sA-Za-z,]+)").expect("due date pattern")
});

/// A line that is exactly a seller marker, e.g. "From:" or "Seller".
pub(super) static SELLER_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:from|seller):?$").expect("seller marker pattern"));

/// A line that is exactly a buyer marker, e.g. "Bill To:" or "To".
pub(super) static BUYER_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:bill\s*to|to|buyer):?$").expect("buyer marker pattern"));

/// German delivery note introducing the recipient block.
pub(super) static DELIVERY_NOTE_DE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Bitte liefern Sie an:").expect("delivery note pattern"));

pub(super) static NET_TOTAL_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:net\s*total|sub\s*total|subtotal)\s*[:\.]?\s*([\d,]+\.?\d*)")
        .expect("net total pattern")
});

pub(super) static TAX_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:tax|vat|gst|hst)\s*(?:amount|total)?\s*[:\.]?\s*([\d,]+\.?\d*)")
        .expect("tax pattern")
});

/// Generic gross-total patterns: explicit labels first, then a line that
/// simply begins with "Total".
pub(super) static GROSS_LABELS: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        Regex::new(r"(?i)(?:grand\s*total|total\s*amount|amount\s*due)\s*[:\.]?\s*([\d,]+\.?\d*)")
            .expect("gross total pattern"),
        Regex::new(r"(?im)^total\s*[:\.]?\s*([\d,]+\.?\d*)").expect("total line pattern"),
    ]
});

/// German net total: "Gesamtwert EUR 64,00".
pub(super) static NET_DE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Gesamtwert\s*(?:EUR|€)?\s*([\d\.,]+)").expect("german net pattern")
});

/// German tax line: "MwSt. 19,00% EUR 12,16".
pub(super) static TAX_DE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)MwSt\..*?EUR\s*([\d\.,]+)").expect("german tax pattern"));

/// German gross total: "Gesamtwert inkl. MwSt. EUR 76,16".
pub(super) static GROSS_DE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Gesamtwert\s*inkl\.\s*MwSt\..*?EUR\s*([\d\.,]+)")
        .expect("german gross pattern")
});

/// Standalone two-decimal-place numeric token, for the gross fallback.
pub(super) static TWO_DECIMAL_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d+\.\d{2}\b").expect("two decimal token pattern"));
