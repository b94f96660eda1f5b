//! Token parsing for captured date and amount strings.
//!
//! Failure is always `None` — a malformed token fails its stage, nothing
//! more.

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Date formats tried in order against a captured token. ISO first, then
/// day-first variants, then US month-first, then "12 Jan 2024".
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d-%m-%Y", "%d/%m/%Y", "%m/%d/%Y", "%d %b %Y"];

/// Parse a date token against the fixed format list; first format that
/// accepts the whole trimmed token wins.
pub(super) fn parse_date(token: &str) -> Option<NaiveDate> {
    let token = token.trim();
    if token.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(token, format).ok())
}

/// Parse a German `DD.MM.YYYY` token.
pub(super) fn parse_german_date(token: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(token.trim(), "%d.%m.%Y").ok()
}

/// Parse an amount token using `,` as thousands separator:
/// "1,234.56" → 1234.56.
pub(super) fn parse_amount(token: &str) -> Option<Decimal> {
    let cleaned = token.replace(',', "");
    cleaned.trim_end_matches('.').parse().ok()
}

/// Parse an amount token using `.` as thousands separator and `,` as the
/// decimal point: "1.234,56" → 1234.56. A token without grouping keeps the
/// same reading ("76,16" → 76.16, "1.234" → 1234).
pub(super) fn parse_german_amount(token: &str) -> Option<Decimal> {
    token.replace('.', "").replace(',', ".").parse().ok()
}
