//! Per-field stage tables and the attempt functions behind them.
//!
//! Stage order within a table is the precedence contract: generic labels,
//! then locale-specific layouts, then fallbacks. Every function is a pure
//! read of the document views.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::{DocumentText, Stage, parse, patterns};

/// Buyer name plus the address line that came with it, when any.
pub(super) struct PartyBlock {
    pub name: String,
    pub address: Option<String>,
}

pub(super) const INVOICE_NUMBER: &[Stage<String>] =
    &[number_labelled, number_german_order, number_bare_inv];

pub(super) const INVOICE_DATE: &[Stage<NaiveDate>] =
    &[date_labelled, date_german, date_standalone];

pub(super) const DUE_DATE: &[Stage<NaiveDate>] = &[due_date_labelled];

pub(super) const SELLER_NAME: &[Stage<String>] =
    &[seller_after_marker, seller_heading, seller_first_line];

pub(super) const BUYER: &[Stage<PartyBlock>] = &[buyer_after_marker, buyer_german_delivery];

pub(super) const NET_TOTAL: &[Stage<Decimal>] = &[net_labelled, net_german];

pub(super) const TAX_AMOUNT: &[Stage<Decimal>] = &[tax_labelled, tax_german];

pub(super) const GROSS_TOTAL: &[Stage<Decimal>] =
    &[gross_labelled, gross_german, gross_largest_token];

// --- invoice number ---

fn number_labelled(doc: &DocumentText) -> Option<String> {
    patterns::INVOICE_NUMBER_LABELS
        .iter()
        .find_map(|pattern| pattern.captures(doc.raw))
        .map(|capture| capture[1].trim().to_string())
}

fn number_german_order(doc: &DocumentText) -> Option<String> {
    patterns::ORDER_NUMBER_DE
        .captures(doc.raw)
        .map(|capture| capture[1].to_string())
}

fn number_bare_inv(doc: &DocumentText) -> Option<String> {
    patterns::BARE_INV
        .captures(doc.raw)
        .map(|capture| capture[1].to_string())
}

// --- dates ---

fn date_labelled(doc: &DocumentText) -> Option<NaiveDate> {
    // A label whose capture fails to parse fails that pattern only; the
    // next label is still tried.
    patterns::DATE_LABELS
        .iter()
        .find_map(|pattern| pattern.captures(doc.raw).and_then(|c| parse::parse_date(&c[1])))
}

fn date_german(doc: &DocumentText) -> Option<NaiveDate> {
    patterns::DATE_DE
        .captures(doc.raw)
        .and_then(|c| parse::parse_german_date(&c[1]))
}

fn date_standalone(doc: &DocumentText) -> Option<NaiveDate> {
    patterns::STANDALONE_DATE
        .captures(doc.raw)
        .and_then(|c| parse::parse_date(&c[1]))
}

fn due_date_labelled(doc: &DocumentText) -> Option<NaiveDate> {
    patterns::DUE_DATE_LABEL
        .captures(doc.raw)
        .and_then(|c| parse::parse_date(&c[1]))
}

// --- parties ---

fn seller_after_marker(doc: &DocumentText) -> Option<String> {
    let index = doc
        .lines
        .iter()
        .position(|line| patterns::SELLER_MARKER.is_match(line))?;
    doc.lines.get(index + 1).map(|line| (*line).to_string())
}

/// First of the leading three lines that looks like a company heading.
fn seller_heading(doc: &DocumentText) -> Option<String> {
    doc.lines
        .iter()
        .take(3)
        .find(|line| line.chars().count() > 3 && !line.to_lowercase().contains("invoice"))
        .map(|line| (*line).to_string())
}

/// Last resort: whatever the document starts with.
fn seller_first_line(doc: &DocumentText) -> Option<String> {
    doc.lines.first().map(|line| (*line).to_string())
}

fn buyer_after_marker(doc: &DocumentText) -> Option<PartyBlock> {
    let index = doc
        .lines
        .iter()
        .position(|line| patterns::BUYER_MARKER.is_match(line))?;
    let name = doc.lines.get(index + 1)?;
    Some(PartyBlock {
        name: (*name).to_string(),
        address: doc.lines.get(index + 2).map(|line| (*line).to_string()),
    })
}

fn buyer_german_delivery(doc: &DocumentText) -> Option<PartyBlock> {
    if !patterns::DELIVERY_NOTE_DE.is_match(doc.raw) {
        return None;
    }
    // The marker line is followed by a department line ("Zentraleinkauf");
    // the recipient name sits two lines below the marker.
    let index = doc
        .lines
        .iter()
        .position(|line| line.contains("Bitte liefern Sie an"))?;
    let name = doc.lines.get(index + 2)?;
    Some(PartyBlock {
        name: (*name).to_string(),
        address: None,
    })
}

const ADDRESS_MARKERS: [&str; 5] = ["street", "road", "box", "ave", "lane"];

/// Fallback: the first address-looking line names the buyer's address and
/// the line above it the buyer. Only called once a seller is known.
pub(super) fn buyer_near_address(doc: &DocumentText) -> Option<PartyBlock> {
    let (index, line) = doc.lines.iter().enumerate().find(|(_, line)| {
        let lower = line.to_lowercase();
        ADDRESS_MARKERS.iter().any(|marker| lower.contains(marker))
    })?;
    if index == 0 {
        return None;
    }
    Some(PartyBlock {
        name: doc.lines[index - 1].to_string(),
        address: Some((*line).to_string()),
    })
}

// --- amounts ---

fn net_labelled(doc: &DocumentText) -> Option<Decimal> {
    patterns::NET_TOTAL_LABEL
        .captures(&doc.stripped)
        .and_then(|c| parse::parse_amount(&c[1]))
}

fn net_german(doc: &DocumentText) -> Option<Decimal> {
    patterns::NET_DE
        .captures(doc.raw)
        .and_then(|c| parse::parse_german_amount(&c[1]))
}

fn tax_labelled(doc: &DocumentText) -> Option<Decimal> {
    patterns::TAX_LABEL
        .captures(&doc.stripped)
        .and_then(|c| parse::parse_amount(&c[1]))
}

fn tax_german(doc: &DocumentText) -> Option<Decimal> {
    patterns::TAX_DE
        .captures(doc.raw)
        .and_then(|c| parse::parse_german_amount(&c[1]))
}

fn gross_labelled(doc: &DocumentText) -> Option<Decimal> {
    patterns::GROSS_LABELS
        .iter()
        .find_map(|pattern| {
            pattern
                .captures(&doc.stripped)
                .and_then(|c| parse::parse_amount(&c[1]))
        })
}

fn gross_german(doc: &DocumentText) -> Option<Decimal> {
    patterns::GROSS_DE
        .captures(doc.raw)
        .and_then(|c| parse::parse_german_amount(&c[1]))
}

/// Crude last resort: the largest standalone two-decimal token in the
/// document. May well pick an unrelated number; consumers depend on this
/// exact behavior.
fn gross_largest_token(doc: &DocumentText) -> Option<Decimal> {
    patterns::TWO_DECIMAL_TOKEN
        .find_iter(&doc.stripped)
        .filter_map(|token| token.as_str().parse::<Decimal>().ok())
        .max()
}
