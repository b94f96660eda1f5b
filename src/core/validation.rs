use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::types::*;

/// Absolute margin allowed when reconciling net + tax against gross.
const TOTALS_TOLERANCE: Decimal = dec!(0.05);

/// An invoice dated further back than this is flagged as anomalous.
const MAX_AGE_DAYS: i64 = 730;

/// An invoice dated further ahead than this is flagged as anomalous.
const FUTURE_GRACE_DAYS: i64 = 30;

/// Validate one invoice record against the current local date.
///
/// Convenience wrapper around [`validate_invoice_at`]; everything except
/// the anomaly rules is independent of the date.
pub fn validate_invoice(invoice: &Invoice) -> ValidationResult {
    validate_invoice_at(invoice, Local::now().date_naive())
}

/// Validate one invoice record, with `today` supplied by the caller.
///
/// Pure function of its inputs; never fails. Rule categories run in a fixed
/// order with no early exit: completeness, format, business rules (all hard
/// failures), then anomalies (warnings only). The error strings are a wire
/// contract — downstream consumers match on the literal `missing_field:`,
/// `invalid_format:`, `business_rule_failed:`, and `anomaly:` prefixes.
pub fn validate_invoice_at(invoice: &Invoice, today: NaiveDate) -> ValidationResult {
    let mut result = ValidationResult {
        invoice_id: invoice
            .invoice_number
            .clone()
            .filter(|number| !number.is_empty())
            .unwrap_or_else(|| "UNKNOWN".to_string()),
        ..ValidationResult::default()
    };

    // Completeness — required fields. A blank string counts as missing;
    // a genuine zero gross total does not.
    if is_blank(&invoice.invoice_number) {
        fail(&mut result, "missing_field: invoice_number");
    }
    if invoice.invoice_date.is_none() {
        fail(&mut result, "missing_field: invoice_date");
    }
    if is_blank(&invoice.seller_name) {
        fail(&mut result, "missing_field: seller_name");
    }
    if is_blank(&invoice.buyer_name) {
        fail(&mut result, "missing_field: buyer_name");
    }
    if invoice.gross_total.is_none() {
        fail(&mut result, "missing_field: gross_total");
    }

    // Format — currency must be in the supported set; totals must not be
    // negative. The tax amount is deliberately unchecked.
    if let Some(currency) = invoice.currency {
        if !Currency::SUPPORTED.contains(&currency) {
            fail(
                &mut result,
                format!("invalid_format: currency {} not supported", currency.code()),
            );
        }
    }
    if let Some(net) = invoice.net_total {
        if net.is_sign_negative() {
            fail(&mut result, "invalid_format: net_total must be non-negative");
        }
    }
    if let Some(gross) = invoice.gross_total {
        if gross.is_sign_negative() {
            fail(&mut result, "invalid_format: gross_total must be non-negative");
        }
    }

    // Business rules — totals must reconcile within tolerance, and the due
    // date must not precede the issue date. Each rule only fires when every
    // field it reads is present.
    if let (Some(net), Some(tax), Some(gross)) =
        (invoice.net_total, invoice.tax_amount, invoice.gross_total)
    {
        if (net + tax - gross).abs() > TOTALS_TOLERANCE {
            fail(
                &mut result,
                format!("business_rule_failed: totals_mismatch (net {net} + tax {tax} != gross {gross})"),
            );
        }
    }
    if let (Some(invoice_date), Some(due_date)) = (invoice.invoice_date, invoice.due_date) {
        if due_date < invoice_date {
            fail(&mut result, "business_rule_failed: due_date_before_invoice_date");
        }
    }

    // Anomalies — informational only, validity untouched.
    if let Some(invoice_date) = invoice.invoice_date {
        if (today - invoice_date).num_days() > MAX_AGE_DAYS {
            result
                .warnings
                .push("anomaly: invoice_date_too_old (> 2 years)".to_string());
        }
        if (invoice_date - today).num_days() > FUTURE_GRACE_DAYS {
            result
                .warnings
                .push("anomaly: invoice_date_in_future".to_string());
        }
    }

    result
}

/// Validate a batch against the current local date.
pub fn validate_all(invoices: &[Invoice]) -> (Vec<ValidationResult>, ValidationSummary) {
    validate_all_at(invoices, Local::now().date_naive())
}

/// Validate a batch, with `today` supplied by the caller.
///
/// Per-invoice validation is independent; the summary is an associative
/// reduction over the results, so document order does not matter.
pub fn validate_all_at(
    invoices: &[Invoice],
    today: NaiveDate,
) -> (Vec<ValidationResult>, ValidationSummary) {
    let results: Vec<ValidationResult> = invoices
        .iter()
        .map(|invoice| validate_invoice_at(invoice, today))
        .collect();
    let summary = summarize(&results);
    (results, summary)
}

/// Roll a collection of results up into a batch summary.
///
/// Counts partition by validity, and `error_counts` tallies every distinct
/// error message. Warnings are excluded from the tally.
pub fn summarize(results: &[ValidationResult]) -> ValidationSummary {
    let mut summary = ValidationSummary {
        total_invoices: results.len(),
        ..ValidationSummary::default()
    };

    for result in results {
        if result.is_valid {
            summary.valid_invoices += 1;
        } else {
            summary.invalid_invoices += 1;
        }
        for error in &result.errors {
            *summary.error_counts.entry(error.clone()).or_insert(0) += 1;
        }
    }

    summary
}

fn fail(result: &mut ValidationResult, error: impl Into<String>) {
    result.is_valid = false;
    result.errors.push(error.into());
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(str::is_empty)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn today() -> NaiveDate {
        date(2024, 6, 15)
    }

    fn complete_invoice() -> Invoice {
        Invoice {
            invoice_number: Some("INV-2024-05".into()),
            invoice_date: Some(date(2024, 6, 1)),
            due_date: Some(date(2024, 7, 1)),
            seller_name: Some("ACME Ltd".into()),
            buyer_name: Some("Globex GmbH".into()),
            net_total: Some(dec!(90.00)),
            tax_amount: Some(dec!(10.00)),
            gross_total: Some(dec!(100.00)),
            ..Invoice::default()
        }
    }

    #[test]
    fn complete_invoice_is_valid() {
        let result = validate_invoice_at(&complete_invoice(), today());
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
        assert!(result.warnings.is_empty());
        assert_eq!(result.invoice_id, "INV-2024-05");
    }

    #[test]
    fn empty_record_reports_all_required_fields() {
        let result = validate_invoice_at(&Invoice::default(), today());
        assert!(!result.is_valid);
        assert_eq!(result.invoice_id, "UNKNOWN");
        assert_eq!(
            result.errors,
            vec![
                "missing_field: invoice_number",
                "missing_field: invoice_date",
                "missing_field: seller_name",
                "missing_field: buyer_name",
                "missing_field: gross_total",
            ]
        );
    }

    #[test]
    fn blank_strings_count_as_missing() {
        let invoice = Invoice {
            invoice_number: Some(String::new()),
            seller_name: Some(String::new()),
            ..complete_invoice()
        };
        let result = validate_invoice_at(&invoice, today());
        assert_eq!(result.invoice_id, "UNKNOWN");
        assert!(result.errors.contains(&"missing_field: invoice_number".to_string()));
        assert!(result.errors.contains(&"missing_field: seller_name".to_string()));
    }

    #[test]
    fn zero_gross_total_is_present() {
        let invoice = Invoice {
            net_total: None,
            tax_amount: None,
            gross_total: Some(Decimal::ZERO),
            ..complete_invoice()
        };
        let result = validate_invoice_at(&invoice, today());
        assert!(result.is_valid, "zero is a value, not absence: {:?}", result.errors);
    }

    #[test]
    fn totals_within_tolerance_pass() {
        let invoice = Invoice {
            gross_total: Some(dec!(100.05)),
            ..complete_invoice()
        };
        let result = validate_invoice_at(&invoice, today());
        assert!(result.is_valid, "{:?}", result.errors);
    }

    #[test]
    fn totals_beyond_tolerance_fail_with_values() {
        let invoice = Invoice {
            net_total: Some(dec!(50.0)),
            tax_amount: Some(dec!(10.0)),
            gross_total: Some(dec!(100.0)),
            ..complete_invoice()
        };
        let result = validate_invoice_at(&invoice, today());
        assert!(!result.is_valid);
        assert_eq!(
            result.errors,
            vec!["business_rule_failed: totals_mismatch (net 50.0 + tax 10.0 != gross 100.0)"]
        );
    }

    #[test]
    fn negative_totals_rejected() {
        let invoice = Invoice {
            net_total: Some(dec!(-90.00)),
            tax_amount: None,
            gross_total: Some(dec!(-100.00)),
            ..complete_invoice()
        };
        let result = validate_invoice_at(&invoice, today());
        assert_eq!(
            result.errors,
            vec![
                "invalid_format: net_total must be non-negative",
                "invalid_format: gross_total must be non-negative",
            ]
        );
    }

    #[test]
    fn anomaly_warnings_do_not_affect_validity() {
        let invoice = Invoice {
            invoice_date: Some(today() - chrono::Duration::days(MAX_AGE_DAYS + 1)),
            due_date: None,
            ..complete_invoice()
        };
        let result = validate_invoice_at(&invoice, today());
        assert!(result.is_valid);
        assert_eq!(result.warnings, vec!["anomaly: invoice_date_too_old (> 2 years)"]);
    }

    #[test]
    fn summary_partitions_batch() {
        let batch = vec![complete_invoice(), Invoice::default(), Invoice::default()];
        let (results, summary) = validate_all_at(&batch, today());
        assert_eq!(results.len(), 3);
        assert_eq!(summary.total_invoices, 3);
        assert_eq!(summary.valid_invoices, 1);
        assert_eq!(summary.invalid_invoices, 2);
        assert_eq!(summary.error_counts["missing_field: gross_total"], 2);
    }
}
