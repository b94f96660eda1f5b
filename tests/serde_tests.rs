//! Wire-shape tests: the record and report structures are a JSON contract
//! for downstream consumers — dates as ISO-8601 strings, decimals as
//! numbers, absence as null, missing keys tolerated on the way in.

use belegcheck::core::*;
use chrono::NaiveDate;
use rust_decimal_macros::dec;
use serde_json::json;

fn sample_invoice() -> Invoice {
    Invoice {
        invoice_number: Some("AUFNR34343".into()),
        invoice_date: NaiveDate::from_ymd_opt(2024, 5, 22),
        seller_name: Some("ABC Corporation".into()),
        buyer_name: Some("Beispielname Unternehmen".into()),
        currency: Some(Currency::EUR),
        net_total: Some(dec!(64.00)),
        tax_amount: Some(dec!(12.16)),
        gross_total: Some(dec!(76.16)),
        ..Invoice::default()
    }
}

#[test]
fn invoice_serializes_dates_as_iso_strings() {
    let value = serde_json::to_value(sample_invoice()).unwrap();
    assert_eq!(value["invoice_date"], json!("2024-05-22"));
    assert_eq!(value["due_date"], serde_json::Value::Null);
}

#[test]
fn invoice_serializes_decimals_as_numbers() {
    let value = serde_json::to_value(sample_invoice()).unwrap();
    let gross = value["gross_total"].as_f64().unwrap();
    assert!((gross - 76.16).abs() < 1e-9);
    assert!(value["net_total"].is_number());
}

#[test]
fn absent_fields_serialize_as_null() {
    let value = serde_json::to_value(Invoice::default()).unwrap();
    assert!(value["invoice_number"].is_null());
    assert!(value["gross_total"].is_null());
    assert_eq!(value["line_items"], json!([]));
}

#[test]
fn currency_round_trips_as_code() {
    let value = serde_json::to_value(sample_invoice()).unwrap();
    assert_eq!(value["currency"], json!("EUR"));

    let back: Invoice = serde_json::from_value(value).unwrap();
    assert_eq!(back.currency, Some(Currency::EUR));
}

#[test]
fn partial_json_deserializes_with_defaults() {
    let invoice: Invoice = serde_json::from_value(json!({
        "invoice_number": "INV-77",
        "gross_total": 100.0
    }))
    .unwrap();

    assert_eq!(invoice.invoice_number.as_deref(), Some("INV-77"));
    assert_eq!(invoice.gross_total, Some(dec!(100.0)));
    assert_eq!(invoice.seller_name, None);
    assert!(invoice.line_items.is_empty());
}

#[test]
fn invoice_round_trip_preserves_fields() {
    let original = sample_invoice();
    let text = serde_json::to_string(&original).unwrap();
    let back: Invoice = serde_json::from_str(&text).unwrap();
    assert_eq!(back, original);
}

#[test]
fn line_item_shape_is_stable() {
    let item = LineItem {
        description: Some("Beratung".into()),
        quantity: Some(dec!(10.0)),
        unit_price: Some(dec!(150.0)),
        line_total: Some(dec!(1500.0)),
    };
    let value = serde_json::to_value(&item).unwrap();
    assert_eq!(value["description"], json!("Beratung"));
    assert!(value["unit_price"].is_number());
}

#[test]
fn report_serializes_summary_and_details() {
    let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
    let batch = vec![sample_invoice(), Invoice::default()];
    let (details, summary) = validate_all_at(&batch, today);
    let report = ValidationReport { summary, details };

    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["summary"]["total_invoices"], json!(2));
    assert_eq!(value["summary"]["invalid_invoices"], json!(1));
    assert_eq!(value["details"][0]["invoice_id"], json!("AUFNR34343"));
    assert_eq!(value["details"][0]["is_valid"], json!(true));
    assert_eq!(
        value["summary"]["error_counts"]["missing_field: gross_total"],
        json!(1)
    );
}

#[test]
fn validation_result_errors_keep_order() {
    let value = serde_json::to_value(validate_invoice_at(
        &Invoice::default(),
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
    ))
    .unwrap();

    assert_eq!(
        value["errors"],
        json!([
            "missing_field: invoice_number",
            "missing_field: invoice_date",
            "missing_field: seller_name",
            "missing_field: buyer_name",
            "missing_field: gross_total",
        ])
    );
    assert_eq!(value["is_valid"], json!(false));
    assert_eq!(value["warnings"], json!([]));
}
