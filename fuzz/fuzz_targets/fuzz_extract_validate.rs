#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let invoice = belegcheck::extract::extract_invoice(text);

        let today = chrono::NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let result = belegcheck::core::validate_invoice_at(&invoice, today);

        // Validity and the error list must always agree.
        assert_eq!(result.is_valid, result.errors.is_empty());
    }
});
