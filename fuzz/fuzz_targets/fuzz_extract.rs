#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        // Must not panic — absent fields are fine, panics are bugs.
        let _ = belegcheck::extract::extract_invoice(text);
    }
});
