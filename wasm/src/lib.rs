//! WebAssembly module for the Pharmacy Inventory Management Platform
//!
//! Provides client-side computation for:
//! - Expiry classification from the browser's wall clock
//! - Currency and timestamp formatting
//! - Offline input validation

use chrono::NaiveDate;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages in browser console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    web_sys::console::log_1(&"pharmacy inventory wasm module loaded".into());
}

/// Days until the given expiry date, relative to the browser's clock
#[wasm_bindgen]
pub fn days_until_expiry(expiry_date: &str) -> Result<i32, JsValue> {
    let expiry = parse_date(expiry_date)?;
    Ok(days_between(today(), expiry) as i32)
}

/// Classify a batch expiry date against the browser's clock.
///
/// Returns `critical`, `warning`, or `normal`; the same batch can change
/// category across reloads without its data changing.
#[wasm_bindgen]
pub fn classify_expiry(expiry_date: &str) -> Result<String, JsValue> {
    let expiry = parse_date(expiry_date)?;
    Ok(classify_expiry_on(expiry, today()).to_string())
}

/// Classify a batch expiry date as observed from a given date
pub fn classify_expiry_on(expiry: NaiveDate, today: NaiveDate) -> ExpiryStatus {
    ExpiryStatus::from_days_left(days_between(today, expiry))
}

/// Format a price the way the tables render it (VND, grouped thousands)
#[wasm_bindgen]
pub fn format_price(price: f64) -> String {
    let negative = price < 0.0;
    let rounded = price.abs().round() as u64;
    let digits = rounded.to_string();

    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    if negative {
        format!("-{} ₫", grouped)
    } else {
        format!("{} ₫", grouped)
    }
}

/// Format an RFC 3339 timestamp in the browser's vi-VN locale
#[wasm_bindgen]
pub fn format_timestamp(timestamp: &str) -> String {
    let date = js_sys::Date::new(&JsValue::from_str(timestamp));
    date.to_locale_string("vi-VN", &JsValue::UNDEFINED).into()
}

/// Validate a sell amount against available stock before submitting
#[wasm_bindgen]
pub fn validate_sell_amount(amount: u32, available: u32) -> bool {
    validate_quantity(amount).is_ok() && amount <= available
}

/// Validate a transfer quantity against the source batch before submitting
#[wasm_bindgen]
pub fn validate_transfer_amount(quantity: u32, available: u32) -> bool {
    validate_transfer_quantity(quantity, available).is_ok()
}

fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

fn parse_date(value: &str) -> Result<NaiveDate, JsValue> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| JsValue::from_str(&format!("Invalid date: {}", e)))
}

/// Current date from the browser's clock
fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
    .expect("browser clock yields a valid date")
}
