//! Billing details scanner.

use crate::models::invoice::BillingDetails;

use super::patterns::{
    BILLING_PERIOD_MARKER, CONSUMPTION_MARKER, HAS_DIGIT, NET_COST_MARKER, RATE_MARKER,
    TOTAL_DUE_MARKER, VAT_RATE_MARKER,
};
use super::value_after;

/// Single forward pass over the lines checking the billing markers.
///
/// Period, rate and consumption only accept the following line when it
/// contains a digit; the gate guards against capturing an unrelated heading
/// when the OCR layout drifts. Net cost and total are taken unconditionally,
/// and the VAT rate is read from the marker line itself. A repeated marker
/// overwrites the earlier value, and a gated value that fails the digit check
/// leaves a previously captured value in place.
pub fn extract_billing_details(lines: &[&str]) -> BillingDetails {
    let mut details = BillingDetails::default();

    for (i, line) in lines.iter().enumerate() {
        if line.contains(BILLING_PERIOD_MARKER) {
            if let Some(value) = numeric_value_after(lines, i) {
                details.period = Some(value);
            }
        }
        if line.contains(RATE_MARKER) {
            if let Some(value) = numeric_value_after(lines, i) {
                details.rate = Some(value);
            }
        }
        if line.contains(CONSUMPTION_MARKER) {
            if let Some(value) = numeric_value_after(lines, i) {
                details.consumption = Some(value);
            }
        }
        if line.contains(NET_COST_MARKER) {
            if let Some(value) = value_after(lines, i) {
                details.net_cost = Some(value);
            }
        }
        if let Some(rate) = vat_rate_on(line) {
            details.vat = Some(rate);
        }
        if line.contains(TOTAL_DUE_MARKER) {
            if let Some(value) = value_after(lines, i) {
                details.total = Some(value);
            }
        }
    }

    details
}

/// Following line, accepted only when it contains at least one digit.
fn numeric_value_after(lines: &[&str], index: usize) -> Option<String> {
    value_after(lines, index).filter(|value| HAS_DIGIT.is_match(value))
}

/// VAT percentage embedded in the marker line: the text after `"VAT @"` up to
/// the first `%`, trimmed, with a `%` suffix re-appended.
fn vat_rate_on(line: &str) -> Option<String> {
    let pos = line.rfind(VAT_RATE_MARKER)?;
    let after = &line[pos + VAT_RATE_MARKER.len()..];
    let rate = match after.split_once('%') {
        Some((head, _)) => head,
        None => after,
    };
    Some(format!("{}%", rate.trim()))
}
