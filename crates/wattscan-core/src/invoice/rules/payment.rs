//! Payment details scanner.

use crate::models::invoice::PaymentDetails;

use super::patterns::{ACCOUNT_NAME_MARKER, ACCOUNT_NUMBER_MARKER, SORT_CODE_MARKER};
use super::value_after;

/// Single forward pass taking the line after each bank-detail label.
/// Last match wins, as elsewhere.
pub fn extract_payment_details(lines: &[&str]) -> PaymentDetails {
    let mut details = PaymentDetails::default();

    for (i, line) in lines.iter().enumerate() {
        if line.contains(ACCOUNT_NAME_MARKER) {
            if let Some(value) = value_after(lines, i) {
                details.account_name = Some(value);
            }
        }
        if line.contains(SORT_CODE_MARKER) {
            if let Some(value) = value_after(lines, i) {
                details.sort_code = Some(value);
            }
        }
        if line.contains(ACCOUNT_NUMBER_MARKER) {
            if let Some(value) = value_after(lines, i) {
                details.account_number = Some(value);
            }
        }
    }

    details
}
