//! Invoice number and date scanner.

use crate::models::invoice::InvoiceDetails;

use super::patterns::{DUE_DATE_MARKER, INVOICE_DATE_MARKER, INVOICE_NUMBER_MARKER};
use super::value_after;

/// Single forward pass over the lines, taking the line after each metadata
/// label. The three label checks are independent; a repeated label overwrites
/// the earlier value (last match wins).
pub fn extract_invoice_details(lines: &[&str]) -> InvoiceDetails {
    let mut details = InvoiceDetails::default();

    for (i, line) in lines.iter().enumerate() {
        if line.contains(INVOICE_NUMBER_MARKER) {
            if let Some(value) = value_after(lines, i) {
                details.number = Some(value);
            }
        }
        if line.contains(INVOICE_DATE_MARKER) {
            if let Some(value) = value_after(lines, i) {
                details.date = Some(value);
            }
        }
        if line.contains(DUE_DATE_MARKER) {
            if let Some(value) = value_after(lines, i) {
                details.due_date = Some(value);
            }
        }
    }

    details
}
