//! Positional extraction rules for the energy-invoice template family.
//!
//! Each section scanner is an independent pure function over the same
//! normalized line sequence; the scanners share no state and can run in any
//! order. The layout knowledge (keyword anchors, fixed offsets) lives in
//! [`patterns`].

pub mod billing;
pub mod company;
pub mod customer;
pub mod metadata;
pub mod meters;
pub mod patterns;
pub mod payment;

pub use billing::extract_billing_details;
pub use company::extract_company_info;
pub use customer::extract_customer_info;
pub use metadata::extract_invoice_details;
pub use meters::extract_meter_readings;
pub use payment::extract_payment_details;

/// Trimmed content of the line after `index`, if one exists.
///
/// The template places most values on the line following their label, so this
/// is the common lookahead for label-anchored rules.
pub(crate) fn value_after(lines: &[&str], index: usize) -> Option<String> {
    lines.get(index + 1).map(|line| line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_after_stops_at_end() {
        let lines = ["Invoice Number:", "INV123"];
        assert_eq!(value_after(&lines, 0), Some("INV123".to_string()));
        assert_eq!(value_after(&lines, 1), None);
    }
}
