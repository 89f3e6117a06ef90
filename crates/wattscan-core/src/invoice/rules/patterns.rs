//! Keyword anchors and regex patterns for the invoice template family.

use lazy_static::lazy_static;
use regex::Regex;

// Company section
pub const VAT_NUMBER_MARKER: &str = "VAT No.";

// Customer section
pub const METER_ADDRESS_MARKER: &str = "Address Where Meter Installed:";

/// Line prefixes that terminate the customer address block.
pub const METER_ADDRESS_STOPS: [&str; 3] =
    ["Bill Payer Address", "Invoice Number", "Meter Serial Numbers"];

// Invoice metadata
pub const INVOICE_NUMBER_MARKER: &str = "Invoice Number:";
pub const INVOICE_DATE_MARKER: &str = "Invoice Date:";
pub const DUE_DATE_MARKER: &str = "Payment Due Date:";

// Billing details
pub const BILLING_PERIOD_MARKER: &str = "Billing Period";
pub const RATE_MARKER: &str = "Cost per kWh";
pub const CONSUMPTION_MARKER: &str = "Total Consumption";
pub const NET_COST_MARKER: &str = "Net Cost";
pub const VAT_RATE_MARKER: &str = "VAT @";
pub const TOTAL_DUE_MARKER: &str = "Total Amount Due";

// Payment details
pub const ACCOUNT_NAME_MARKER: &str = "Account Name";
pub const SORT_CODE_MARKER: &str = "Bank Sort Code";
pub const ACCOUNT_NUMBER_MARKER: &str = "Account Number";

lazy_static! {
    /// A line consisting solely of decimal digits (a meter serial candidate).
    pub static ref SERIAL_LINE: Regex = Regex::new(r"^\d+$").unwrap();

    /// Three-letter month abbreviation, case-sensitive as printed on the
    /// invoice template.
    pub static ref MONTH_ABBREV: Regex =
        Regex::new(r"Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec").unwrap();

    /// At least one digit anywhere in the line.
    pub static ref HAS_DIGIT: Regex = Regex::new(r"\d").unwrap();
}
