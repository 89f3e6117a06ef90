//! Line-scan extraction engine for the energy-invoice template family.

use std::panic::{self, AssertUnwindSafe};

use tracing::{info, warn};

use crate::models::analysis::AnalysisResult;
use crate::models::invoice::InvoiceRecord;

use super::rules;
use super::InvoiceExtractor;

/// Normalize raw OCR text into the line sequence all scanners index into:
/// split on line breaks, trim each line, and drop lines that become empty.
/// Order is preserved, so positional offsets ("the next line") are relative
/// to this filtered sequence, not the original text.
pub fn normalize_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Extractor that recovers structured fields from flattened OCR text using
/// positional heuristics only: keyword anchors, fixed offsets and lookahead
/// over one normalized line sequence.
///
/// Stateless; one value can serve any number of concurrent extractions.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineScanExtractor;

impl LineScanExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl InvoiceExtractor for LineScanExtractor {
    fn extract(&self, analysis: &AnalysisResult) -> InvoiceRecord {
        self.extract_from_text(&analysis.content)
    }

    fn extract_from_text(&self, text: &str) -> InvoiceRecord {
        let lines = normalize_lines(text);
        info!(
            "scanning {} normalized lines ({} bytes of OCR text)",
            lines.len(),
            text.len()
        );

        let mut record = InvoiceRecord::default();
        let mut faults: Vec<String> = Vec::new();

        if let Some(section) = guard("company_info", &mut faults, || {
            rules::extract_company_info(&lines)
        }) {
            record.company_info = section;
        }
        if let Some(section) = guard("customer_info", &mut faults, || {
            rules::extract_customer_info(&lines)
        }) {
            record.customer_info = section;
        }
        if let Some(section) = guard("invoice_details", &mut faults, || {
            rules::extract_invoice_details(&lines)
        }) {
            record.invoice_details = section;
        }
        if let Some(section) = guard("meter_readings", &mut faults, || {
            rules::extract_meter_readings(&lines)
        }) {
            record.meter_readings = section;
        }
        if let Some(section) = guard("billing_details", &mut faults, || {
            rules::extract_billing_details(&lines)
        }) {
            record.billing_details = section;
        }
        if let Some(section) = guard("payment_details", &mut faults, || {
            rules::extract_payment_details(&lines)
        }) {
            record.payment_details = section;
        }

        if !faults.is_empty() {
            record.extraction_error = Some(faults.join("; "));
        }

        record
    }
}

/// Run one section scanner, converting an unexpected panic into a recorded
/// fault instead of propagating. Sections completed before a fault keep
/// their data; the faulting section falls back to its default.
fn guard<T>(section: &str, faults: &mut Vec<String>, scan: impl FnOnce() -> T) -> Option<T> {
    match panic::catch_unwind(AssertUnwindSafe(scan)) {
        Ok(value) => Some(value),
        Err(payload) => {
            let reason = if let Some(message) = payload.downcast_ref::<&str>() {
                (*message).to_string()
            } else if let Some(message) = payload.downcast_ref::<String>() {
                message.clone()
            } else {
                "unknown panic".to_string()
            };
            warn!("{section} scan aborted: {reason}");
            faults.push(format!("{section}: {reason}"));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::invoice::MeterType;
    use pretty_assertions::assert_eq;

    const SAMPLE_INVOICE: &str = "\
Green Energy Ltd
1 Supply House
10 Grid Road
London SW1A 1AA
VAT No.: 123456789

Address Where Meter Installed:
456 Customer Street
Customer City
Invoice Number:
INV123
Invoice Date:
2024-03-20
Payment Due Date:
2024-04-20

Meter Serial Numbers
12345
Generation
1000
2024-02-20
2000
2024-03-20
67890
Import
500
2024-02-20
600
2024-03-20

Billing Period
20 Feb 2024 - 20 Mar 2024
Cost per kWh
0.15
Total Consumption
1000
Net Cost
150.00
VAT @ 20% of Net
30.00
Total Amount Due
180.00

Account Name
Green Energy Ltd
Bank Sort Code
12-34-56
Account Number
12345678
";

    #[test]
    fn normalize_drops_blank_and_trims() {
        let lines = normalize_lines("  a  \n\n\t\n b\r\nc ");
        assert_eq!(lines, vec!["a", "b", "c"]);
    }

    #[test]
    fn normalize_empty_input_yields_no_lines() {
        assert!(normalize_lines("").is_empty());
        assert!(normalize_lines(" \n\t\n  ").is_empty());
    }

    #[test]
    fn empty_input_yields_empty_but_complete_record() {
        let record = LineScanExtractor::new().extract_from_text("");
        assert!(record.is_empty());
        assert_eq!(record.extraction_error, None);

        // The serialized form still carries every section.
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["meter_readings"], serde_json::json!([]));
        assert_eq!(json["billing_details"], serde_json::json!({}));
    }

    #[test]
    fn extracts_full_sample_invoice() {
        let record = LineScanExtractor::new().extract_from_text(SAMPLE_INVOICE);

        assert_eq!(
            record.company_info.address.as_deref(),
            Some("Green Energy Ltd 1 Supply House 10 Grid Road London SW1A 1AA")
        );
        assert_eq!(record.company_info.vat_number.as_deref(), Some("123456789"));

        assert_eq!(
            record.customer_info.address.as_deref(),
            Some("456 Customer Street Customer City")
        );

        assert_eq!(record.invoice_details.number.as_deref(), Some("INV123"));
        assert_eq!(record.invoice_details.date.as_deref(), Some("2024-03-20"));
        assert_eq!(record.invoice_details.due_date.as_deref(), Some("2024-04-20"));

        // The import meter is filtered out.
        assert_eq!(record.meter_readings.len(), 1);
        let reading = &record.meter_readings[0];
        assert_eq!(reading.meter_type, MeterType::Generation);
        assert_eq!(reading.serial_number, "12345");
        assert_eq!(reading.start_reading.value, "1000");
        assert_eq!(reading.start_reading.date, "2024-02-20");
        assert_eq!(reading.end_reading.value, "2000");
        assert_eq!(reading.end_reading.date, "2024-03-20");

        assert_eq!(
            record.billing_details.period.as_deref(),
            Some("20 Feb 2024 - 20 Mar 2024")
        );
        assert_eq!(record.billing_details.rate.as_deref(), Some("0.15"));
        assert_eq!(record.billing_details.consumption.as_deref(), Some("1000"));
        assert_eq!(record.billing_details.net_cost.as_deref(), Some("150.00"));
        assert_eq!(record.billing_details.vat.as_deref(), Some("20%"));
        assert_eq!(record.billing_details.total.as_deref(), Some("180.00"));

        assert_eq!(
            record.payment_details.account_name.as_deref(),
            Some("Green Energy Ltd")
        );
        assert_eq!(record.payment_details.sort_code.as_deref(), Some("12-34-56"));
        assert_eq!(
            record.payment_details.account_number.as_deref(),
            Some("12345678")
        );

        assert_eq!(record.extraction_error, None);
    }

    #[test]
    fn offsets_are_relative_to_filtered_lines() {
        // Blank lines inside a meter block must not break the fixed offsets.
        let text = "12345\n\nGeneration\n\n1000\n2024-02-20\n\n2000\n2024-03-20\n";
        let record = LineScanExtractor::new().extract_from_text(text);
        assert_eq!(record.meter_readings.len(), 1);
    }

    #[test]
    fn extract_uses_analysis_content_only() {
        let analysis = AnalysisResult::from_text("Invoice Number:\nINV999");
        let record = LineScanExtractor::new().extract(&analysis);
        assert_eq!(record.invoice_details.number.as_deref(), Some("INV999"));
    }

    #[test]
    fn sample_record_round_trips_through_json() {
        let record = LineScanExtractor::new().extract_from_text(SAMPLE_INVOICE);
        let json = serde_json::to_string(&record).unwrap();
        let back: InvoiceRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }

    #[test]
    fn guard_turns_panic_into_fault() {
        let mut faults = Vec::new();
        let result: Option<()> = guard("billing_details", &mut faults, || {
            panic!("index out of bounds")
        });
        assert_eq!(result, None);
        assert_eq!(faults, vec!["billing_details: index out of bounds".to_string()]);
    }
}
