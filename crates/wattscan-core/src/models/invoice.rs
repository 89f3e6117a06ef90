//! Structured invoice record models for energy/utility invoices.

use serde::{Deserialize, Serialize};

/// The complete structured record extracted from one invoice.
///
/// Every section is always present; individual fields are omitted from the
/// serialized form when they could not be recovered from the text. The record
/// is a best-effort partial extraction, never an all-or-nothing result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvoiceRecord {
    /// Supplier company information.
    pub company_info: CompanyInfo,

    /// Customer (supply point) information.
    pub customer_info: CustomerInfo,

    /// Invoice number and dates.
    pub invoice_details: InvoiceDetails,

    /// Per-meter readings, in document order.
    pub meter_readings: Vec<MeterReading>,

    /// Billing period, rate, consumption and totals.
    pub billing_details: BillingDetails,

    /// Bank payment details.
    pub payment_details: PaymentDetails,

    /// Description of an internal fault hit during extraction, if any.
    /// Partial data assembled before the fault is still present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extraction_error: Option<String>,
}

impl InvoiceRecord {
    /// Check whether no field in any section was populated.
    pub fn is_empty(&self) -> bool {
        self.company_info.is_empty()
            && self.customer_info.is_empty()
            && self.invoice_details.is_empty()
            && self.meter_readings.is_empty()
            && self.billing_details.is_empty()
            && self.payment_details.is_empty()
    }
}

/// Supplier company details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyInfo {
    /// Company postal address (space-joined lines above the VAT number).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// VAT registration number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_number: Option<String>,
}

impl CompanyInfo {
    pub fn is_empty(&self) -> bool {
        self.address.is_none() && self.vat_number.is_none()
    }
}

/// Customer details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerInfo {
    /// Address where the meter is installed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl CustomerInfo {
    pub fn is_empty(&self) -> bool {
        self.address.is_none()
    }
}

/// Invoice identification and dates.
///
/// All values are kept as the raw strings found in the document; the source
/// templates are not consistent enough to commit to a date format here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvoiceDetails {
    /// Invoice number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,

    /// Invoice issue date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    /// Payment due date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
}

impl InvoiceDetails {
    pub fn is_empty(&self) -> bool {
        self.number.is_none() && self.date.is_none() && self.due_date.is_none()
    }
}

/// Kind of meter a reading block belongs to.
///
/// Only generation and export meters are carried through to the output;
/// blocks for any other meter kind (e.g. import) are filtered out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeterType {
    Generation,
    Export,
}

impl MeterType {
    /// Parse an already-lowercased meter type label. Returns `None` for any
    /// label other than the two retained kinds.
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "generation" => Some(Self::Generation),
            "export" => Some(Self::Export),
            _ => None,
        }
    }
}

impl std::fmt::Display for MeterType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Generation => write!(f, "generation"),
            Self::Export => write!(f, "export"),
        }
    }
}

/// A single meter reading value with its date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub value: String,
    pub date: String,
}

/// One meter's start/end readings for the billing period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeterReading {
    /// Meter kind (generation or export).
    #[serde(rename = "type")]
    pub meter_type: MeterType,

    /// Meter serial number.
    pub serial_number: String,

    /// Reading at the start of the period.
    pub start_reading: Reading,

    /// Reading at the end of the period.
    pub end_reading: Reading,
}

/// Billing totals and rate information.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BillingDetails {
    /// Billing period description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,

    /// Cost per kWh.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<String>,

    /// Total consumption for the period.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumption: Option<String>,

    /// Net cost before VAT.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub net_cost: Option<String>,

    /// VAT rate, e.g. "20%".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat: Option<String>,

    /// Total amount due.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<String>,
}

impl BillingDetails {
    pub fn is_empty(&self) -> bool {
        self.period.is_none()
            && self.rate.is_none()
            && self.consumption.is_none()
            && self.net_cost.is_none()
            && self.vat.is_none()
            && self.total.is_none()
    }
}

/// Bank details for paying the invoice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
}

impl PaymentDetails {
    pub fn is_empty(&self) -> bool {
        self.account_name.is_none() && self.sort_code.is_none() && self.account_number.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_record_serializes_with_all_sections() {
        let record = InvoiceRecord::default();
        let json = serde_json::to_value(&record).unwrap();

        for section in [
            "company_info",
            "customer_info",
            "invoice_details",
            "meter_readings",
            "billing_details",
            "payment_details",
        ] {
            assert!(json.get(section).is_some(), "missing section {section}");
        }
        // Absent fields are omitted, not serialized as null.
        assert_eq!(json["company_info"], serde_json::json!({}));
        assert!(json.get("extraction_error").is_none());
    }

    #[test]
    fn meter_reading_serializes_type_tag() {
        let reading = MeterReading {
            meter_type: MeterType::Generation,
            serial_number: "12345".to_string(),
            start_reading: Reading {
                value: "1000".to_string(),
                date: "2024-02-20".to_string(),
            },
            end_reading: Reading {
                value: "2000".to_string(),
                date: "2024-03-20".to_string(),
            },
        };

        let json = serde_json::to_value(&reading).unwrap();
        assert_eq!(json["type"], "generation");
        assert_eq!(json["start_reading"]["value"], "1000");
    }

    #[test]
    fn meter_type_parse_rejects_import() {
        assert_eq!(MeterType::parse("generation"), Some(MeterType::Generation));
        assert_eq!(MeterType::parse("export"), Some(MeterType::Export));
        assert_eq!(MeterType::parse("import"), None);
        assert_eq!(MeterType::parse("Generation"), None);
    }

    #[test]
    fn record_round_trips_through_json() {
        let record = InvoiceRecord {
            billing_details: BillingDetails {
                vat: Some("20%".to_string()),
                total: Some("180.00".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };

        let json = serde_json::to_string(&record).unwrap();
        let back: InvoiceRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}
