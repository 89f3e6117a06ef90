//! Core library for structured extraction from OCR'd energy invoices.
//!
//! This crate provides:
//! - Contract types for the upstream document-analysis output
//! - Line normalization for flattened OCR text
//! - The line-scan extraction engine and its per-section rules
//! - The structured invoice record models

pub mod error;
pub mod invoice;
pub mod models;

pub use error::{Result, WattscanError};
pub use invoice::{normalize_lines, InvoiceExtractor, LineScanExtractor};
pub use models::analysis::{AnalysisResult, CombinedOutput, Page, Point, Word};
pub use models::invoice::{
    BillingDetails, CompanyInfo, CustomerInfo, InvoiceDetails, InvoiceRecord, MeterReading,
    MeterType, PaymentDetails, Reading,
};
