//! Invoice field extraction module.

mod extractor;
pub mod rules;

pub use extractor::{normalize_lines, LineScanExtractor};

use crate::models::analysis::AnalysisResult;
use crate::models::invoice::InvoiceRecord;

/// Trait for invoice field extractors.
///
/// Extraction is total: any input string yields a structurally complete
/// record, with fields that could not be recovered simply left absent.
pub trait InvoiceExtractor {
    /// Extract a structured record from a document-analysis result.
    fn extract(&self, analysis: &AnalysisResult) -> InvoiceRecord;

    /// Extract a structured record from plain OCR text.
    fn extract_from_text(&self, text: &str) -> InvoiceRecord;
}
