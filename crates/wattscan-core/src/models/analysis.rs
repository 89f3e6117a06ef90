//! Contract types for the upstream document-analysis (OCR) service output.
//!
//! The extraction engine consumes only `content`; page geometry is carried
//! through verbatim so the combined output matches what the analysis service
//! produced.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::invoice::InvoiceRecord;

/// Output of one document-analysis call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Full document text with line breaks.
    pub content: String,

    /// Per-page word and geometry data. Unused by extraction.
    #[serde(default)]
    pub pages: Vec<Page>,
}

impl AnalysisResult {
    /// Wrap a plain OCR text dump with no page data.
    pub fn from_text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            pages: Vec::new(),
        }
    }

    /// Parse an analysis result from its JSON serialization.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse an analysis result JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

/// One page of the analyzed document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub page_number: u32,
    pub width: f64,
    pub height: f64,
    pub unit: String,

    #[serde(default)]
    pub words: Vec<Word>,
}

/// One recognized word with its OCR confidence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Word {
    pub text: String,
    pub confidence: f64,

    /// Bounding polygon, when the service reported one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub polygon: Option<Vec<Point>>,
}

/// A point of a word's bounding polygon.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// The persisted document: structured record plus the raw analysis output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinedOutput {
    pub structured_data: InvoiceRecord,
    pub raw_content: RawContent,
}

/// Raw analysis output carried alongside the structured record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawContent {
    pub text: String,
    pub pages: Vec<Page>,
}

impl CombinedOutput {
    pub fn new(structured_data: InvoiceRecord, analysis: AnalysisResult) -> Self {
        Self {
            structured_data,
            raw_content: RawContent {
                text: analysis.content,
                pages: analysis.pages,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_analysis_json_with_pages() {
        let json = r#"{
            "content": "Invoice Number:\nINV123",
            "pages": [
                {
                    "page_number": 1,
                    "width": 8.5,
                    "height": 11.0,
                    "unit": "inch",
                    "words": [
                        {
                            "text": "Invoice",
                            "confidence": 0.99,
                            "polygon": [{"x": 1.0, "y": 1.0}, {"x": 2.0, "y": 1.0}]
                        },
                        {"text": "Number:", "confidence": 0.98}
                    ]
                }
            ]
        }"#;

        let analysis = AnalysisResult::from_json(json).unwrap();
        assert_eq!(analysis.content, "Invoice Number:\nINV123");
        assert_eq!(analysis.pages.len(), 1);
        assert_eq!(analysis.pages[0].words.len(), 2);
        assert!(analysis.pages[0].words[1].polygon.is_none());
    }

    #[test]
    fn parses_analysis_json_without_pages() {
        let analysis = AnalysisResult::from_json(r#"{"content": "hello"}"#).unwrap();
        assert_eq!(analysis.content, "hello");
        assert!(analysis.pages.is_empty());
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(AnalysisResult::from_json("{not json").is_err());
    }

    #[test]
    fn combined_output_carries_raw_text() {
        let analysis = AnalysisResult::from_text("some text");
        let combined = CombinedOutput::new(InvoiceRecord::default(), analysis);
        assert_eq!(combined.raw_content.text, "some text");

        let json = serde_json::to_value(&combined).unwrap();
        assert!(json.get("structured_data").is_some());
        assert_eq!(json["raw_content"]["text"], "some text");
    }
}
