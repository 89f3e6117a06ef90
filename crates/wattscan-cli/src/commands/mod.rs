//! CLI subcommands.

pub mod batch;
pub mod extract;

use std::path::Path;

use wattscan_core::AnalysisResult;

/// Load an input file as an analysis result.
///
/// `.json` files are parsed as analysis-result documents; `.txt`/`.text`
/// files are treated as a plain OCR text dump with no page data.
pub fn load_input(path: &Path) -> anyhow::Result<AnalysisResult> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match extension.as_str() {
        "json" => Ok(AnalysisResult::from_file(path)?),
        "txt" | "text" => {
            let content = std::fs::read_to_string(path)?;
            Ok(AnalysisResult::from_text(content))
        }
        _ => anyhow::bail!("unsupported input format: {}", path.display()),
    }
}

/// Output file name for an input, in the upstream pipeline's naming scheme:
/// `<stem>_<YYYYmmdd_HHMMSS>.json`.
pub fn output_file_name(input: &Path) -> String {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("result");
    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    format!("{stem}_{timestamp}.json")
}
