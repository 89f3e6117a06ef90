//! Batch command - extract from many files matching a glob pattern.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error};

use wattscan_core::{CombinedOutput, InvoiceExtractor, LineScanExtractor};

use super::{load_input, output_file_name};
use crate::notify;

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    pattern: String,

    /// Output directory (default: current directory)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Pretty-print JSON output files
    #[arg(long)]
    pretty: bool,

    /// Emit combined documents (structured record plus raw content)
    #[arg(long)]
    combined: bool,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,

    /// Send a webhook notification with the batch summary
    #[arg(long)]
    notify: bool,
}

pub async fn run(args: BatchArgs) -> anyhow::Result<()> {
    let start = Instant::now();

    let inputs: Vec<PathBuf> = glob(&args.pattern)?
        .filter_map(|entry| entry.ok())
        .filter(|path| path.is_file())
        .collect();

    if inputs.is_empty() {
        anyhow::bail!("No files match pattern: {}", args.pattern);
    }

    let output_dir = args.output_dir.clone().unwrap_or_else(|| PathBuf::from("."));
    fs::create_dir_all(&output_dir)?;

    let pb = ProgressBar::new(inputs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("##-"),
    );

    let extractor = LineScanExtractor::new();
    let mut processed = 0usize;
    let mut failed = 0usize;

    for input in &inputs {
        pb.set_message(input.display().to_string());

        match process_one(&extractor, input, &output_dir, args.pretty, args.combined) {
            Ok(output_path) => {
                debug!("{} -> {}", input.display(), output_path.display());
                processed += 1;
            }
            Err(e) => {
                error!("failed to process {}: {e}", input.display());
                failed += 1;
                if !args.continue_on_error {
                    pb.abandon();
                    return Err(e.context(format!("processing {}", input.display())));
                }
            }
        }

        pb.inc(1);
    }

    pb.finish_with_message("Done");

    let elapsed = start.elapsed();
    println!(
        "{} {processed} processed, {failed} failed in {:.1}s",
        style("Batch complete:").green(),
        elapsed.as_secs_f64()
    );

    if args.notify {
        notify::send_all(&format!(
            "Batch extraction complete!\nPattern: {}\nProcessed: {processed}\nFailed: {failed}",
            args.pattern
        ))
        .await;
    }

    Ok(())
}

fn process_one(
    extractor: &LineScanExtractor,
    input: &PathBuf,
    output_dir: &PathBuf,
    pretty: bool,
    combined: bool,
) -> anyhow::Result<PathBuf> {
    let analysis = load_input(input)?;
    let record = extractor.extract(&analysis);

    let json = if combined {
        let output = CombinedOutput::new(record, analysis);
        if pretty {
            serde_json::to_string_pretty(&output)?
        } else {
            serde_json::to_string(&output)?
        }
    } else if pretty {
        serde_json::to_string_pretty(&record)?
    } else {
        serde_json::to_string(&record)?
    };

    let output_path = output_dir.join(output_file_name(input));
    fs::write(&output_path, json)?;
    Ok(output_path)
}
