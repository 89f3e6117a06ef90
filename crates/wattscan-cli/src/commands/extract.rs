//! Extract command - structured data from a single OCR dump.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use wattscan_core::{CombinedOutput, InvoiceExtractor, InvoiceRecord, LineScanExtractor};

use super::load_input;
use crate::notify;

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Input file (.txt OCR dump or .json analysis result)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Emit the combined document (structured record plus raw content)
    #[arg(long)]
    combined: bool,

    /// Send a webhook notification when done
    #[arg(long)]
    notify: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Plain text summary
    Text,
}

pub async fn run(args: ExtractArgs) -> anyhow::Result<()> {
    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());
    let analysis = load_input(&args.input)?;

    let extractor = LineScanExtractor::new();
    let record = extractor.extract(&analysis);

    if let Some(fault) = &record.extraction_error {
        eprintln!("{} {fault}", style("Extraction fault:").yellow());
    }

    let output = match args.format {
        OutputFormat::Json if args.combined => {
            to_json(&CombinedOutput::new(record, analysis), args.pretty)?
        }
        OutputFormat::Json => to_json(&record, args.pretty)?,
        OutputFormat::Text => {
            if args.combined {
                anyhow::bail!("--combined requires JSON output");
            }
            format_summary(&record)
        }
    };

    match &args.output {
        Some(path) => {
            fs::write(path, &output)?;
            println!(
                "{} {}",
                style("Result written to").green(),
                path.display()
            );
        }
        None => println!("{output}"),
    }

    if args.notify {
        let target = args
            .output
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "stdout".to_string());
        notify::send_all(&format!(
            "Invoice extraction complete!\nFile: {}\nResult saved as: {target}",
            args.input.display()
        ))
        .await;
    }

    Ok(())
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> anyhow::Result<String> {
    Ok(if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    })
}

fn format_summary(record: &InvoiceRecord) -> String {
    let mut out = String::new();
    let field = |label: &str, value: &Option<String>| {
        format!("  {label}: {}\n", value.as_deref().unwrap_or("-"))
    };

    out.push_str("Company\n");
    out.push_str(&field("address", &record.company_info.address));
    out.push_str(&field("vat number", &record.company_info.vat_number));

    out.push_str("Customer\n");
    out.push_str(&field("address", &record.customer_info.address));

    out.push_str("Invoice\n");
    out.push_str(&field("number", &record.invoice_details.number));
    out.push_str(&field("date", &record.invoice_details.date));
    out.push_str(&field("due date", &record.invoice_details.due_date));

    out.push_str(&format!("Meter readings ({})\n", record.meter_readings.len()));
    for reading in &record.meter_readings {
        out.push_str(&format!(
            "  {} #{}: {} ({}) -> {} ({})\n",
            reading.meter_type,
            reading.serial_number,
            reading.start_reading.value,
            reading.start_reading.date,
            reading.end_reading.value,
            reading.end_reading.date,
        ));
    }

    out.push_str("Billing\n");
    out.push_str(&field("period", &record.billing_details.period));
    out.push_str(&field("rate", &record.billing_details.rate));
    out.push_str(&field("consumption", &record.billing_details.consumption));
    out.push_str(&field("net cost", &record.billing_details.net_cost));
    out.push_str(&field("vat", &record.billing_details.vat));
    out.push_str(&field("total", &record.billing_details.total));

    out.push_str("Payment\n");
    out.push_str(&field("account name", &record.payment_details.account_name));
    out.push_str(&field("sort code", &record.payment_details.sort_code));
    out.push_str(&field("account number", &record.payment_details.account_number));

    out
}
