use std::path::PathBuf;

use colored::Colorize;
use resultsift_core::{filter_records, parse_records, xlsx, Mode};

use crate::prelude::{println, *};

#[derive(Debug, clap::Args)]
pub struct ExportOptions {
    /// Path to the semester-result PDF
    pub pdf: PathBuf,

    /// Subject code to filter on (e.g. "0095")
    pub subject_code: String,

    /// Filter mode: pass or reappear
    #[arg(value_name = "MODE")]
    pub mode: String,

    /// Output file path (defaults to {code}_{mode}_list.xlsx)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(options: ExportOptions, global: crate::Global) -> Result<()> {
    let mode: Mode = options.mode.parse().map_err(|e: String| eyre!(e))?;

    if global.verbose {
        println!("Extracting text from {}...", options.pdf.display());
    }

    let bytes = std::fs::read(&options.pdf)
        .wrap_err_with(|| format!("Failed to read {}", options.pdf.display()))?;
    let text = pdftext::extract_text(&bytes).wrap_err("Error processing the PDF")?;

    let records = parse_records(&text)?;
    log::debug!(
        "parsed {} records from {} extracted lines",
        records.len(),
        text.lines().count()
    );

    let filtered = filter_records(&records, &options.subject_code, mode)?;
    for record in &filtered {
        log::debug!(
            "selected {} ({}): {}",
            record.registration_number,
            record.name,
            record.subject_results
        );
    }

    let data = xlsx::to_xlsx(&filtered)?;

    let output = options
        .output
        .unwrap_or_else(|| PathBuf::from(xlsx::export_file_name(&options.subject_code, mode)));
    std::fs::write(&output, &data)
        .wrap_err_with(|| format!("Failed to write {}", output.display()))?;

    println!(
        "{}",
        format!(
            "Filtered {} list for subject code '{}' written to {} ({} students)",
            mode,
            options.subject_code,
            output.display(),
            filtered.len()
        )
        .green()
    );

    Ok(())
}
