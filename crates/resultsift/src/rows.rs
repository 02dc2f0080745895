use std::path::PathBuf;

use resultsift_core::{parse_records, xlsx};

use crate::prelude::{new_table, println, *};

#[derive(Debug, clap::Args)]
pub struct RowsOptions {
    /// Path to the semester-result PDF
    pub pdf: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(options: RowsOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("Extracting text from {}...", options.pdf.display());
    }

    let bytes = std::fs::read(&options.pdf)
        .wrap_err_with(|| format!("Failed to read {}", options.pdf.display()))?;
    let text = pdftext::extract_text(&bytes).wrap_err("Error processing the PDF")?;
    let records = parse_records(&text)?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    let mut table = new_table();
    table.add_row(prettytable::Row::from(xlsx::COLUMNS));
    for record in &records {
        table.add_row(prettytable::row![
            record.serial_number,
            record.registration_number,
            record.name,
            record.subject_results,
            record.status
        ]);
    }
    table.printstd();

    println!();
    println!("{} rows parsed", records.len());

    Ok(())
}
