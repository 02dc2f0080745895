#![allow(unused)]

use crate::prelude::*;
use clap::Parser;

mod export;
mod prelude;
mod rows;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Filter semester-result PDFs by subject code and pass/reappear status"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(
        long,
        env = "RESULTSIFT_VERBOSE",
        global = true,
        default_value = "false"
    )]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Export a filtered student list as an .xlsx spreadsheet
    Export(export::ExportOptions),

    /// Preview the rows parsed from a result PDF
    Rows(rows::RowsOptions),
}

fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Export(options) => export::run(options, app.global),
        SubCommands::Rows(options) => rows::run(options, app.global),
    }
}
