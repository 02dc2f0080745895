use crate::filter::Mode;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Zero lines of the extracted text matched the row pattern.
    #[error("no valid data could be parsed -- check the PDF format")]
    NoRowsParsed,

    /// The filter criteria selected zero records.
    #[error("no students found for subject code '{code}' with the '{mode}' criteria")]
    NoMatches { code: String, mode: Mode },

    /// Spreadsheet serialization failed.
    #[error("spreadsheet serialization failed: {0}")]
    Spreadsheet(#[from] rust_xlsxwriter::XlsxError),
}
