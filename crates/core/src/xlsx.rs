//! Spreadsheet serialization of a filtered record set.
//!
//! A pure serialization step: no filtering, validation, or transformation
//! happens here.  The output is the finished `.xlsx` binary, so the shell
//! only has to write bytes to disk.

use rust_xlsxwriter::{Format, Workbook};

use crate::{Error, Mode, StudentRecord};

/// Column headers of the exported sheet, in order.
pub const COLUMNS: [&str; 5] = [
    "S.No",
    "Registration No",
    "Name",
    "Re-appear in Subject Codes",
    "Status",
];

/// Name of the single sheet in the exported workbook.
pub const SHEET_NAME: &str = "Filtered Results";

/// Serialize records into a single-sheet workbook binary.
///
/// The sheet is named [`SHEET_NAME`] and holds a bold header row followed
/// by one row per record, with no index column.
pub fn to_xlsx(records: &[StudentRecord]) -> Result<Vec<u8>, Error> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    let bold = Format::new().set_bold();
    for (col, header) in COLUMNS.iter().enumerate() {
        worksheet.write_with_format(0, col as u16, *header, &bold)?;
    }

    for (i, record) in records.iter().enumerate() {
        let row = i as u32 + 1;
        worksheet.write(row, 0, record.serial_number.as_str())?;
        worksheet.write(row, 1, record.registration_number.as_str())?;
        worksheet.write(row, 2, record.name.as_str())?;
        worksheet.write(row, 3, record.subject_results.as_str())?;
        worksheet.write(row, 4, record.status.as_str())?;
    }

    Ok(workbook.save_to_buffer()?)
}

/// Default artifact name: `{code}_{mode}_list.xlsx` with the mode
/// lowercased.
pub fn export_file_name(code: &str, mode: Mode) -> String {
    format!("{code}_{mode}_list.xlsx")
}
