//! The student-record model and the fixed-shape row parser.

use regex::Regex;
use serde::Serialize;

use crate::Error;

/// One row of the semester-result table.
///
/// A `StudentRecord` exists only if its source line matched the row pattern
/// in [`parse_records`]; partial records are never retained.  The parser
/// does not validate column semantics -- registration numbers are kept as
/// printed (string digits) and their uniqueness is not enforced here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentRecord {
    /// Sequence position as printed ("S.No").
    pub serial_number: String,
    /// Registration number, the stable identity of a row within a document.
    pub registration_number: String,
    /// Student name, whitespace-trimmed.
    pub name: String,
    /// Free-text span holding zero or more `code(grade/marks)` fragments.
    /// Opaque here; interpreted only by [`crate::filter`].
    pub subject_results: String,
    /// Short status token as printed (e.g. "PASS", "RL").
    pub status: String,
}

/// Row shape, anchored at line start only (trailing garbage is ignored,
/// matching the original report layout): serial number, registration
/// number, name, an ignored numeric field (total marks), the
/// subject-result text, and a status word.
const ROW_PATTERN: &str =
    r"^(\d+)\s+(\d+)\s+([A-Za-z\s]+)\s+(\d+)\s+([A-Za-z0-9\s,()/]+)\s+(\w+)";

/// Parse extracted document text into an ordered sequence of records.
///
/// Each line is matched against [`ROW_PATTERN`]; lines that do not match
/// the exact shape are dropped with no diagnostic.  The interior numeric
/// field between name and subject text is discarded.
///
/// # Errors
///
/// Returns [`Error::NoRowsParsed`] when zero lines match -- the only
/// integrity check performed.
pub fn parse_records(text: &str) -> Result<Vec<StudentRecord>, Error> {
    let row = Regex::new(ROW_PATTERN).unwrap();

    let records: Vec<StudentRecord> = text
        .lines()
        .filter_map(|line| {
            let caps = row.captures(line)?;
            Some(StudentRecord {
                serial_number: caps[1].to_string(),
                registration_number: caps[2].to_string(),
                name: caps[3].trim().to_string(),
                subject_results: caps[5].trim().to_string(),
                status: caps[6].trim().to_string(),
            })
        })
        .collect();

    if records.is_empty() {
        return Err(Error::NoRowsParsed);
    }

    Ok(records)
}
