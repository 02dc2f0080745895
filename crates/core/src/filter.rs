//! Subject-code / pass-reappear selection over parsed records.
//!
//! The filter is a pure function: records in, records out, no diagnostics.
//! Callers that want per-record visibility log around it.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use regex::Regex;
use serde::Serialize;

use crate::{Error, StudentRecord};

/// Minimum marks required to be considered passed in a subject.
pub const PASS_MARK: u64 = 30;

/// Filter criterion: keep students who cleared the subject, or those who
/// must re-appear for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Pass,
    Reappear,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Pass => "pass",
            Mode::Reappear => "reappear",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pass" => Ok(Mode::Pass),
            "reappear" => Ok(Mode::Reappear),
            other => Err(format!(
                "Invalid mode: {other}. Valid modes: pass, reappear"
            )),
        }
    }
}

/// One `code(grade/marks)` fragment found in a record's subject-result text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubjectMark {
    pub grade: String,
    pub marks: u64,
}

/// Find every `<code>(<grade>/<marks>)` fragment for `code` in a record's
/// subject-result text.
///
/// The user-supplied code is escaped before being interpolated into the
/// pattern, so codes containing regex metacharacters match literally.
pub fn subject_marks(subject_results: &str, code: &str) -> Vec<SubjectMark> {
    let pattern = format!(r"{}\s*\((\w+)/(\d+)\)", regex::escape(code));
    // Escaping guarantees a valid pattern.
    let fragment = Regex::new(&pattern).unwrap();

    fragment
        .captures_iter(subject_results)
        .map(|caps| SubjectMark {
            grade: caps[1].to_string(),
            // The capture is digits-only, so the only possible failure is
            // overflow; saturate, since any such value is above the pass
            // mark regardless.
            marks: caps[2].parse::<u64>().unwrap_or(u64::MAX),
        })
        .collect()
}

/// Returns `true` when `marks` satisfies the mode rule.
fn qualifies(marks: u64, mode: Mode) -> bool {
    match mode {
        Mode::Pass => marks >= PASS_MARK,
        Mode::Reappear => marks < PASS_MARK,
    }
}

/// Select the records whose subject-result text contains at least one
/// fragment for `code` satisfying `mode`.
///
/// Output preserves document order, and each record appears at most once
/// regardless of how many of its fragments qualify (records are keyed by
/// registration number).
///
/// # Errors
///
/// Returns [`Error::NoMatches`] naming the code and mode when the selection
/// is empty.
pub fn filter_records(
    records: &[StudentRecord],
    code: &str,
    mode: Mode,
) -> Result<Vec<StudentRecord>, Error> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut selected: Vec<StudentRecord> = Vec::new();

    for record in records {
        let hit = subject_marks(&record.subject_results, code)
            .iter()
            .any(|m| qualifies(m.marks, mode));

        if hit && seen.insert(record.registration_number.clone()) {
            selected.push(record.clone());
        }
    }

    if selected.is_empty() {
        return Err(Error::NoMatches {
            code: code.to_string(),
            mode,
        });
    }

    Ok(selected)
}
