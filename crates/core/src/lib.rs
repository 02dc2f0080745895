//! Core library for resultsift
//!
//! This crate implements the **Functional Core** of the resultsift
//! application: pure transformation functions with zero I/O.  Reading the
//! PDF, writing the spreadsheet file, and talking to the user all happen in
//! the `resultsift` shell crate; everything here is a deterministic mapping
//! from input data to output data that can be tested with plain fixtures.
//!
//! The pipeline the shell drives through this crate:
//!
//! ```text
//! extracted text -> parse_records -> filter_records -> to_xlsx
//! ```
//!
//! # Module Organization
//!
//! - [`records`]: the `StudentRecord` model and the fixed-shape row parser
//! - [`filter`]: subject-code / pass-reappear selection
//! - [`xlsx`]: spreadsheet serialization of a filtered record set
//! - [`error`]: the crate-wide error taxonomy

pub mod error;
pub mod filter;
pub mod records;
pub mod xlsx;

pub use error::Error;
pub use filter::{filter_records, subject_marks, Mode, SubjectMark, PASS_MARK};
pub use records::{parse_records, StudentRecord};
