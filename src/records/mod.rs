//! This module handles conversion between schedule files and [`crate::Event`]s
//!
//! A schedule file is a semicolon-delimited text file, whose first line is a header:
//! ```text
//! Activity;Product;Category;Module;StartDate;EndDate
//! Exam;Undergraduate;Assessment;MAT101;01/02/2024;03/02/2024
//! ```
//! Fields cannot contain semicolons, there is no quoting.

mod parser;
pub use parser::{parse, parse_with_report};
pub use parser::{ParseReport, SkippedLine, SkipReason};
pub use parser::{DELIMITER, REQUIRED_FIELDS};
mod date;
pub use date::{parse_date, format_date};
