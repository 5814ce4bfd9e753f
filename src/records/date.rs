//! `DD/MM/YYYY` dates, as they appear in schedule files

use std::error::Error;

use chrono::{Datelike, NaiveDate};


/// Parse a `DD/MM/YYYY` date.
///
/// The year is taken literally (`24` is year 24, not 2024).
/// Whitespace around the date and around each of its parts is ignored.
pub fn parse_date(text: &str) -> Result<NaiveDate, Box<dyn Error>> {
    let parts: Vec<&str> = text.trim().split('/').collect();
    if parts.len() != 3 {
        return Err(format!("Expected a DD/MM/YYYY date, got {:?}", text).into());
    }

    let day: u32 = parts[0].trim().parse()
        .map_err(|err| format!("Invalid day in {:?}: {}", text, err))?;
    let month: u32 = parts[1].trim().parse()
        .map_err(|err| format!("Invalid month in {:?}: {}", text, err))?;
    let year: i32 = parts[2].trim().parse()
        .map_err(|err| format!("Invalid year in {:?}: {}", text, err))?;

    if month < 1 || month > 12 {
        return Err(format!("Month {} is out of range in {:?}", month, text).into());
    }

    match NaiveDate::from_ymd_opt(year, month, day) {
        None => Err(format!("{:?} is not a valid calendar day", text).into()),
        Some(date) => Ok(date),
    }
}

/// Format a date the way it is written in schedule files
pub fn format_date(date: NaiveDate) -> String {
    format!("{:02}/{:02}/{:04}", date.day(), date.month(), date.year())
}
