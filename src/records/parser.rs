//! A module to parse schedule files

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::Event;
use crate::event::EventId;
use super::date::parse_date;

/// The field separator of schedule files
pub const DELIMITER: char = ';';
/// Activity, product, category, module, start date and end date
pub const REQUIRED_FIELDS: usize = 6;


/// Why a line of a schedule file did not produce an [`Event`]
#[derive(Clone, Debug, PartialEq)]
pub enum SkipReason {
    /// The line has fewer than [`REQUIRED_FIELDS`] fields
    TooFewFields(usize),
    /// The start or end date could not be parsed
    InvalidDate(String),
}

impl Display for SkipReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            SkipReason::TooFewFields(n) => write!(f, "only {} fields, {} expected", n, REQUIRED_FIELDS),
            SkipReason::InvalidDate(details) => write!(f, "invalid date ({})", details),
        }
    }
}

/// A line that has been ignored while parsing
#[derive(Clone, Debug, PartialEq)]
pub struct SkippedLine {
    pub index: usize,
    pub reason: SkipReason,
}

/// The result of parsing a whole schedule file
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParseReport {
    pub events: Vec<Event>,
    pub skipped: Vec<SkippedLine>,
}


/// Parse a schedule file into events, silently dropping malformed lines.
///
/// See [`parse_with_report`] to know which lines have been dropped.
pub fn parse(content: &str) -> Vec<Event> {
    parse_with_report(content).events
}

/// Parse a schedule file into events, and tell which lines have been skipped.
///
/// Blank lines are ignored. The first remaining line is a header, and is skipped whatever it contains.
/// Lines are numbered among non-blank lines, the header being line 0.
pub fn parse_with_report(content: &str) -> ParseReport {
    let mut report = ParseReport::default();

    let lines = content
        .split('\n')
        .filter(|line| line.trim().is_empty() == false)
        .enumerate()
        .skip(1);

    for (index, line) in lines {
        match parse_line(index, line) {
            Ok(event) => {
                if event.is_inverted() {
                    log::warn!("Line {} ends before it starts ({}). It will never be shown", index, line.trim());
                }
                report.events.push(event);
            },
            Err(reason) => {
                match &reason {
                    SkipReason::TooFewFields(_) => log::debug!("Ignoring line {}: {}", index, reason),
                    SkipReason::InvalidDate(_) => log::warn!("Error parsing line {}: {}", index, reason),
                }
                report.skipped.push(SkippedLine{ index, reason });
            },
        }
    }

    log::debug!("Parsed {} events, skipped {} lines", report.events.len(), report.skipped.len());
    report
}

fn parse_line(index: usize, line: &str) -> Result<Event, SkipReason> {
    let fields: Vec<&str> = line.split(DELIMITER).map(|f| f.trim()).collect();
    if fields.len() < REQUIRED_FIELDS {
        return Err(SkipReason::TooFewFields(fields.len()));
    }

    let (start_date, end_date) = parse_range(fields[4], fields[5])
        .map_err(|err| SkipReason::InvalidDate(err.to_string()))?;

    let module = fields[3];
    Ok(Event::new(
        EventId::new(index, module),
        fields[0].to_string(),
        fields[1].to_string(),
        fields[2].to_string(),
        module.to_string(),
        start_date,
        end_date,
    ))
}

fn parse_range(start: &str, end: &str) -> Result<(chrono::NaiveDate, chrono::NaiveDate), Box<dyn Error>> {
    let start_date = parse_date(start)?;
    let end_date = parse_date(end)?;
    Ok((start_date, end_date))
}
