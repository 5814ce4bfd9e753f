//! Calendar events

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use chrono::NaiveDate;


/// An identifier for an [`Event`], made of its line index and its module.
///
/// This is only unique within a single load of a source file.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EventId {
    line: usize,
    module: String,
}

impl EventId {
    pub fn new(line: usize, module: &str) -> Self {
        Self { line, module: module.to_string() }
    }

    /// The 1-based index of the source line this event comes from
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn module(&self) -> &str {
        &self.module
    }
}

impl Display for EventId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}-{}", self.line, self.module)
    }
}

/// Used to support serde
impl Serialize for EventId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
/// Used to support serde
impl<'de> Deserialize<'de> for EventId {
    fn deserialize<D>(deserializer: D) -> Result<EventId, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let (line, module) = match s.split_once('-') {
            None => return Err(serde::de::Error::custom(format!("Invalid event ID {:?}", s))),
            Some(parts) => parts,
        };
        let line = line.parse().map_err(serde::de::Error::custom)?;
        Ok(EventId{ line, module: module.to_string() })
    }
}



/// A scheduled activity, active every day from its start date to its end date (both included)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    id: EventId,

    /// The display name of the activity
    activity: String,
    product: String,
    category: String,
    module: String,

    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl Event {
    pub fn new(id: EventId, activity: String, product: String, category: String, module: String,
               start_date: NaiveDate, end_date: NaiveDate) -> Self
    {
        Self {
            id,
            activity,
            product,
            category,
            module,
            start_date,
            end_date,
        }
    }

    pub fn id(&self) -> &EventId       { &self.id       }
    pub fn activity(&self) -> &str     { &self.activity }
    pub fn product(&self) -> &str      { &self.product  }
    pub fn category(&self) -> &str     { &self.category }
    pub fn module(&self) -> &str       { &self.module   }
    pub fn start_date(&self) -> NaiveDate { self.start_date }
    pub fn end_date(&self) -> NaiveDate   { self.end_date   }

    /// Whether the end date is before the start date.
    /// Such an event is never active.
    pub fn is_inverted(&self) -> bool {
        self.end_date < self.start_date
    }

    /// Whether this event is active on the given day
    pub fn is_active_on(&self, day: NaiveDate) -> bool {
        self.start_date <= day && day <= self.end_date
    }

    /// Whether the active range of this event overlaps the closed interval `[first, last]`
    pub fn overlaps(&self, first: NaiveDate, last: NaiveDate) -> bool {
        if self.is_inverted() {
            return false;
        }
        self.start_date <= last && self.end_date >= first
    }
}
