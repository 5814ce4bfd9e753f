//! The set of events loaded from a schedule file

use std::collections::{BTreeMap, BTreeSet};
use std::error::Error;

use serde::{Deserialize, Serialize};
use chrono::NaiveDate;

use crate::Event;
use crate::query::{self, YearMonth};


/// The events of a schedule file, in source line order.
///
/// This cannot be modified once created. Views (filters, day or month queries) borrow from it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EventCollection {
    events: Vec<Event>,
}

impl EventCollection {
    pub fn new(events: Vec<Event>) -> Self {
        Self { events }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Event> {
        self.events.iter()
    }

    /// See [`query::events_on_day`]
    pub fn on_day(&self, day: NaiveDate) -> Vec<&Event> {
        query::events_on_day(&self.events, day)
    }

    /// See [`query::events_in_month`]
    pub fn in_month(&self, year: i32, month0: u32) -> Vec<&Event> {
        query::events_in_month(&self.events, year, month0)
    }

    /// See [`query::events_during`]
    pub fn during(&self, month: YearMonth) -> Vec<&Event> {
        query::events_during(&self.events, month)
    }

    /// See [`query::events_in_year`]
    pub fn in_year(&self, year: i32) -> Vec<(YearMonth, Vec<&Event>)> {
        query::events_in_year(&self.events, year)
    }

    /// The events of a given day, as shown when this day is selected
    pub fn day_details(&self, day: NaiveDate) -> DayDetails<'_> {
        DayDetails {
            date: day,
            events: self.on_day(day),
        }
    }

    /// Every distinct module, sorted
    pub fn modules(&self) -> Vec<&str> {
        self.events.iter()
            .map(|e| e.module())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Every distinct category, sorted
    pub fn categories(&self) -> Vec<&str> {
        self.events.iter()
            .map(|e| e.category())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// How many events each module has, sorted by module
    pub fn module_counts(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for event in &self.events {
            *counts.entry(event.module()).or_insert(0) += 1;
        }
        counts
    }

    /// Serialize the events, e.g. to hand them over to a web front-end
    pub fn to_json(&self) -> Result<String, Box<dyn Error>> {
        Ok(serde_json::to_string(&self.events)?)
    }
}

impl From<Vec<Event>> for EventCollection {
    fn from(events: Vec<Event>) -> Self {
        Self::new(events)
    }
}

impl<'a> IntoIterator for &'a EventCollection {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}



/// The events that are active on a given day
#[derive(Clone, Debug, PartialEq)]
pub struct DayDetails<'a> {
    pub date: NaiveDate,
    pub events: Vec<&'a Event>,
}

impl<'a> DayDetails<'a> {
    pub fn has_events(&self) -> bool {
        self.events.is_empty() == false
    }

    /// Returns at most `limit` events, and the count of the ones that have been left out (as in "+2 more")
    pub fn preview(&self, limit: usize) -> (&[&'a Event], usize) {
        let shown = limit.min(self.events.len());
        (&self.events[..shown], self.events.len() - shown)
    }
}
