//! Date-range queries over a list of events
//!
//! Every query keeps the order of the input list, so that a caller that only shows the first few results
//! gets them in source file order.

use std::convert::TryFrom;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use chrono::{Datelike, NaiveDate};

use crate::Event;


/// A calendar month of a given year
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct YearMonth {
    year: i32,
    /// 0-based (0 is January)
    month0: u32,
}

impl YearMonth {
    /// Returns `None` in case `month0` is not in `0..12`, or the year is out of the supported range
    pub fn new(year: i32, month0: u32) -> Option<Self> {
        if month0 > 11 {
            return None;
        }
        NaiveDate::from_ymd_opt(year, month0 + 1, 1)?;
        Some(Self { year, month0 })
    }

    /// The month that contains this date
    pub fn of(date: NaiveDate) -> Self {
        Self { year: date.year(), month0: date.month0() }
    }

    pub fn year(&self) -> i32    { self.year }
    pub fn month0(&self) -> u32  { self.month0 }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month0 + 1, 1)
            .unwrap(/* cannot panic, this has been checked at construction */)
    }

    pub fn last_day(&self) -> NaiveDate {
        match self.next() {
            Some(next) => next.first_day().pred_opt().unwrap_or(NaiveDate::MAX),
            None => NaiveDate::MAX,
        }
    }

    pub fn days_in_month(&self) -> u32 {
        self.last_day().day()
    }

    /// The following month, that may be in the next year
    pub fn next(&self) -> Option<Self> {
        match self.month0 {
            11 => Self::new(self.year.checked_add(1)?, 0),
            m => Self::new(self.year, m + 1),
        }
    }

    /// The preceding month, that may be in the previous year
    pub fn previous(&self) -> Option<Self> {
        match self.month0 {
            0 => Self::new(self.year.checked_sub(1)?, 11),
            m => Self::new(self.year, m - 1),
        }
    }

    /// The twelve months of a year
    pub fn months_of(year: i32) -> Vec<Self> {
        (0..12).filter_map(|m| Self::new(year, m)).collect()
    }

    /// The years from `span` years before this month's year to `span` years after it, e.g. to fill a year selector.
    ///
    /// Years out of the supported range are left out.
    pub fn year_range(&self, span: u32) -> Vec<i32> {
        let year = i64::from(self.year);
        let span = i64::from(span);
        (year - span..=year + span)
            .filter_map(|y| i32::try_from(y).ok())
            .filter(|y| Self::new(*y, 0).is_some())
            .collect()
    }
}

impl Display for YearMonth {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{:04}-{:02}", self.year, self.month0 + 1)
    }
}



/// Returns the events that are active on `day`, i.e. `start <= day <= end`
pub fn events_on_day(events: &[Event], day: NaiveDate) -> Vec<&Event> {
    events.iter()
        .filter(|event| event.is_active_on(day))
        .collect()
}

/// Returns the events whose active range overlaps the given month.
///
/// `month0` is 0-based (0 is January). An invalid month matches no event.
pub fn events_in_month(events: &[Event], year: i32, month0: u32) -> Vec<&Event> {
    match YearMonth::new(year, month0) {
        None => {
            log::warn!("Invalid month {} of year {}. No event can match it", month0, year);
            Vec::new()
        },
        Some(month) => events_during(events, month),
    }
}

/// Returns the events whose active range overlaps the given month
pub fn events_during(events: &[Event], month: YearMonth) -> Vec<&Event> {
    let first = month.first_day();
    let last = month.last_day();
    events.iter()
        .filter(|event| event.overlaps(first, last))
        .collect()
}

/// Returns the events of every month of a year, as a year view needs them
pub fn events_in_year(events: &[Event], year: i32) -> Vec<(YearMonth, Vec<&Event>)> {
    YearMonth::months_of(year)
        .into_iter()
        .map(|month| (month, events_during(events, month)))
        .collect()
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::event::EventId;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn event(line: usize, start: NaiveDate, end: NaiveDate) -> Event {
        Event::new(EventId::new(line, "M"), format!("Event {}", line), "P".into(), "C".into(), "M".into(), start, end)
    }

    fn lines(events: &[&Event]) -> Vec<usize> {
        events.iter().map(|e| e.id().line()).collect()
    }

    #[test]
    fn test_year_month() {
        let feb = YearMonth::new(2024, 1).unwrap();
        assert_eq!(feb.first_day(), ymd(2024, 2, 1));
        assert_eq!(feb.last_day(), ymd(2024, 2, 29));
        assert_eq!(feb.days_in_month(), 29);
        assert_eq!(YearMonth::new(2023, 1).unwrap().days_in_month(), 28);
        assert_eq!(feb.to_string(), "2024-02");

        let dec = YearMonth::new(2023, 11).unwrap();
        assert_eq!(dec.last_day(), ymd(2023, 12, 31));
        assert_eq!(dec.next(), YearMonth::new(2024, 0));
        assert_eq!(YearMonth::new(2024, 0).unwrap().previous(), Some(dec));
        assert_eq!(YearMonth::of(ymd(2024, 7, 14)), YearMonth::new(2024, 6).unwrap());

        assert!(YearMonth::new(2024, 12).is_none());
        assert_eq!(YearMonth::months_of(2024).len(), 12);
    }

    #[test]
    fn test_year_range() {
        let month = YearMonth::new(2024, 5).unwrap();
        assert_eq!(month.year_range(5), (2019..=2029).collect::<Vec<_>>());
        assert_eq!(month.year_range(0), vec![2024]);

        let last_year = NaiveDate::MAX.year();
        let near_the_end = YearMonth::new(last_year - 1, 0).unwrap();
        assert_eq!(near_the_end.year_range(5), ((last_year - 6)..=last_year).collect::<Vec<_>>());
    }

    #[test]
    fn test_events_on_day_is_inclusive() {
        let events = vec![event(1, ymd(2024, 2, 1), ymd(2024, 2, 3))];

        for day in &[ymd(2024, 2, 1), ymd(2024, 2, 2), ymd(2024, 2, 3)] {
            assert_eq!(events_on_day(&events, *day).len(), 1, "missing on {}", day);
        }
        assert!(events_on_day(&events, ymd(2024, 1, 31)).is_empty());
        assert!(events_on_day(&events, ymd(2024, 2, 4)).is_empty());
    }

    #[test]
    fn test_events_on_day_keeps_order() {
        let events = vec![
            event(1, ymd(2024, 2, 1), ymd(2024, 2, 10)),
            event(2, ymd(2024, 3, 1), ymd(2024, 3, 1)),
            event(3, ymd(2024, 1, 15), ymd(2024, 2, 5)),
            event(4, ymd(2024, 2, 2), ymd(2024, 2, 2)),
        ];
        let day = ymd(2024, 2, 2);
        assert_eq!(lines(&events_on_day(&events, day)), vec![1, 3, 4]);
        // Queries are idempotent
        assert_eq!(events_on_day(&events, day), events_on_day(&events, day));
        assert!(events_on_day(&[], day).is_empty());
    }

    #[test]
    fn test_month_spanning_event() {
        let events = vec![event(1, ymd(2024, 1, 28), ymd(2024, 2, 5))];
        assert_eq!(events_in_month(&events, 2024, 0).len(), 1);
        assert_eq!(events_in_month(&events, 2024, 1).len(), 1);
        assert!(events_in_month(&events, 2024, 2).is_empty());
        assert!(events_in_month(&events, 2023, 11).is_empty());
    }

    #[test]
    fn test_events_in_month() {
        let events = vec![
            // Contains the whole month
            event(1, ymd(2023, 11, 20), ymd(2024, 4, 1)),
            // Ends on the first day
            event(2, ymd(2024, 1, 10), ymd(2024, 2, 1)),
            // Starts on the last day, across the year boundary
            event(3, ymd(2024, 2, 29), ymd(2025, 1, 1)),
            // Ends the day before
            event(4, ymd(2024, 1, 1), ymd(2024, 1, 31)),
            // Single day inside
            event(5, ymd(2024, 2, 14), ymd(2024, 2, 14)),
            // Inverted, both ends inside
            event(6, ymd(2024, 2, 20), ymd(2024, 2, 10)),
            // Starts the day after
            event(7, ymd(2024, 3, 1), ymd(2024, 3, 2)),
        ];

        let feb = events_in_month(&events, 2024, 1);
        assert_eq!(lines(&feb), vec![1, 2, 3, 5]);
        assert_eq!(events_in_month(&events, 2024, 1), feb);

        assert!(events_in_month(&events, 2024, 12).is_empty());
    }

    #[test]
    fn test_events_in_year() {
        let events = vec![
            event(1, ymd(2023, 12, 30), ymd(2024, 1, 2)),
            event(2, ymd(2024, 11, 30), ymd(2024, 12, 1)),
        ];
        let year = events_in_year(&events, 2024);
        assert_eq!(year.len(), 12);

        let counts: Vec<usize> = year.iter().map(|(_, evs)| evs.len()).collect();
        assert_eq!(counts, vec![1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1]);
        assert_eq!(year[10].0, YearMonth::new(2024, 10).unwrap());

        let previous_year = events_in_year(&events, 2023);
        assert_eq!(lines(&previous_year[11].1), vec![1]);
    }
}
