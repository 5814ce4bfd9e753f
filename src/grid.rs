//! The days a month grid is made of

use chrono::{Datelike, Duration, NaiveDate};

use crate::query::YearMonth;


/// A cell of a month grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridDay {
    pub date: NaiveDate,
    /// Whether this day belongs to the month the grid is about (and not to the previous or next one)
    pub in_month: bool,
}

/// The days of a month, laid out in weeks starting on Sunday.
///
/// The first week is completed with the last days of the previous month, and the last week with the first days of the next one,
/// so that the result always has a multiple of 7 days.
/// The only exception is at the edges of the supported date range ([`NaiveDate::MIN`] and [`NaiveDate::MAX`]):
/// days that cannot be represented are left out, so the grid is shorter there.
pub fn month_grid(month: YearMonth) -> Vec<GridDay> {
    let first = month.first_day();
    let leading = first.weekday().num_days_from_sunday() as i64;
    let days_in_month = month.days_in_month() as i64;
    let total = ((leading + days_in_month + 6) / 7) * 7;

    (-leading..total - leading)
        .filter_map(|offset| first.checked_add_signed(Duration::days(offset)))
        .map(|date| GridDay {
            date,
            in_month: YearMonth::of(date) == month,
        })
        .collect()
}

/// Splits a grid into its weeks
pub fn weeks(grid: &[GridDay]) -> std::slice::Chunks<'_, GridDay> {
    grid.chunks(7)
}
