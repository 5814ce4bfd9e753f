///! Some utility functions

use chrono::NaiveDate;

use crate::Event;
use crate::colors::ModuleColors;
use crate::grid::{self, GridDay};
use crate::locale::Locale;
use crate::query::YearMonth;
use crate::records::format_date;
use crate::EventCollection;

/// How many events a day cell shows before summing up the others
pub const EVENTS_PER_CELL: usize = 3;

/// A debug utility that pretty-prints a list of events
pub fn print_event_list<'a, I>(events: I, colors: &ModuleColors)
where
    I: IntoIterator<Item = &'a Event>,
{
    for event in events {
        print_event(event, colors);
    }
}

pub fn print_event(event: &Event, colors: &ModuleColors) {
    let class = colors.class_of(event.module()).unwrap_or_else(|| String::from("module-?"));
    println!("    [{}] {}\t{} - {}\t{} / {} / {}\t({})",
        class,
        event.activity(),
        format_date(event.start_date()),
        format_date(event.end_date()),
        event.module(),
        event.category(),
        event.product(),
        event.id(),
    );
}

/// A debug utility that prints a month grid, with the count of events of every day
pub fn print_month(collection: &EventCollection, month: YearMonth, locale: Locale) {
    println!("{} {}", locale.month_name(month.month0()).unwrap_or_default(), month.year());
    println!("{}", locale.weekday_abbreviations().join("\t"));

    let grid = grid::month_grid(month);
    for week in grid::weeks(&grid) {
        let cells: Vec<String> = week.iter().map(|day| grid_cell(collection, day)).collect();
        println!("{}", cells.join("\t"));
    }
}

fn grid_cell(collection: &EventCollection, day: &GridDay) -> String {
    use chrono::Datelike;

    if day.in_month == false {
        return String::from(".");
    }
    match collection.on_day(day.date).len() {
        0 => format!("{}", day.date.day()),
        n => format!("{}({})", day.date.day(), n),
    }
}

/// A debug utility that prints the events of a day, as in a day detail view
pub fn print_day(collection: &EventCollection, day: NaiveDate, colors: &ModuleColors, locale: Locale) {
    let details = collection.day_details(day);
    println!("{}", locale.long_date(details.date));
    let (shown, hidden) = details.preview(EVENTS_PER_CELL);
    print_event_list(shown.iter().copied(), colors);
    if hidden > 0 {
        println!("    +{}", hidden);
    }
}
