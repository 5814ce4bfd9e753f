use chrono::{Local, NaiveDate};

use academic_calendar::config::{Config, DEFAULT_SOURCE_PATH};
use academic_calendar::colors::ModuleColors;
use academic_calendar::locale::Locale;
use academic_calendar::{LoadOutcome, YearMonth};

const SOURCE_PATH: &str = DEFAULT_SOURCE_PATH;


#[tokio::main]
async fn main() {
    env_logger::init();

    let config = Config::local(SOURCE_PATH);
    let outcome = academic_calendar::loader::load_events(&config).await;

    match &outcome {
        LoadOutcome::Failed{ reason } => {
            log::error!("Could not load events: {}", reason);
            return;
        },
        LoadOutcome::Loaded{ skipped, .. } => {
            for line in skipped {
                log::warn!("Line {} has been skipped: {}", line.index, line.reason);
            }
        },
    }
    if outcome.is_empty() {
        println!("No event found in {}", SOURCE_PATH);
        return;
    }

    let collection = outcome.into_collection();
    let colors = ModuleColors::from_collection(&collection);
    let locale = Locale::default();

    println!("---- Modules -----");
    for (module, count) in collection.module_counts() {
        println!("    {} ({}) {}", module, count, colors.class_of(module).unwrap_or_default());
    }

    let today: NaiveDate = Local::now().date_naive();
    let this_month = YearMonth::of(today);
    println!("---- This month -----");
    academic_calendar::utils::print_month(&collection, this_month, locale);

    println!("---- Other years -----");
    for year in this_month.year_range(5) {
        let busy_months = collection.in_year(year).iter().filter(|(_, events)| events.is_empty() == false).count();
        println!("    {}: {} months with events", year, busy_months);
    }

    println!("---- Today -----");
    academic_calendar::utils::print_day(&collection, today, &colors, locale);
}
