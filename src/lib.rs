//! This crate loads academic schedules and answers the queries a calendar view needs.
//!
//! Schedules are semicolon-delimited text files (see the [`records`] module), fetched once by a [`Loader`](loader::Loader)
//! from a web server or from the local filesystem. \
//! The resulting [`EventCollection`] never changes afterwards: day and month views are computed by re-querying it
//! (see the [`query`] module), optionally narrowed down by an [`EventFilter`](filter::EventFilter).
//!
//! ```
//! use academic_calendar::{records, EventCollection};
//!
//! let text = "Activity;Product;Category;Module;StartDate;EndDate\n\
//!             Exam;Undergraduate;Assessment;MAT101;28/01/2024;05/02/2024\n";
//! let collection = EventCollection::new(records::parse(text));
//!
//! assert_eq!(collection.in_month(2024, 0).len(), 1);
//! assert_eq!(collection.in_month(2024, 1).len(), 1);
//! ```

pub mod traits;

mod event;
pub use event::{Event, EventId};
pub mod collection;
pub use collection::EventCollection;
pub mod records;
pub mod query;
pub use query::{events_on_day, events_in_month, YearMonth};
pub mod filter;

pub mod config;
pub mod loader;
pub use loader::{Loader, LoadOutcome};

pub mod colors;
pub mod locale;
pub mod grid;
pub mod utils;
