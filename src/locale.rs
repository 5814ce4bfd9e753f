//! Names of months and weekdays, for display

use chrono::{Datelike, NaiveDate};


/// The languages calendar labels can be displayed in
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Locale {
    /// Brazilian Portuguese
    PtBr,
    English,
}

impl Default for Locale {
    fn default() -> Self {
        Locale::PtBr
    }
}

const MONTHS_PT_BR: [&str; 12] = [
    "Janeiro", "Fevereiro", "Março", "Abril", "Maio", "Junho",
    "Julho", "Agosto", "Setembro", "Outubro", "Novembro", "Dezembro",
];
const MONTHS_EN: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

const WEEKDAYS_PT_BR: [&str; 7] = ["Dom", "Seg", "Ter", "Qua", "Qui", "Sex", "Sáb"];
const WEEKDAYS_EN: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

impl Locale {
    /// The name of a month. `month0` is 0-based (0 is January)
    pub fn month_name(&self, month0: u32) -> Option<&'static str> {
        let names = match self {
            Locale::PtBr => &MONTHS_PT_BR,
            Locale::English => &MONTHS_EN,
        };
        names.get(month0 as usize).copied()
    }

    /// Abbreviated weekday names, starting on Sunday
    pub fn weekday_abbreviations(&self) -> &'static [&'static str; 7] {
        match self {
            Locale::PtBr => &WEEKDAYS_PT_BR,
            Locale::English => &WEEKDAYS_EN,
        }
    }

    /// A date written in full, e.g. "1 de fevereiro de 2024" or "February 1, 2024"
    pub fn long_date(&self, date: NaiveDate) -> String {
        let month = self.month_name(date.month0()).unwrap_or_default();
        match self {
            Locale::PtBr => format!("{} de {} de {}", date.day(), month.to_lowercase(), date.year()),
            Locale::English => format!("{} {}, {}", month, date.day(), date.year()),
        }
    }
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_month_names() {
        assert_eq!(Locale::PtBr.month_name(2), Some("Março"));
        assert_eq!(Locale::English.month_name(11), Some("December"));
        assert_eq!(Locale::English.month_name(12), None);
        assert_eq!(Locale::default(), Locale::PtBr);
    }

    #[test]
    fn test_weekdays() {
        assert_eq!(Locale::PtBr.weekday_abbreviations()[6], "Sáb");
        assert_eq!(Locale::English.weekday_abbreviations()[0], "Sun");
    }

    #[test]
    fn test_long_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(Locale::PtBr.long_date(date), "1 de março de 2024");
        assert_eq!(Locale::English.long_date(date), "March 1, 2024");
    }
}
