//! Venue calendar and date axis models.
//!
//! Defines the base calendar rule of a venue: the weekdays it operates
//! on, plus blocked dates (holidays, closures).
//!
//! # Date Model
//! All dates are calendar dates (`NaiveDate`) in the agency's local
//! time zone. No time-of-day component is modelled.
//!
//! # Precedence
//! Blocked dates override open weekdays. A date is open iff:
//! - Its weekday is in `open_days`, AND
//! - It is NOT listed in `blocked_dates`.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Upper bound for forward searches (one leap year).
const MAX_SEARCH_DAYS: u64 = 366;

const WEEKDAYS: [Weekday; 5] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
];
const WEEKEND: [Weekday; 2] = [Weekday::Sat, Weekday::Sun];

/// One column of the grid's date axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateCell {
    /// Calendar date.
    pub date: NaiveDate,
    /// Short weekday label ("Mon", "Tue", ...).
    pub weekday_label: String,
}

impl DateCell {
    /// Creates a date cell, deriving the weekday label.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            weekday_label: weekday_label(date.weekday()).to_string(),
        }
    }

    /// ISO-8601 form of the date (`YYYY-MM-DD`).
    pub fn iso_date(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Builds the inclusive date axis `[start, end]`.
    ///
    /// Returns an empty axis when `end < start`.
    pub fn range(start: NaiveDate, end: NaiveDate) -> Vec<DateCell> {
        start
            .iter_days()
            .take_while(|d| *d <= end)
            .map(DateCell::new)
            .collect()
    }
}

/// Base operating calendar of a venue.
///
/// Combines positive open weekdays with negative blocked dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueCalendar {
    /// Weekdays on which the venue operates.
    pub open_days: Vec<Weekday>,
    /// Dates on which the venue is closed (overrides `open_days`).
    pub blocked_dates: Vec<NaiveDate>,
}

impl VenueCalendar {
    /// Creates a calendar open on the given weekdays.
    pub fn new(open_days: impl IntoIterator<Item = Weekday>) -> Self {
        let mut days: Vec<Weekday> = open_days.into_iter().collect();
        days.sort_by_key(|d| d.num_days_from_monday());
        days.dedup();
        Self {
            open_days: days,
            blocked_dates: Vec::new(),
        }
    }

    /// Open Monday through Sunday.
    pub fn every_day() -> Self {
        Self::new(WEEKDAYS.into_iter().chain(WEEKEND))
    }

    /// Open Saturday and Sunday only.
    pub fn weekends_only() -> Self {
        Self::new(WEEKEND)
    }

    /// Open Monday through Friday only.
    pub fn weekdays_only() -> Self {
        Self::new(WEEKDAYS)
    }

    /// Adds a blocked date.
    pub fn with_blocked(mut self, date: NaiveDate) -> Self {
        self.blocked_dates.push(date);
        self
    }

    /// Whether the venue operates on `date`.
    pub fn is_open(&self, date: NaiveDate) -> bool {
        if self.blocked_dates.contains(&date) {
            return false;
        }
        self.open_days.contains(&date.weekday())
    }

    /// Finds the first open date at or after `from`.
    ///
    /// Returns `None` if nothing opens within a year.
    pub fn next_open_date(&self, from: NaiveDate) -> Option<NaiveDate> {
        if self.open_days.is_empty() {
            return None;
        }
        (0..=MAX_SEARCH_DAYS)
            .filter_map(|offset| from.checked_add_days(Days::new(offset)))
            .find(|d| self.is_open(*d))
    }

    /// Number of open dates within the inclusive range `[start, end]`.
    pub fn open_days_in_range(&self, start: NaiveDate, end: NaiveDate) -> usize {
        start
            .iter_days()
            .take_while(|d| *d <= end)
            .filter(|d| self.is_open(*d))
            .count()
    }
}

impl Default for VenueCalendar {
    fn default() -> Self {
        Self::every_day()
    }
}

fn weekday_label(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}
