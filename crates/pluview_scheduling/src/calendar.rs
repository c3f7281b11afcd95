// --- File: crates/pluview_scheduling/src/calendar.rs ---
//! Month cursor and month grid for the date picker.

use crate::availability::AvailabilityFilter;
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::Serialize;
use std::fmt;
use tracing::debug;

pub const MONTH_NAMES: [&str; 12] = [
    "Janeiro",
    "Fevereiro",
    "Março",
    "Abril",
    "Maio",
    "Junho",
    "Julho",
    "Agosto",
    "Setembro",
    "Outubro",
    "Novembro",
    "Dezembro",
];

/// Column headers, Sunday first.
pub const DAY_NAMES: [&str; 7] = ["Dom", "Seg", "Ter", "Qua", "Qui", "Sex", "Sáb"];

/// A displayed month. `month` is 1-based. Field order gives chronological `Ord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|_| Self { year, month })
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    pub fn previous(self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    pub fn day(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }

    pub fn name(&self) -> &'static str {
        MONTH_NAMES[(self.month - 1) as usize]
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name(), self.year)
    }
}

/// Number of days in a month, or 0 when `month` is not in 1..=12.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first_of_next| first_of_next.pred_opt())
        .filter(|last| last.month() == month)
        .map(|last| last.day())
        .unwrap_or(0)
}

/// Weekday of the 1st, 0 = Sunday through 6 = Saturday. This is also the number
/// of blank cells before day 1 in a Sunday-first grid.
pub fn first_weekday_of_month(year: i32, month: u32) -> Option<u32> {
    NaiveDate::from_ymd_opt(year, month, 1).map(|date| date.weekday().num_days_from_sunday())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCell {
    pub day: u32,
    pub date: NaiveDate,
    pub selectable: bool,
    pub is_today: bool,
    pub is_selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    pub month: YearMonth,
    pub title: String,
    pub leading_blanks: u32,
    pub days: Vec<DayCell>,
}

#[derive(Debug, Clone)]
pub struct CalendarNavigator {
    cursor: YearMonth,
    filter: AvailabilityFilter,
}

impl CalendarNavigator {
    pub fn new(today: NaiveDate, filter: AvailabilityFilter) -> Self {
        Self {
            cursor: YearMonth::from_date(today),
            filter,
        }
    }

    pub fn cursor(&self) -> YearMonth {
        self.cursor
    }

    pub fn filter(&self) -> &AvailabilityFilter {
        &self.filter
    }

    /// True while the displayed month is after the real current month.
    pub fn can_go_to_previous_month(&self, today: NaiveDate) -> bool {
        self.cursor > YearMonth::from_date(today)
    }

    /// Moves back one month unless that would show a past month. Returns whether it moved.
    pub fn go_to_previous_month(&mut self, today: NaiveDate) -> bool {
        if !self.can_go_to_previous_month(today) {
            debug!("Ignoring previous-month navigation below {}", self.cursor);
            return false;
        }
        self.cursor = self.cursor.previous();
        true
    }

    /// Forward navigation is unbounded.
    pub fn go_to_next_month(&mut self) {
        self.cursor = self.cursor.next();
    }

    pub fn reset(&mut self, today: NaiveDate) {
        self.cursor = YearMonth::from_date(today);
    }

    pub fn is_selectable(&self, date: NaiveDate, now: NaiveDateTime) -> bool {
        self.filter.is_selectable(date, now)
    }

    /// Date for a day number of the displayed month.
    pub fn date_for_day(&self, day: u32) -> Option<NaiveDate> {
        self.cursor.day(day)
    }

    pub fn month_grid(&self, now: NaiveDateTime, selected: Option<NaiveDate>) -> MonthGrid {
        let year = self.cursor.year();
        let month = self.cursor.month();
        let today = now.date();
        let days = (1..=days_in_month(year, month))
            .filter_map(|day| self.cursor.day(day).map(|date| (day, date)))
            .map(|(day, date)| DayCell {
                day,
                date,
                selectable: self.filter.is_selectable(date, now),
                is_today: date == today,
                is_selected: selected == Some(date),
            })
            .collect();

        MonthGrid {
            month: self.cursor,
            title: self.cursor.to_string(),
            leading_blanks: first_weekday_of_month(year, month).unwrap_or(0),
            days,
        }
    }
}
