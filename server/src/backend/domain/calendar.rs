//! Calendar domain logic for the IPO dashboard.
//!
//! This module owns month navigation and the construction of the Mon–Fri
//! month grid. The UI only renders the resulting [`CalendarGrid`]; all date
//! math, entry placement and holiday flagging happen here.

use chrono::{Datelike, NaiveDate};
use log::{debug, info};
use shared::{CalendarCell, CalendarEntry, CalendarFocusDate, CalendarGrid, CalendarWeek, WEEKDAY_LABELS};
use std::collections::HashMap;

use crate::backend::domain::holidays::HolidayCalendar;
use crate::backend::domain::models::ScheduleEntry;

/// Number of weekday columns in the grid (Mon–Fri)
pub const GRID_COLUMNS: usize = 5;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CalendarError {
    #[error("Invalid month: {0}. Must be between 1 and 12")]
    InvalidMonth(u32),
    #[error("Invalid year: {0}. Must be between {min} and {max}", min = NaiveDate::MIN.year(), max = NaiveDate::MAX.year())]
    InvalidYear(i32),
}

/// Displayed (year, month) of the calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarCursor {
    year: i32,
    month: u32,
}

impl CalendarCursor {
    pub fn new(year: i32, month: u32) -> Result<Self, CalendarError> {
        if !(NaiveDate::MIN.year()..=NaiveDate::MAX.year()).contains(&year) {
            return Err(CalendarError::InvalidYear(year));
        }
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth(month));
        }
        Ok(Self { year, month })
    }

    /// Cursor on the month containing `today`
    pub fn for_date(today: NaiveDate) -> Self {
        Self {
            year: today.year(),
            month: today.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Step back one month, wrapping January to December of the previous year.
    /// Stays put on the first representable month.
    pub fn previous_month(&mut self) {
        if self.month == 1 {
            if self.year <= NaiveDate::MIN.year() {
                return;
            }
            self.month = 12;
            self.year -= 1;
        } else {
            self.month -= 1;
        }
    }

    /// Step forward one month, wrapping December to January of the next year.
    /// Stays put on the last representable month.
    pub fn next_month(&mut self) {
        if self.month == 12 {
            if self.year >= NaiveDate::MAX.year() {
                return;
            }
            self.month = 1;
            self.year += 1;
        } else {
            self.month += 1;
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl From<CalendarCursor> for CalendarFocusDate {
    fn from(cursor: CalendarCursor) -> Self {
        CalendarFocusDate {
            year: cursor.year,
            month: cursor.month,
        }
    }
}

impl TryFrom<CalendarFocusDate> for CalendarCursor {
    type Error = CalendarError;

    fn try_from(focus: CalendarFocusDate) -> Result<Self, Self::Error> {
        CalendarCursor::new(focus.year, focus.month)
    }
}

/// Calendar service that handles all calendar-related business logic
#[derive(Debug, Clone, Default)]
pub struct CalendarService;

impl CalendarService {
    pub fn new() -> Self {
        Self
    }

    /// Get the number of days in a given month and year
    pub fn days_in_month(&self, year: i32, month: u32) -> u32 {
        match month {
            2 => {
                if self.is_leap_year(year) {
                    29
                } else {
                    28
                }
            }
            4 | 6 | 9 | 11 => 30,
            _ => 31,
        }
    }

    pub fn is_leap_year(&self, year: i32) -> bool {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }

    /// Weekday of the first day of month (0 = Monday .. 6 = Sunday)
    pub fn first_weekday_of_month(&self, year: i32, month: u32) -> u32 {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|date| date.weekday().num_days_from_monday())
            .unwrap_or(0)
    }

    /// Zero-based row of `day` in a Monday-first month layout
    pub fn week_of_month(&self, day: u32, first_weekday: u32) -> u32 {
        (day + first_weekday - 1) / 7
    }

    /// Header title, e.g. "2025년 6월"
    pub fn month_title(&self, cursor: CalendarCursor) -> String {
        format!("{}년 {}월", cursor.year(), cursor.month())
    }

    /// Group schedule events of the cursor's month by day, keeping sheet order
    fn group_entries_by_day(
        &self,
        cursor: CalendarCursor,
        entries: &[ScheduleEntry],
    ) -> HashMap<u32, Vec<CalendarEntry>> {
        let mut entries_by_day: HashMap<u32, Vec<CalendarEntry>> = HashMap::new();

        for entry in entries {
            for (kind, date) in entry.dated_events() {
                if cursor.contains(date) {
                    entries_by_day.entry(date.day()).or_default().push(CalendarEntry {
                        kind,
                        name: entry.name.clone(),
                        broker: entry.broker.clone(),
                    });
                }
            }
        }

        entries_by_day
    }

    /// Build the Mon–Fri grid for the cursor's month
    pub fn build_month_grid(
        &self,
        cursor: CalendarCursor,
        entries: &[ScheduleEntry],
        holidays: &dyn HolidayCalendar,
        today: NaiveDate,
    ) -> CalendarGrid {
        let (year, month) = (cursor.year(), cursor.month());
        let days_in_month = self.days_in_month(year, month);
        let first_weekday = self.first_weekday_of_month(year, month);
        let holidays_this_year = holidays.holidays_in_year(year);
        let mut entries_by_day = self.group_entries_by_day(cursor, entries);

        debug!(
            "Building grid for {}/{}: {} days, first weekday {}",
            month, year, days_in_month, first_weekday
        );

        let week_count = self.week_of_month(days_in_month, first_weekday) + 1;
        let mut rows: Vec<CalendarWeek> = (0..week_count)
            .map(|week_of_month| CalendarWeek {
                week_of_month,
                cells: Default::default(),
            })
            .collect();

        for day in 1..=days_in_month {
            let Some(date) = NaiveDate::from_ymd_opt(year, month, day) else {
                continue;
            };
            let weekday = date.weekday().num_days_from_monday();
            if weekday as usize >= GRID_COLUMNS {
                continue;
            }
            let week_of_month = self.week_of_month(day, first_weekday);

            rows[week_of_month as usize].cells[weekday as usize] = Some(CalendarCell {
                day,
                weekday,
                week_of_month,
                is_holiday: holidays_this_year.contains(&date),
                is_today: date == today,
                entries: entries_by_day.remove(&day).unwrap_or_default(),
            });
        }

        rows.retain(|row| !row.is_empty());

        info!(
            "Calendar grid for {} built with {} rows",
            self.month_title(cursor),
            rows.len()
        );

        CalendarGrid {
            year,
            month,
            weekday_labels: WEEKDAY_LABELS.map(String::from),
            rows,
        }
    }
}
