//! # Domain Module
//!
//! Contains all business logic for the IPO dashboard.
//!
//! Everything here computes plain structured values (cards, calendar grids,
//! profit totals) from the worksheet rows. Nothing in this module knows about
//! HTML or HTTP; the `io` layer serializes the results.
//!
//! ## Module Organization
//!
//! - **models**: Coerced worksheet rows (`ScheduleEntry`, `TradeEntry`)
//! - **coercion**: Lenient date/number parsing of sheet cells
//! - **formatting**: Thousands separators, currency/share suffixes, card dates
//! - **weekly_service**: Mon–Fri window selection and weekly cards
//! - **calendar**: Month navigation cursor and the Mon–Fri month grid
//! - **holidays**: Korean public holiday lookup
//! - **profit_service**: Total and current-year realized profit
//! - **clock**: Timezone-aware "today"
//! - **dashboard_service**: Builds every view from one snapshot

pub mod calendar;
pub mod clock;
pub mod coercion;
pub mod dashboard_service;
pub mod formatting;
pub mod holidays;
pub mod models;
pub mod profit_service;
pub mod weekly_service;

pub use calendar::{CalendarCursor, CalendarError, CalendarService};
pub use clock::{Clock, FixedClock, SystemClock};
pub use dashboard_service::DashboardService;
pub use holidays::{HolidayCalendar, KoreanHolidays};
pub use profit_service::ProfitService;
pub use weekly_service::WeeklyScheduleService;
