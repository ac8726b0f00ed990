use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Weekday column labels of the Mon–Fri calendar grid
pub const WEEKDAY_LABELS: [&str; 5] = ["월", "화", "수", "목", "금"];

/// Kind of schedule event placed on a date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScheduleKind {
    /// Subscription (청약) day
    Subscription,
    /// Listing (상장) day
    Listing,
}

impl ScheduleKind {
    /// Korean label shown on badges
    pub fn label(&self) -> &'static str {
        match self {
            ScheduleKind::Subscription => "청약",
            ScheduleKind::Listing => "상장",
        }
    }
}

impl fmt::Display for ScheduleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Analyst forecast attached to an offering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Forecast {
    /// 매우좋음
    VeryGood,
    /// 좋음
    Good,
    /// 보통
    Neutral,
    /// Any other free-text value from the sheet
    Other(String),
}

impl Forecast {
    /// Parse a forecast cell. Blank cells have no forecast.
    pub fn from_cell(value: &str) -> Option<Self> {
        let value = value.trim();
        match value {
            "" => None,
            "매우좋음" => Some(Forecast::VeryGood),
            "좋음" => Some(Forecast::Good),
            "보통" => Some(Forecast::Neutral),
            other => Some(Forecast::Other(other.to_string())),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Forecast::VeryGood => "매우좋음",
            Forecast::Good => "좋음",
            Forecast::Neutral => "보통",
            Forecast::Other(value) => value,
        }
    }
}

/// Which of the two dates made a card "today"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardHighlight {
    None,
    Subscription,
    Listing,
}

/// Mutually exclusive detail line of a weekly card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardDetail {
    /// Total allotted shares (균등 + 비례), shown around listing
    Allotment(String),
    /// Minimum subscription deposit, shown otherwise
    MinDeposit(String),
}

impl CardDetail {
    pub fn label(&self) -> &'static str {
        match self {
            CardDetail::Allotment(_) => "주식수",
            CardDetail::MinDeposit(_) => "증거금",
        }
    }

    pub fn value(&self) -> &str {
        match self {
            CardDetail::Allotment(value) | CardDetail::MinDeposit(value) => value,
        }
    }
}

/// One card of the "this week" list, fully formatted for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyCard {
    pub name: String,
    pub broker: String,
    pub theme: String,
    pub subscription_date: Option<NaiveDate>,
    pub listing_date: Option<NaiveDate>,
    /// Date used for ordering the card list
    pub reference_date: NaiveDate,
    /// "MM-DD (요일)" or "-"
    pub subscription_display: String,
    /// "MM-DD (요일)" or "-"
    pub listing_display: String,
    /// Badges for dates that fall inside the week window, subscription first
    pub badges: Vec<ScheduleKind>,
    pub offer_price: String,
    pub detail: CardDetail,
    pub forecast: Option<Forecast>,
    /// Raw forecast text or "-"
    pub forecast_label: String,
    pub highlight: CardHighlight,
}

/// The Mon–Fri window and the cards selected for it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklySchedule {
    pub window_start: NaiveDate,
    pub window_end: NaiveDate,
    pub cards: Vec<WeeklyCard>,
}

/// A schedule event placed on a calendar day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEntry {
    pub kind: ScheduleKind,
    pub name: String,
    pub broker: String,
}

impl CalendarEntry {
    /// "name (broker)"
    pub fn display_label(&self) -> String {
        format!("{} ({})", self.name, self.broker)
    }
}

/// Represents a single weekday in the calendar grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarCell {
    pub day: u32,
    /// 0 = Monday .. 4 = Friday
    pub weekday: u32,
    pub week_of_month: u32,
    pub is_holiday: bool,
    pub is_today: bool,
    pub entries: Vec<CalendarEntry>,
}

/// One row of the grid, Monday through Friday
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarWeek {
    pub week_of_month: u32,
    pub cells: [Option<CalendarCell>; 5],
}

impl CalendarWeek {
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }
}

/// Represents a calendar month laid out as a Mon–Fri grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarGrid {
    pub year: i32,
    pub month: u32,
    pub weekday_labels: [String; 5],
    pub rows: Vec<CalendarWeek>,
}

impl CalendarGrid {
    /// Iterate over every placed cell, row-major
    pub fn cells(&self) -> impl Iterator<Item = &CalendarCell> {
        self.rows.iter().flat_map(|row| row.cells.iter().flatten())
    }
}

/// Represents the current focus date for calendar navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarFocusDate {
    pub year: i32,
    pub month: u32,
}

/// Request to update the calendar focus date
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpdateCalendarFocusRequest {
    pub year: i32,
    pub month: u32,
}

/// Response after updating calendar focus date
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpdateCalendarFocusResponse {
    pub focus_date: CalendarFocusDate,
    pub success_message: String,
}

/// Realized profit totals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfitSummary {
    /// Wall-clock year the yearly sum was computed for
    pub current_year: i32,
    pub total_profit: f64,
    pub year_profit: f64,
    /// Yearly profit, thousands-separated, no decimals
    pub formatted_year_profit: String,
}

/// Everything the dashboard page shows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    pub today: NaiveDate,
    pub weekly: WeeklySchedule,
    pub focus_date: CalendarFocusDate,
    pub calendar: CalendarGrid,
    pub profit: ProfitSummary,
}
