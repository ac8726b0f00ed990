//! Orchestrates the three dashboard views from one worksheet snapshot.

use chrono::NaiveDate;
use shared::{CalendarGrid, DashboardView, ProfitSummary, WeeklySchedule};
use std::sync::Arc;

use crate::backend::domain::calendar::{CalendarCursor, CalendarService};
use crate::backend::domain::clock::Clock;
use crate::backend::domain::holidays::HolidayCalendar;
use crate::backend::domain::profit_service::ProfitService;
use crate::backend::domain::weekly_service::WeeklyScheduleService;
use crate::backend::storage::DashboardData;

#[derive(Clone)]
pub struct DashboardService {
    weekly_service: WeeklyScheduleService,
    calendar_service: CalendarService,
    profit_service: ProfitService,
    holidays: Arc<dyn HolidayCalendar>,
    clock: Arc<dyn Clock>,
}

impl DashboardService {
    pub fn new(holidays: Arc<dyn HolidayCalendar>, clock: Arc<dyn Clock>) -> Self {
        Self {
            weekly_service: WeeklyScheduleService::new(),
            calendar_service: CalendarService::new(),
            profit_service: ProfitService::new(),
            holidays,
            clock,
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn calendar_service(&self) -> &CalendarService {
        &self.calendar_service
    }

    pub fn weekly(&self, data: &DashboardData) -> WeeklySchedule {
        self.weekly_service
            .build_weekly_schedule(&data.schedule, self.clock.today())
    }

    pub fn calendar(&self, data: &DashboardData, cursor: CalendarCursor) -> CalendarGrid {
        self.calendar_service.build_month_grid(
            cursor,
            &data.schedule,
            self.holidays.as_ref(),
            self.clock.today(),
        )
    }

    /// Profit totals for the wall-clock year, independent of the displayed month
    pub fn profit(&self, data: &DashboardData) -> ProfitSummary {
        self.profit_service
            .summarize(&data.trades, self.clock.current_year())
    }

    pub fn build_view(&self, data: &DashboardData, cursor: CalendarCursor) -> DashboardView {
        DashboardView {
            today: self.clock.today(),
            weekly: self.weekly(data),
            focus_date: cursor.into(),
            calendar: self.calendar(data, cursor),
            profit: self.profit(data),
        }
    }
}
