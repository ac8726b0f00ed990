use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::{Forecast, ScheduleKind};

/// One row of the `일정` worksheet after coercion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub name: String,
    pub broker: String,
    pub theme: String,
    pub subscription_date: Option<NaiveDate>,
    pub listing_date: Option<NaiveDate>,
    pub offer_price: Option<f64>,
    pub min_deposit: Option<f64>,
    pub even_allocation: Option<i64>,
    pub pro_rata_allocation: Option<i64>,
    pub forecast: Option<Forecast>,
}

impl ScheduleEntry {
    /// Subscription and listing dates tagged with their kind, subscription first
    pub fn dated_events(&self) -> impl Iterator<Item = (ScheduleKind, NaiveDate)> {
        [
            (ScheduleKind::Subscription, self.subscription_date),
            (ScheduleKind::Listing, self.listing_date),
        ]
        .into_iter()
        .filter_map(|(kind, date)| date.map(|d| (kind, d)))
    }

    /// Even plus pro-rata shares, missing parts counting as zero
    pub fn total_allotment(&self) -> i64 {
        self.even_allocation.unwrap_or(0) + self.pro_rata_allocation.unwrap_or(0)
    }
}
