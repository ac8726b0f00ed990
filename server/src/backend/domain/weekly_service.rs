//! "This week" card list.
//!
//! The window runs Monday through Friday of the week containing today.
//! Weekends are outside the window even when today is a Saturday or Sunday.

use chrono::{Datelike, Duration, NaiveDate};
use log::debug;
use shared::{CardDetail, CardHighlight, ScheduleKind, WeeklyCard, WeeklySchedule};

use crate::backend::domain::formatting::{format_card_date, format_shares, format_won, MISSING};
use crate::backend::domain::models::ScheduleEntry;

/// Builds the weekly card list from the schedule sheet
#[derive(Debug, Clone, Default)]
pub struct WeeklyScheduleService;

impl WeeklyScheduleService {
    pub fn new() -> Self {
        Self
    }

    /// Monday and Friday of the week containing `today`
    pub fn week_window(&self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        let monday = today - Duration::days(today.weekday().num_days_from_monday() as i64);
        (monday, monday + Duration::days(4))
    }

    /// Select, sort and format the entries that have a date in this week's window
    pub fn build_weekly_schedule(&self, entries: &[ScheduleEntry], today: NaiveDate) -> WeeklySchedule {
        let (window_start, window_end) = self.week_window(today);
        let in_window = |date: Option<NaiveDate>| {
            date.is_some_and(|d| window_start <= d && d <= window_end)
        };

        let mut selected: Vec<(NaiveDate, &ScheduleEntry)> = entries
            .iter()
            .filter_map(|entry| {
                let reference = if in_window(entry.subscription_date) {
                    entry.subscription_date
                } else if in_window(entry.listing_date) {
                    entry.listing_date
                } else {
                    None
                };
                reference.map(|date| (date, entry))
            })
            .collect();
        // sort_by_key is stable, so same-day entries keep sheet order
        selected.sort_by_key(|(reference, _)| *reference);

        debug!(
            "Weekly window {} ~ {}: {} of {} entries selected",
            window_start,
            window_end,
            selected.len(),
            entries.len()
        );

        let cards = selected
            .into_iter()
            .map(|(reference, entry)| {
                self.build_card(
                    entry,
                    reference,
                    today,
                    in_window(entry.subscription_date),
                    in_window(entry.listing_date),
                )
            })
            .collect();

        WeeklySchedule {
            window_start,
            window_end,
            cards,
        }
    }

    fn build_card(
        &self,
        entry: &ScheduleEntry,
        reference_date: NaiveDate,
        today: NaiveDate,
        subscription_in_window: bool,
        listing_in_window: bool,
    ) -> WeeklyCard {
        let subscription_today = entry.subscription_date == Some(today);
        let listing_today = entry.listing_date == Some(today);

        let mut badges = Vec::with_capacity(2);
        if subscription_in_window {
            badges.push(ScheduleKind::Subscription);
        }
        if listing_in_window {
            badges.push(ScheduleKind::Listing);
        }

        let detail = if listing_in_window || listing_today {
            CardDetail::Allotment(format_shares(entry.total_allotment()))
        } else {
            CardDetail::MinDeposit(format_won(entry.min_deposit))
        };

        let highlight = if subscription_today {
            CardHighlight::Subscription
        } else if listing_today {
            CardHighlight::Listing
        } else {
            CardHighlight::None
        };

        WeeklyCard {
            name: entry.name.clone(),
            broker: entry.broker.clone(),
            theme: entry.theme.clone(),
            subscription_date: entry.subscription_date,
            listing_date: entry.listing_date,
            reference_date,
            subscription_display: format_card_date(entry.subscription_date),
            listing_display: format_card_date(entry.listing_date),
            badges,
            offer_price: format_won(entry.offer_price),
            detail,
            forecast: entry.forecast.clone(),
            forecast_label: entry
                .forecast
                .as_ref()
                .map_or_else(|| MISSING.to_string(), |f| f.label().to_string()),
            highlight,
        }
    }
}
