//! Realized profit totals from the trade log.

use chrono::Datelike;
use log::debug;
use shared::ProfitSummary;

use crate::backend::domain::formatting::format_rounded;
use crate::backend::domain::models::TradeEntry;

#[derive(Debug, Clone, Default)]
pub struct ProfitService;

impl ProfitService {
    pub fn new() -> Self {
        Self
    }

    /// Sum of realized profit over every trade
    pub fn total_profit(&self, trades: &[TradeEntry]) -> f64 {
        trades.iter().map(TradeEntry::profit_or_zero).sum()
    }

    /// Sum of realized profit over trades sold in `year`.
    /// Trades without a sale date belong to no year.
    pub fn year_profit(&self, trades: &[TradeEntry], year: i32) -> f64 {
        trades
            .iter()
            .filter(|trade| trade.sale_date.is_some_and(|d| d.year() == year))
            .map(TradeEntry::profit_or_zero)
            .sum()
    }

    pub fn summarize(&self, trades: &[TradeEntry], current_year: i32) -> ProfitSummary {
        let total_profit = self.total_profit(trades);
        let year_profit = self.year_profit(trades, current_year);
        debug!(
            "Profit over {} trades: total {}, {} {}",
            trades.len(),
            total_profit,
            current_year,
            year_profit
        );

        ProfitSummary {
            current_year,
            total_profit,
            year_profit,
            formatted_year_profit: format_rounded(year_profit),
        }
    }
}
