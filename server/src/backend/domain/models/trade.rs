use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of the `매매` worksheet after coercion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeEntry {
    pub sale_date: Option<NaiveDate>,
    pub realized_profit: Option<f64>,
}

impl TradeEntry {
    /// Realized profit, zero when the cell was blank or unparseable
    pub fn profit_or_zero(&self) -> f64 {
        self.realized_profit.unwrap_or(0.0)
    }
}
