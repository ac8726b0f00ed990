use log::{info, warn};
use serde::Deserialize;
use shared::Forecast;

use super::connection::CsvConnection;
use crate::backend::domain::coercion::{coerce_date, coerce_integer, coerce_number};
use crate::backend::domain::models::ScheduleEntry;
use crate::backend::storage::traits::DataLoadError;

/// Raw `일정` row exactly as exported; every cell is optional text
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ScheduleRow {
    #[serde(rename = "종목명")]
    name: Option<String>,
    #[serde(rename = "증권사")]
    broker: Option<String>,
    #[serde(rename = "테마")]
    theme: Option<String>,
    #[serde(rename = "청약일")]
    subscription_date: Option<String>,
    #[serde(rename = "상장일")]
    listing_date: Option<String>,
    #[serde(rename = "공모가")]
    offer_price: Option<String>,
    #[serde(rename = "최소증거금")]
    min_deposit: Option<String>,
    #[serde(rename = "균등")]
    even_allocation: Option<String>,
    #[serde(rename = "비례")]
    pro_rata_allocation: Option<String>,
    #[serde(rename = "예측")]
    forecast: Option<String>,
}

impl ScheduleRow {
    fn into_entry(self) -> ScheduleEntry {
        let text = |cell: Option<String>| cell.map(|s| s.trim().to_string()).unwrap_or_default();

        ScheduleEntry {
            subscription_date: self.subscription_date.as_deref().and_then(coerce_date),
            listing_date: self.listing_date.as_deref().and_then(coerce_date),
            offer_price: self.offer_price.as_deref().and_then(coerce_number),
            min_deposit: self.min_deposit.as_deref().and_then(coerce_number),
            even_allocation: self.even_allocation.as_deref().and_then(coerce_integer),
            pro_rata_allocation: self.pro_rata_allocation.as_deref().and_then(coerce_integer),
            forecast: self.forecast.as_deref().and_then(Forecast::from_cell),
            name: text(self.name),
            broker: text(self.broker),
            theme: text(self.theme),
        }
    }
}

/// CSV-based repository for the schedule worksheet
#[derive(Debug, Clone)]
pub struct ScheduleRepository {
    connection: CsvConnection,
}

impl ScheduleRepository {
    pub fn new(connection: CsvConnection) -> Self {
        Self { connection }
    }

    /// Read all schedule rows, coercing dates and numbers
    pub fn read_schedule(&self) -> Result<Vec<ScheduleEntry>, DataLoadError> {
        let path = self.connection.schedule_file_path();
        let mut reader = self.connection.open_reader(&path)?;

        let mut entries = Vec::new();
        for result in reader.deserialize::<ScheduleRow>() {
            let row = result.map_err(|source| DataLoadError::Csv {
                path: path.clone(),
                source,
            })?;
            entries.push(row.into_entry());
        }

        let undated = entries
            .iter()
            .filter(|e| e.subscription_date.is_none() && e.listing_date.is_none())
            .count();
        if undated > 0 {
            warn!("{} schedule rows have neither a subscription nor a listing date", undated);
        }
        info!("Loaded {} schedule rows from {}", entries.len(), path.display());
        Ok(entries)
    }
}
