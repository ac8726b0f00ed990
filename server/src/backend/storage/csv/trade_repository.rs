use log::info;
use serde::Deserialize;

use super::connection::CsvConnection;
use crate::backend::domain::coercion::{coerce_date, coerce_number};
use crate::backend::domain::models::TradeEntry;
use crate::backend::storage::traits::DataLoadError;

/// Raw `매매` row; other columns of the sheet are ignored
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TradeRow {
    #[serde(rename = "매도일")]
    sale_date: Option<String>,
    #[serde(rename = "실제이익")]
    realized_profit: Option<String>,
}

/// CSV-based repository for the trade log worksheet
#[derive(Debug, Clone)]
pub struct TradeRepository {
    connection: CsvConnection,
}

impl TradeRepository {
    pub fn new(connection: CsvConnection) -> Self {
        Self { connection }
    }

    pub fn read_trades(&self) -> Result<Vec<TradeEntry>, DataLoadError> {
        let path = self.connection.trades_file_path();
        let mut reader = self.connection.open_reader(&path)?;

        let mut trades = Vec::new();
        for result in reader.deserialize::<TradeRow>() {
            let row = result.map_err(|source| DataLoadError::Csv {
                path: path.clone(),
                source,
            })?;
            trades.push(TradeEntry {
                sale_date: row.sale_date.as_deref().and_then(coerce_date),
                realized_profit: row.realized_profit.as_deref().and_then(coerce_number),
            });
        }

        info!("Loaded {} trade rows from {}", trades.len(), path.display());
        Ok(trades)
    }
}
