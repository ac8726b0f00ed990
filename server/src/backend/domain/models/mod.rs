pub mod schedule;
pub mod trade;

pub use schedule::ScheduleEntry;
pub use trade::TradeEntry;
