//! Display formatting shared by the weekly cards and the profit summary.

use chrono::{Datelike, NaiveDate};

/// Placeholder shown for missing values
pub const MISSING: &str = "-";

const KOREAN_WEEKDAYS: [&str; 7] = ["월", "화", "수", "목", "금", "토", "일"];

/// Insert `,` every three digits: `-1234567` -> `-1,234,567`
pub fn format_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Truncated amount with a `원` suffix, or the placeholder
pub fn format_won(amount: Option<f64>) -> String {
    match amount {
        Some(value) => format!("{}원", format_thousands(value.trunc() as i64)),
        None => MISSING.to_string(),
    }
}

/// Share count with a `주` suffix; zero shares show the placeholder
pub fn format_shares(shares: i64) -> String {
    if shares > 0 {
        format!("{}주", format_thousands(shares))
    } else {
        MISSING.to_string()
    }
}

/// Amount rounded half-to-even without decimals, as used for the profit line
pub fn format_rounded(amount: f64) -> String {
    format_thousands(amount.round_ties_even() as i64)
}

/// Korean one-letter weekday, Monday = 월
pub fn korean_weekday(date: NaiveDate) -> &'static str {
    KOREAN_WEEKDAYS[date.weekday().num_days_from_monday() as usize]
}

/// `MM-DD (요일)` or the placeholder
pub fn format_card_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(d) => format!("{} ({})", d.format("%m-%d"), korean_weekday(d)),
        None => MISSING.to_string(),
    }
}
