//! Korean public holiday lookup used to colour calendar day numbers.
//!
//! Solar holidays and their substitute days are computed. Lunar holidays
//! (설날, 부처님오신날, 추석), their substitutes, election days and one-off
//! temporary holidays come from a hardcoded table. Extend it as years are
//! announced.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::collections::BTreeSet;

/// Yearly public holiday sets
pub trait HolidayCalendar: Send + Sync {
    /// All holidays falling in `year`
    fn holidays_in_year(&self, year: i32) -> BTreeSet<NaiveDate>;
}

/// (month, day, gets a substitute day when it lands on a weekend or another holiday)
const SOLAR_HOLIDAYS: &[(u32, u32, bool)] = &[
    (1, 1, false),  // 신정
    (3, 1, true),   // 삼일절
    (5, 5, true),   // 어린이날
    (6, 6, false),  // 현충일
    (8, 15, true),  // 광복절
    (10, 3, true),  // 개천절
    (10, 9, true),  // 한글날
    (12, 25, true), // 성탄절
];

/// Substitute-holiday rules cover every substitutable solar holiday from this year on
const SUBSTITUTE_RULES_FROM: i32 = 2023;

const LUNAR_AND_SPECIAL: &[(i32, u32, u32)] = &[
    // ── 2023 ──
    (2023, 1, 21), (2023, 1, 22), (2023, 1, 23), // 설날
    (2023, 1, 24),                               // 설날 대체
    (2023, 5, 27),                               // 부처님오신날
    (2023, 5, 29),                               // 부처님오신날 대체
    (2023, 9, 28), (2023, 9, 29), (2023, 9, 30), // 추석
    (2023, 10, 2),                               // 임시공휴일
    // ── 2024 ──
    (2024, 2, 9), (2024, 2, 10), (2024, 2, 11), // 설날
    (2024, 2, 12),                              // 설날 대체
    (2024, 4, 10),                              // 국회의원 선거
    (2024, 5, 15),                              // 부처님오신날
    (2024, 9, 16), (2024, 9, 17), (2024, 9, 18), // 추석
    (2024, 10, 1),                              // 국군의 날 임시공휴일
    // ── 2025 ──
    (2025, 1, 27),                              // 임시공휴일
    (2025, 1, 28), (2025, 1, 29), (2025, 1, 30), // 설날
    (2025, 5, 5),                               // 부처님오신날
    (2025, 6, 3),                               // 대통령 선거
    (2025, 10, 5), (2025, 10, 6), (2025, 10, 7), // 추석
    (2025, 10, 8),                              // 추석 대체
    // ── 2026 ──
    (2026, 2, 16), (2026, 2, 17), (2026, 2, 18), // 설날
    (2026, 5, 24),                              // 부처님오신날
    (2026, 5, 25),                              // 부처님오신날 대체
    (2026, 6, 3),                               // 지방선거
    (2026, 9, 24), (2026, 9, 25), (2026, 9, 26), // 추석
    // ── 2027 ──
    (2027, 2, 6), (2027, 2, 7), (2027, 2, 8),   // 설날
    (2027, 2, 9),                               // 설날 대체
    (2027, 5, 13),                              // 부처님오신날
    (2027, 9, 14), (2027, 9, 15), (2027, 9, 16), // 추석
];

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Korean public holidays plus any configured extra days off
#[derive(Debug, Clone, Default)]
pub struct KoreanHolidays {
    extra: BTreeSet<NaiveDate>,
}

impl KoreanHolidays {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_extra_holidays<I: IntoIterator<Item = NaiveDate>>(extra: I) -> Self {
        Self {
            extra: extra.into_iter().collect(),
        }
    }

    fn table_holidays(year: i32) -> impl Iterator<Item = NaiveDate> {
        LUNAR_AND_SPECIAL
            .iter()
            .filter(move |(y, _, _)| *y == year)
            .filter_map(|(y, m, d)| NaiveDate::from_ymd_opt(*y, *m, *d))
    }
}

impl HolidayCalendar for KoreanHolidays {
    fn holidays_in_year(&self, year: i32) -> BTreeSet<NaiveDate> {
        let table: BTreeSet<NaiveDate> = Self::table_holidays(year).collect();
        let mut holidays = table.clone();

        let solar: Vec<(NaiveDate, bool)> = SOLAR_HOLIDAYS
            .iter()
            .filter_map(|(m, d, substitutable)| {
                NaiveDate::from_ymd_opt(year, *m, *d).map(|date| (date, *substitutable))
            })
            .collect();
        holidays.extend(solar.iter().map(|(date, _)| *date));

        if year >= SUBSTITUTE_RULES_FROM {
            for (date, substitutable) in solar {
                if !substitutable || !(is_weekend(date) || table.contains(&date)) {
                    continue;
                }
                let mut candidate = date + Duration::days(1);
                while is_weekend(candidate) || holidays.contains(&candidate) {
                    candidate += Duration::days(1);
                }
                holidays.insert(candidate);
            }
        }

        holidays.extend(self.extra.iter().filter(|d| d.year() == year).copied());
        holidays
    }
}
