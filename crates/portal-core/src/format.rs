//! Presentation helpers that depend on the display locale.

use chrono::{Datelike, NaiveDate};

use crate::types::locale::Locale;

/// Format an inclusive date range for timeline display.
///
/// Russian output carries the `г.` year suffix:
///
/// - same year: `01.07. — 30.07.2025 г.` (`01.07 — 30.07.2025` in English)
/// - across years: `28.12.2024 — 05.01.2025 г.`
/// - single day: `01.07.2025 г.`
///
/// A reversed range is formatted in chronological order.
pub fn format_date_range(start: NaiveDate, end: NaiveDate, locale: Locale) -> String {
    let (start, end) = if start <= end { (start, end) } else { (end, start) };

    let body = if start == end {
        end.format("%d.%m.%Y").to_string()
    } else if start.year() == end.year() {
        let head = match locale {
            Locale::Ru => start.format("%d.%m.").to_string(),
            Locale::En => start.format("%d.%m").to_string(),
        };
        format!("{head} — {}", end.format("%d.%m.%Y"))
    } else {
        format!("{} — {}", start.format("%d.%m.%Y"), end.format("%d.%m.%Y"))
    };

    match locale {
        Locale::Ru => format!("{body} г."),
        Locale::En => body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn test_same_year_range() {
        assert_eq!(
            format_date_range(date(2025, 7, 1), date(2025, 7, 30), Locale::Ru),
            "01.07. — 30.07.2025 г."
        );
        assert_eq!(
            format_date_range(date(2025, 7, 1), date(2025, 7, 30), Locale::En),
            "01.07 — 30.07.2025"
        );
    }

    #[test]
    fn test_cross_year_range() {
        assert_eq!(
            format_date_range(date(2024, 12, 28), date(2025, 1, 5), Locale::Ru),
            "28.12.2024 — 05.01.2025 г."
        );
    }

    #[test]
    fn test_single_day_and_reversed() {
        assert_eq!(
            format_date_range(date(2025, 7, 1), date(2025, 7, 1), Locale::En),
            "01.07.2025"
        );
        assert_eq!(
            format_date_range(date(2025, 7, 30), date(2025, 7, 1), Locale::Ru),
            "01.07. — 30.07.2025 г."
        );
    }
}
