// Loose date parsing for spreadsheet text cells

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Display format for every date shown on the dashboard, e.g. `05-Mar-2024`.
pub const DISPLAY_DATE_FORMAT: &str = "%d-%b-%Y";

/// Date-and-time layouts tried before falling back to date-only layouts.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Order matters: month-first `m/d/Y` wins over `d/m/Y` when both are valid.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y.%m.%d",
    "%m/%d/%Y",
    "%d/%m/%Y",
    "%m-%d-%Y",
    "%d.%m.%Y",
    "%d-%b-%Y",
    "%d-%B-%Y",
    "%d %b %Y",
    "%d %B %Y",
    "%b %d, %Y",
    "%B %d, %Y",
    "%b %d %Y",
    "%B %d %Y",
];

/// Best-effort parse of a free-text date. Returns `None` for anything that
/// doesn't look like one of the supported layouts.
pub fn parse_loose_date(text: &str) -> Option<NaiveDate> {
    let s = text.trim();
    if s.is_empty() || !s.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

pub fn format_display_date(date: NaiveDate) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn iso_and_slash_layouts() {
        assert_eq!(parse_loose_date("2024-01-15"), Some(ymd(2024, 1, 15)));
        assert_eq!(parse_loose_date(" 2024/01/15 "), Some(ymd(2024, 1, 15)));
        assert_eq!(parse_loose_date("2024.01.15"), Some(ymd(2024, 1, 15)));
    }

    #[test]
    fn timestamps_keep_only_the_date() {
        assert_eq!(parse_loose_date("2024-01-15 00:00:00"), Some(ymd(2024, 1, 15)));
        assert_eq!(parse_loose_date("2024-01-15T09:30:00"), Some(ymd(2024, 1, 15)));
        assert_eq!(parse_loose_date("2024-01-15T09:30:00+07:00"), Some(ymd(2024, 1, 15)));
    }

    #[test]
    fn month_first_then_day_first() {
        assert_eq!(parse_loose_date("03/05/2024"), Some(ymd(2024, 3, 5)));
        // 15 cannot be a month, so the day-first layout applies
        assert_eq!(parse_loose_date("15/01/2024"), Some(ymd(2024, 1, 15)));
    }

    #[test]
    fn named_months() {
        assert_eq!(parse_loose_date("05-Mar-2024"), Some(ymd(2024, 3, 5)));
        assert_eq!(parse_loose_date("5 March 2024"), Some(ymd(2024, 3, 5)));
        assert_eq!(parse_loose_date("Mar 5, 2024"), Some(ymd(2024, 3, 5)));
        assert_eq!(parse_loose_date("January 15, 2024"), Some(ymd(2024, 1, 15)));
    }

    #[test]
    fn garbage_is_none() {
        assert_eq!(parse_loose_date(""), None);
        assert_eq!(parse_loose_date("Alice Smith"), None);
        assert_eq!(parse_loose_date("yes"), None);
        assert_eq!(parse_loose_date("2024-13-45"), None);
        assert_eq!(parse_loose_date("12345"), None);
    }

    #[test]
    fn display_is_two_digit_day_short_month_four_digit_year() {
        assert_eq!(format_display_date(ymd(2024, 1, 1)), "01-Jan-2024");
        assert_eq!(format_display_date(ymd(2024, 12, 31)), "31-Dec-2024");
    }
}
