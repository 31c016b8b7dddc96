use chrono::{DateTime, FixedOffset, Locale, Offset, Utc};

const TIMESTAMP_FORMAT: &str = "%b %-d, %Y, %I:%M %p";
const DATE_FORMAT: &str = "%x";

/// Locale and UTC offset used for every rendered date.
#[derive(Debug, Clone, Copy)]
pub struct DisplayConfig {
    pub locale: Locale,
    pub offset: FixedOffset,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            locale: Locale::en_US,
            offset: Utc.fix(),
        }
    }
}

impl DisplayConfig {
    pub fn new(locale: Locale, offset: FixedOffset) -> Self {
        Self { locale, offset }
    }

    /// Month abbreviation, day, year and 12-hour time, e.g. `Jan 5, 2026, 03:07 PM`.
    pub fn format_timestamp(&self, timestamp: DateTime<Utc>) -> String {
        timestamp
            .with_timezone(&self.offset)
            .format_localized(TIMESTAMP_FORMAT, self.locale)
            .to_string()
    }

    pub fn format_date(&self, timestamp: DateTime<Utc>) -> String {
        timestamp
            .with_timezone(&self.offset)
            .format_localized(DATE_FORMAT, self.locale)
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 5, h, m, 0).unwrap()
    }

    #[test]
    fn formats_in_us_english_by_default() {
        let display = DisplayConfig::default();
        assert_eq!(display.format_timestamp(at(15, 7)), "Jan 5, 2026, 03:07 PM");
        assert_eq!(display.format_timestamp(at(9, 30)), "Jan 5, 2026, 09:30 AM");
    }

    #[test]
    fn applies_configured_offset() {
        let display = DisplayConfig::new(Locale::en_US, FixedOffset::east_opt(3600).unwrap());
        assert_eq!(display.format_timestamp(at(23, 30)), "Jan 6, 2026, 12:30 AM");

        let west = DisplayConfig::new(Locale::en_US, FixedOffset::west_opt(5 * 3600).unwrap());
        assert_eq!(west.format_timestamp(at(2, 0)), "Jan 4, 2026, 09:00 PM");
    }

    #[test]
    fn same_input_same_output() {
        let display = DisplayConfig::default();
        assert_eq!(display.format_timestamp(at(12, 0)), display.format_timestamp(at(12, 0)));
        assert_eq!(display.format_date(at(12, 0)), display.format_date(at(12, 0)));
    }

    #[test]
    fn short_date_contains_year() {
        let display = DisplayConfig::default();
        assert!(display.format_date(at(12, 0)).contains("2026"));
    }
}
