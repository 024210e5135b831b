use chrono::{Local, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;

/// Matches an ordinal date, an ISO date or the word "tomorrow",
/// optionally preceded by "by" or "from"
static DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:by|from)?\s?(\d{1,2}(?:st|nd|rd|th)? \w+ \d{4}|\d{4}-\d{2}-\d{2}|tomorrow)")
        .expect("valid date pattern")
});

static ORDINAL_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)(?:st|nd|rd|th)").expect("valid ordinal pattern"));

/// Four-letter September abbreviation, which `%B` does not accept
static SEPT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bsept\b").expect("valid month pattern"));

const OUTPUT_FORMAT: &str = "%Y-%m-%d";

/// Extracts a shipping date from free text as `YYYY-MM-DD`
///
/// Relative dates resolve against today's local date. Returns an empty
/// string when no date can be found or parsed.
///
/// ```
/// use catalog_crawl::normalize::format_shipping_date;
///
/// assert_eq!(format_shipping_date("Delivered by 3rd April 2024"), "2024-04-03");
/// assert_eq!(format_shipping_date("no date info"), "");
/// ```
pub fn format_shipping_date(text: &str) -> String {
    format_shipping_date_from(text, Local::now().date_naive())
}

/// Same as [`format_shipping_date`], resolving "tomorrow" against `today`
pub fn format_shipping_date_from(text: &str, today: NaiveDate) -> String {
    let Some(captures) = DATE_PATTERN.captures(text) else {
        return String::new();
    };
    let date_text = &captures[1];

    let date = if date_text.eq_ignore_ascii_case("tomorrow") {
        today.succ_opt()
    } else if date_text.contains('-') {
        parse_iso(date_text)
    } else {
        parse_ordinal(date_text)
    };

    date.map(|d| d.format(OUTPUT_FORMAT).to_string())
        .unwrap_or_default()
}

/// Parses `2024-01-15`
fn parse_iso(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()
}

/// Parses `1st January 2024`, `21 Aug 2024` and friends
fn parse_ordinal(text: &str) -> Option<NaiveDate> {
    let plain = ORDINAL_SUFFIX.replace_all(text, "$1");
    let plain = SEPT.replace_all(&plain, "Sep");
    NaiveDate::parse_from_str(&plain, "%d %B %Y").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 31).unwrap()
    }

    #[test]
    fn test_ordinal_date_after_by() {
        assert_eq!(
            format_shipping_date_from("Delivered by 3rd April 2024", today()),
            "2024-04-03"
        );
    }

    #[test]
    fn test_ordinal_date_with_weekday_and_short_month() {
        assert_eq!(
            format_shipping_date_from("Delivery from Wednesday 21st Aug 2024", today()),
            "2024-08-21"
        );
    }

    #[test]
    fn test_ordinal_suffixes() {
        assert_eq!(format_shipping_date_from("1st January 2024", today()), "2024-01-01");
        assert_eq!(format_shipping_date_from("2nd May 2024", today()), "2024-05-02");
        assert_eq!(format_shipping_date_from("11th June 2024", today()), "2024-06-11");
    }

    #[test]
    fn test_sept_abbreviation() {
        assert_eq!(format_shipping_date_from("from 3rd Sept 2024", today()), "2024-09-03");
        assert_eq!(format_shipping_date_from("by 30 sept 2024", today()), "2024-09-30");
        assert_eq!(format_shipping_date_from("3rd September 2024", today()), "2024-09-03");
    }

    #[test]
    fn test_iso_date() {
        assert_eq!(format_shipping_date_from("Ships 2024-04-03", today()), "2024-04-03");
    }

    #[test]
    fn test_invalid_iso_date_is_empty() {
        assert_eq!(format_shipping_date_from("Ships 2024-13-45", today()), "");
    }

    #[test]
    fn test_tomorrow_resolves_against_today() {
        assert_eq!(format_shipping_date_from("Arrives tomorrow", today()), "2024-04-01");
        assert_eq!(format_shipping_date_from("Order now for delivery TOMORROW", today()), "2024-04-01");
    }

    #[test]
    fn test_tomorrow_uses_local_clock() {
        let expected = Local::now()
            .date_naive()
            .succ_opt()
            .unwrap()
            .format(OUTPUT_FORMAT)
            .to_string();
        assert_eq!(format_shipping_date("Arrives tomorrow"), expected);
    }

    #[test]
    fn test_unknown_month_is_empty() {
        assert_eq!(format_shipping_date_from("Delivery by 3rd Smarch 2024", today()), "");
    }

    #[test]
    fn test_no_date_is_empty() {
        assert_eq!(format_shipping_date_from("no date info", today()), "");
        assert_eq!(format_shipping_date_from("", today()), "");
    }
}
