//! Date helper functions

use chrono::NaiveDate;

/// Format a date using a Moment.js-compatible format string
///
/// # Examples
/// ```ignore
/// format_date(&date, "MMM DD, YYYY") // -> "Jan 15, 2024"
/// ```
pub fn format_date(date: &NaiveDate, format: &str) -> String {
    let chrono_format = moment_to_chrono_format(format);
    date.format(&chrono_format).to_string()
}

/// ISO 8601 calendar date, for `datetime` attributes
pub fn date_iso(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Moment.js tokens, longest first within each family
const MOMENT_TOKENS: [(&str, &str); 9] = [
    ("YYYY", "%Y"),
    ("YY", "%y"),
    ("MMMM", "%B"),
    ("MMM", "%b"),
    ("MM", "%m"),
    ("DDDD", "%j"),
    ("DD", "%d"),
    ("dddd", "%A"),
    ("ddd", "%a"),
];

/// Convert Moment.js format to chrono format
///
/// Anything that is not a token is literal text, so `%` is escaped.
fn moment_to_chrono_format(format: &str) -> String {
    let mut result = String::with_capacity(format.len() + 8);
    let mut rest = format;

    'scan: while let Some(c) = rest.chars().next() {
        for (token, chrono_token) in MOMENT_TOKENS {
            if let Some(tail) = rest.strip_prefix(token) {
                result.push_str(chrono_token);
                rest = tail;
                continue 'scan;
            }
        }

        if c == '%' {
            result.push_str("%%");
        } else {
            result.push(c);
        }
        rest = &rest[c.len_utf8()..];
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(&date(), "YYYY-MM-DD"), "2024-01-05");
        assert_eq!(format_date(&date(), "MMM DD, YYYY"), "Jan 05, 2024");
        assert_eq!(format_date(&date(), "MMM"), "Jan");
        assert_eq!(format_date(&date(), " DD YYYY"), " 05 2024");
        assert_eq!(format_date(&date(), "MMMM D"), "January D");
    }

    #[test]
    fn test_date_iso() {
        assert_eq!(date_iso(&date()), "2024-01-05");
    }

    #[test]
    fn test_moment_to_chrono() {
        assert_eq!(moment_to_chrono_format("YYYY-MM-DD"), "%Y-%m-%d");
        assert_eq!(moment_to_chrono_format("dddd, MMMM DD"), "%A, %B %d");
        // a replaced token never feeds into the next one
        assert_eq!(moment_to_chrono_format("DDddd"), "%d%a");
    }

    #[test]
    fn test_literal_percent() {
        assert_eq!(moment_to_chrono_format("MMM DD (100%)"), "%b %d (100%%)");
        assert_eq!(format_date(&date(), "MMM DD (100%)"), "Jan 05 (100%)");
        assert_eq!(format_date(&date(), "%Y"), "%Y");
    }
}
