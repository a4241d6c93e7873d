//! Date helper functions

use chrono::{Local, NaiveDate};

/// Format accepted in the `date` front-matter field
pub const POST_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a post date (`YYYY-MM-DD`)
pub fn parse_post_date(s: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(s, POST_DATE_FORMAT)
}

/// Today's local date formatted as a post date
pub fn today() -> String {
    Local::now().format(POST_DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_post_date() {
        let date = parse_post_date("2026-01-30").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2026, 1, 30).unwrap());
    }

    #[test]
    fn test_parse_post_date_rejects_other_formats() {
        assert!(parse_post_date("2026/01/30").is_err());
        assert!(parse_post_date("30-01-2026").is_err());
        assert!(parse_post_date("2026-02-30").is_err());
        assert!(parse_post_date("yesterday").is_err());
    }

    #[test]
    fn test_today_round_trips() {
        let today = today();
        assert_eq!(today.len(), 10);
        assert!(parse_post_date(&today).is_ok());
    }
}
